//! 集成測試

use matinv::{
    CachedMatrix, InverseResolver, InversionCalculator, Matrix, MatrixError, SolverConfig,
};

#[test]
fn test_round_trip_replace_and_hit() {
    // 場景：diag(3,3,3) 的逆為 diag(1/3)；替換為 diag(4,4,4) 後
    // 逆為 diag(0.25)；再次解析走緩存命中

    let mut cache = CachedMatrix::new(Matrix::diagonal(&[3.0, 3.0, 3.0]));
    let mut resolver = InverseResolver::default();

    // 1. 第一次解析：未命中，計算 diag(1/3)
    let first = resolver.resolve(&mut cache).unwrap();
    let third = 1.0 / 3.0;
    assert!(first.approx_eq(&Matrix::diagonal(&[third, third, third]), 1e-12));
    assert_eq!(resolver.cache_misses(), 1);
    assert_eq!(resolver.cache_hits(), 0);

    // 2. 替換矩陣：緩存過期
    cache
        .set_matrix(vec![
            vec![4.0, 0.0, 0.0],
            vec![0.0, 4.0, 0.0],
            vec![0.0, 0.0, 4.0],
        ])
        .unwrap();
    assert!(cache.is_stale());

    // 3. 重新解析：計算的是新矩陣的逆
    let second = resolver.resolve(&mut cache).unwrap();
    assert!(second.approx_eq(&Matrix::diagonal(&[0.25, 0.25, 0.25]), 1e-12));
    assert_eq!(resolver.cache_misses(), 2);
    assert_eq!(resolver.cache_hits(), 0);

    // 4. 再次解析：命中，逐位相同
    let again = resolver.resolve(&mut cache).unwrap();
    assert_eq!(again, second);
    assert_eq!(resolver.cache_misses(), 2);
    assert_eq!(resolver.cache_hits(), 1);
}

#[test]
fn test_resolved_inverse_times_matrix_is_identity() {
    let mut cache = CachedMatrix::new(
        Matrix::from_rows(vec![
            vec![2.0, 1.0, 1.0],
            vec![1.0, 3.0, 2.0],
            vec![1.0, 0.0, 4.0],
        ])
        .unwrap(),
    );
    let mut resolver = InverseResolver::default();

    let inverse = resolver.resolve(&mut cache).unwrap();
    let product = cache.matrix().multiply(&inverse).unwrap();

    assert!(product.approx_eq(
        &Matrix::identity(3),
        resolver.config().verify_tolerance
    ));
}

#[test]
fn test_singular_matrix_reported_and_cache_stays_empty() {
    // 2×2 全零矩陣不可逆
    let mut cache = CachedMatrix::new(Matrix::zeros(2));
    let mut resolver = InverseResolver::default();

    let result = resolver.resolve(&mut cache);

    assert!(matches!(result, Err(MatrixError::SingularMatrixError(_))));
    // 失敗後緩存仍為初始狀態：無逆矩陣、過期
    assert!(cache.inverse().is_none());
    assert!(cache.is_stale());
}

#[test]
fn test_shape_error_keeps_cache_serving_hits() {
    let mut cache = CachedMatrix::new(Matrix::diagonal(&[2.0, 2.0]));
    let mut resolver = InverseResolver::default();

    resolver.resolve(&mut cache).unwrap();

    // 非方陣替換失敗，既有緩存完全不受影響
    let result = cache.set_matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    assert!(matches!(result, Err(MatrixError::ShapeError { .. })));
    assert!(!cache.is_stale());
    assert_eq!(cache.matrix(), &Matrix::diagonal(&[2.0, 2.0]));

    // 失敗的替換之後解析仍然命中
    resolver.resolve(&mut cache).unwrap();
    assert_eq!(resolver.cache_hits(), 1);
    assert_eq!(resolver.cache_misses(), 1);
}

#[test]
fn test_resolver_matches_direct_calculator() {
    let matrix = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
    let config = SolverConfig::default();

    let direct = InversionCalculator::invert(&matrix, &config).unwrap();

    let mut cache = CachedMatrix::new(matrix);
    let mut resolver = InverseResolver::new(config);
    let resolved = resolver.resolve(&mut cache).unwrap();

    assert_eq!(direct, resolved);
}
