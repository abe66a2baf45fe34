//! 簡單求逆示例

use matinv::{CachedMatrix, InverseResolver, Matrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 簡單求逆示例 ===\n");

    let matrix = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]])?;

    let mut cache = CachedMatrix::new(matrix);
    let mut resolver = InverseResolver::default();

    let inverse = resolver.resolve(&mut cache)?;

    println!("矩陣:");
    for row in cache.matrix().to_rows() {
        println!("  {:?}", row);
    }

    println!("\n逆矩陣:");
    for row in inverse.to_rows() {
        println!("  {:?}", row);
    }

    // 驗證 M × M⁻¹ ≈ I
    let product = cache.matrix().multiply(&inverse)?;
    let is_identity = product.approx_eq(
        &Matrix::identity(cache.matrix().dimension()),
        resolver.config().verify_tolerance,
    );
    println!("\nM × M⁻¹ ≈ I: {}", is_identity);

    Ok(())
}
