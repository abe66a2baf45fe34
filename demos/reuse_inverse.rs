//! 緩存重用示例：觀察命中與未命中事件

use matinv::{CachedMatrix, InverseResolver, Matrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 安裝日誌訂閱器，讓解析器的命中/未命中事件可見
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== 緩存重用示例 ===\n");

    let mut cache = CachedMatrix::new(Matrix::diagonal(&[3.0, 3.0, 3.0]));
    let mut resolver = InverseResolver::default();

    let first = resolver.resolve(&mut cache)?;
    println!("第一次解析（未命中）: 對角元素 {}", first.get(0, 0));

    let second = resolver.resolve(&mut cache)?;
    println!("第二次解析（命中）: 對角元素 {}", second.get(0, 0));

    cache.set_matrix(vec![
        vec![4.0, 0.0, 0.0],
        vec![0.0, 4.0, 0.0],
        vec![0.0, 0.0, 4.0],
    ])?;
    println!("\n矩陣已替換，緩存過期: {}", cache.is_stale());

    let third = resolver.resolve(&mut cache)?;
    println!("第三次解析（重新計算）: 對角元素 {}", third.get(0, 0));

    println!(
        "\n命中 {} 次，未命中 {} 次",
        resolver.cache_hits(),
        resolver.cache_misses()
    );

    Ok(())
}
