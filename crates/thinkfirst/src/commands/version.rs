pub fn run() -> anyhow::Result<()> {
    println!("thinkfirst {}", env!("CARGO_PKG_VERSION"));
    println!("A mandatory pause before AI chat sites");
    Ok(())
}
