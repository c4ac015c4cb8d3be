use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("wxa version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
