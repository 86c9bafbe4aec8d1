use anyhow::{Context, Result};
use log::debug;

use consumer_arith::add;

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let a: i64 = args
        .next()
        .context("Missing first operand")?
        .parse()
        .context("First operand is not an integer")?;
    let b: i64 = args
        .next()
        .context("Missing second operand")?
        .parse()
        .context("Second operand is not an integer")?;

    debug!("Adding {} and {}", a, b);
    println!("{}", add(a, b));

    Ok(())
}
