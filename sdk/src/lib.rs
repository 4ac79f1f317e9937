use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;
pub use log::{trace, debug, info, warn, error};
pub use anyhow::Result;
pub use anyhow;
pub use dotenvy;
pub use lazy_static::lazy_static;
pub use winnow;

/// Safe to call repeatedly; solver tests call it too.
pub fn init() {
    dotenvy::dotenv().ok();
    let _ = pretty_env_logger::try_init();
}

pub fn lines(path: impl AsRef<Path>) -> Result<impl Iterator<Item=io::Result<String>>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(reader.lines())
}

/// Input path for a solver binary: first CLI argument, falling back to `default`.
pub fn input_path(default: &str) -> String {
    std::env::args().nth(1).unwrap_or_else(|| default.to_owned())
}
