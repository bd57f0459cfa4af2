//! `urlclean config` – show where configuration lives and what is in effect.

use anyhow::Result;
use std::path::Path;
use urlclean_core::CleanerConfig;

pub fn run_config(path: &Path, cfg: &CleanerConfig) -> Result<i32> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(0)
}
