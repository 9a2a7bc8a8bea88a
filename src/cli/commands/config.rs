use crate::config::Config;
use crate::errors::AppResult;

/// Print the effective configuration (file values plus command line overrides).
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("# {}", Config::config_file().display());
    print!("{}", cfg.to_yaml()?);
    Ok(())
}
