use anyhow::Result;

use pageable_core::AppConfig;

pub fn run(config: &AppConfig, path: bool, init: bool) -> Result<()> {
    let config_path = AppConfig::config_path();

    if path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config already exists at {}", config_path.display());
        } else {
            AppConfig::default().save()?;
            println!("Wrote default config to {}", config_path.display());
        }
        return Ok(());
    }

    print!("{}", config.to_toml()?);
    Ok(())
}
