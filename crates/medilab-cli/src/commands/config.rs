use anyhow::Result;

use medilab_core::AppConfig;

pub fn run(config: &AppConfig, init: bool, json: bool) -> Result<bool> {
    let path = AppConfig::config_path();

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            config.save()?;
            println!("Wrote default config to {}", path.display());
        }
        return Ok(true);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        println!("# {}", path.display());
        print!("{}", toml::to_string_pretty(config)?);
    }
    Ok(true)
}
