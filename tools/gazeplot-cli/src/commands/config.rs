//! Show or initialize the configuration.

use gazeplot_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, init: bool) -> anyhow::Result<()> {
    if init {
        let path = config.save()?;
        println!("Wrote {}", path.display());
    } else {
        println!("# {}", config_file_path().display());
    }
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
