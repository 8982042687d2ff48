//! Init command handler

use crate::config::Config;

pub fn cmd_init() -> anyhow::Result<()> {
    if Config::create_default_if_missing()? {
        println!("Created config.toml - edit it and run 'pricedex seed'");
    } else {
        println!("config.toml already exists, leaving it alone");
    }
    Ok(())
}
