use std::env;
use std::path::PathBuf;

use cpost::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe_path| exe_path.parent().map(|p| p.to_path_buf()));
    let cur_dir = env::current_dir().ok();

    [exe_dir, cur_dir, dirs::config_dir()]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let mut config = match cfg_path.or_else(get_config_path) {
        Some(config_path) => {
            println!("Reading config from {}", config_path.display());
            read_config(&config_path).map_err(|e| e.to_string())?
        }
        None => {
            println!("No {} found. Using default settings", CFG_FILE_NAME);
            Config::default()
        }
    };

    config.apply_env();

    if let Some(mut log) = config.log {
        let location = log.location.or_else(|| {
            dirs::cache_dir().map(|dir| dir.join("CPost").join("log").join("cpost.log"))
        });
        if let Some(ref location) = location {
            println!("Log enabled. Files will be written in {}", location.display());
        }
        log.location = location;
        config.log = Some(log);
    }

    Ok(config)
}
