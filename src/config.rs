use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

pub const RASTERIZER_ENV: &str = "CPOST_RASTERIZER";
const EXE_DIR_VAR: &str = "${exe_dir}";

#[derive(Deserialize)]
#[serde(default)]
pub struct Rasterizer {
    /// HTML to image executable, e.g. wkhtmltoimage
    pub program: PathBuf,
    pub format: String,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Rasterizer {
            program: PathBuf::from("wkhtmltoimage"),
            format: "png".to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub save_dir: String,
    pub extension: String,
    pub template_path: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            save_dir: "./posts".to_string(),
            extension: "cpost".to_string(),
            template_path: None,
        }
    }
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub rasterizer: Rasterizer,
    #[serde(default)]
    pub defaults: Defaults,
    pub log: Option<Log>,
}

impl Config {
    /// A non-empty `CPOST_RASTERIZER` wins over the configured program
    pub fn apply_rasterizer_override(&mut self, program: Option<String>) {
        if let Some(program) = program.filter(|p| !p.trim().is_empty()) {
            self.rasterizer.program = PathBuf::from(program);
        }
    }

    pub fn apply_env(&mut self) {
        self.apply_rasterizer_override(env::var(RASTERIZER_ENV).ok());
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    let Some(str_path) = path.to_str() else {
        return path;
    };
    let Some(rest) = str_path.strip_prefix(EXE_DIR_VAR) else {
        return path;
    };

    match env::current_exe() {
        Ok(cur_exe) => match cur_exe.parent() {
            Some(exe_dir) => exe_dir.join(rest.trim_start_matches(['/', '\\'])),
            None => path,
        },
        Err(_) => path,
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.rasterizer.program = parse_path(cfg.rasterizer.program);
    cfg.defaults.template_path = cfg.defaults.template_path.map(parse_path);
    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(parse_path);
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
