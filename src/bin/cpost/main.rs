use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use spdlog::{info, warn};

use cpost::config::Config;
use cpost::logger::configure_logger;
use cpost::rasterizer::CommandRasterizer;
use cpost::session::Session;
use cpost::view::card_renderer::CardRenderer;

use crate::config::open_config;
use crate::config_data::write_sample_cfg;

mod config;
mod config_data;
mod shell;

const CFG_FILE_NAME: &str = "cpost.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive form to open a post file and save its card (default)
    Interactive,
    /// Converts a single post file into its HTML card and image
    Convert(ConvertArgs),
    /// Writes a sample configuration file
    SampleConfig(SampleConfigArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Post file to convert
    file: PathBuf,

    /// Directory receiving the HTML and image files. Defaults to the configured save_dir
    #[arg(short, long)]
    save_dir: Option<String>,
}

#[derive(Parser, Debug)]
struct SampleConfigArgs {
    /// Where to write the sample
    #[arg(short, long, default_value = CFG_FILE_NAME)]
    out: PathBuf,
}

fn new_session(config: &Config) -> Result<Session<CommandRasterizer>> {
    let renderer = match config.defaults.template_path {
        Some(ref tpl_path) => {
            info!("Using card template {}", tpl_path.display());
            CardRenderer::from_file(tpl_path)?
        }
        None => CardRenderer::builtin()?,
    };
    let rasterizer = CommandRasterizer::new(config.rasterizer.program.clone(), &config.rasterizer.format);

    Ok(Session::new(renderer, rasterizer))
}

fn convert_cmd(config: &Config, args: ConvertArgs) -> Result<()> {
    let mut session = new_session(config)?;
    session.choose_file(Some(args.file));

    let save_dir = args.save_dir.unwrap_or_else(|| config.defaults.save_dir.clone());
    session.save(&save_dir)?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(Command::SampleConfig(ref sample_args)) = args.command {
        write_sample_cfg(&sample_args.out)?;
        println!("Sample configuration written to {}", sample_args.out.display());
        return Ok(());
    }

    let config = match open_config(args.config_path.map(PathBuf::from)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Please run cpost --help");
            return Err(anyhow!(err));
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    match args.command {
        Some(Command::Convert(convert_args)) => convert_cmd(&config, convert_args),
        _ => {
            info!("Starting CPost Converter");
            let mut session = new_session(&config)?;
            shell::run(&mut session, &config.defaults)?;
            Ok(())
        }
    }
}
