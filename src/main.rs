//! cutplan CLI
//!
//! Compiles scene files into G-code programs.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cutplan::{init_logging, scene_from_json, Config, DesignerState};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Compile a scene JSON file into a G-code program
    Generate {
        /// Scene file in the interchange format, or `-` for stdin
        #[clap(long)]
        scene: PathBuf,
        /// Config file (.toml or .json); defaults to the user config location
        #[clap(long)]
        config: Option<PathBuf>,
        /// Output file or directory; prints to stdout when omitted
        #[clap(long)]
        output: Option<PathBuf>,
    },
    /// Write a default config file
    InitConfig {
        /// Where to write it; defaults to the user config location
        #[clap(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[clap(long)]
        force: bool,
    },
}

fn read_scene(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("reading scene from stdin")?;
        Ok(json)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(&path)?,
        None => Config::load_or_default(&Config::default_path()?)?,
    };
    Ok(config)
}

fn generate(scene: &Path, config: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let config = load_config(config)?;
    let scene = scene_from_json(&read_scene(scene)?)?;
    tracing::info!("Compiling {} shapes", scene.len());

    let state = DesignerState::with_scene(scene, config.machine);

    match output {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(&config.export.file_name)
            } else {
                path
            };
            state.export_program(&path)?;
        }
        None => print!("{}", state.program()),
    }
    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::default_path()?,
    };
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default().save_to_file(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    match args.cmd {
        Command::Generate {
            scene,
            config,
            output,
        } => generate(&scene, config, output),
        Command::InitConfig { path, force } => init_config(path, force),
    }
}
