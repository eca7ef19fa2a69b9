//! CLI entry point for notes-cfg

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notes_cfg::commands;
use notes_cfg::{ConfigFormat, Preset, Project};

#[derive(Parser)]
#[command(name = "notes-cfg")]
#[command(version)]
#[command(about = "Validate, inspect and scaffold notes site pipeline configs", long_about = None)]
struct Cli {
    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a config file
    Check {
        /// Config file (.yml, .yaml, .json or .toml)
        file: PathBuf,
    },

    /// Print a config in normalized form
    Show {
        /// Config file, or `preset:<name>`
        source: String,

        /// Output format (yaml, json, toml)
        #[arg(short, long, default_value = "yaml")]
        format: ConfigFormat,
    },

    /// Write a preset config
    Init {
        /// Target file or directory (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Preset to write (catppuccin, gruvbox, tango)
        #[arg(short, long, default_value = "catppuccin")]
        preset: Preset,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List the built-in presets
    Presets,

    /// Show differences between two configs
    Diff {
        /// Left config file, or `preset:<name>`
        left: String,

        /// Right config file, or `preset:<name>`
        right: String,
    },

    /// Print the theme's CSS variables
    Css {
        /// Config file, or `preset:<name>`
        source: String,

        /// Prepend the Google Fonts import
        #[arg(long)]
        fonts: bool,
    },

    /// List content files that survive the ignore patterns
    #[command(alias = "list")]
    Ls {
        /// Config file
        file: PathBuf,

        /// Content directory, relative to the config file
        #[arg(default_value = "content")]
        content_dir: PathBuf,
    },

    /// Re-validate a config file whenever it changes
    #[command(alias = "w")]
    Watch {
        /// Config file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "notes_cfg=debug,info"
    } else {
        "notes_cfg=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Check { file } => {
            let project = Project::open(&file)?;
            project.check()?;
        }

        Commands::Show { source, format } => {
            let config = commands::resolve_config(&source)?;
            commands::show::run(&config, format)?;
        }

        Commands::Init {
            path,
            preset,
            force,
        } => {
            let written = commands::init::init_config(&path, preset, force)?;
            println!("Initialized {:?} from the `{}` preset", written, preset);
        }

        Commands::Presets => {
            commands::presets::run()?;
        }

        Commands::Diff { left, right } => {
            commands::diff::run(&left, &right)?;
        }

        Commands::Css { source, fonts } => {
            let config = commands::resolve_config(&source)?;
            commands::css::run(&config, fonts)?;
        }

        Commands::Ls { file, content_dir } => {
            let project = Project::open(&file)?;
            commands::list::run(&project, &content_dir)?;
        }

        Commands::Watch { file } => {
            commands::watch::watch(&file).await?;
        }
    }

    Ok(())
}
