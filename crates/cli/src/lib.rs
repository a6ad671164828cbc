pub mod commands;

use clap::{Parser, Subcommand};
use lounge_core::config::{AppConfig, LoadOptions, LogFormat};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "lounge",
    about = "Lounge digital menu CLI",
    long_about = "Browse the lounge menu, open item details with sommelier pairings, build shareable selections, and inspect configuration.",
    after_help = "Examples:\n  lounge menu --tab cocktails --filter sin-alcohol --lang en\n  lounge show gin-jardin\n  lounge share mojito mojito aceitunas\n  lounge doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List a menu tab, optionally filtered by alcohol category")]
    Menu {
        #[arg(long, default_value = "cocktails", help = "cocktails|snacks|drinks")]
        tab: String,
        #[arg(long, default_value = "all", help = "all|con-alcohol|low-alcohol|sin-alcohol")]
        filter: String,
        #[arg(long, help = "es|en (defaults to menu.default_language)")]
        lang: Option<String>,
    },
    #[command(about = "Open an item's detail view and resolve its sommelier pairing")]
    Show {
        id: String,
        #[arg(long, help = "es|en (defaults to menu.default_language)")]
        lang: Option<String>,
        #[arg(long, help = "Open the detail view in video mode when the item has a video")]
        video: bool,
    },
    #[command(about = "Build a share payload for one item or a selection of items")]
    Share {
        #[arg(required = true, help = "Item ids in selection order; repeats add quantity")]
        ids: Vec<String>,
        #[arg(long, help = "Share a single item instead of a selection")]
        item: bool,
        #[arg(long, help = "es|en (defaults to menu.default_language)")]
        lang: Option<String>,
    },
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
    #[command(about = "Validate config, catalog and pairing credentials")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Menu { .. } => "menu",
            Self::Show { .. } => "show",
            Self::Share { .. } => "share",
            Self::Config => "config",
            Self::Doctor { .. } => "doctor",
        }
    }
}

pub fn init_logging(config: &AppConfig) {
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed when commands run in-process.
    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // `config` and `doctor` load configuration themselves and install logging once it is valid.
    let result = match cli.command {
        Command::Config => commands::config::run(),
        Command::Doctor { json } => commands::doctor::run(json),
        command => match AppConfig::load(LoadOptions::default()) {
            Ok(config) => {
                init_logging(&config);
                dispatch(command, &config)
            }
            Err(error) => commands::CommandResult::failure(
                command.name(),
                "config_validation",
                error.to_string(),
                commands::EXIT_CONFIG,
            ),
        },
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn dispatch(command: Command, config: &AppConfig) -> commands::CommandResult {
    match command {
        Command::Menu { tab, filter, lang } => {
            commands::menu::run(config, &tab, &filter, lang.as_deref())
        }
        Command::Show { id, lang, video } => {
            commands::show::run(config, &id, lang.as_deref(), video)
        }
        Command::Share { ids, item, lang } => {
            commands::share::run(config, &ids, item, lang.as_deref())
        }
        Command::Config | Command::Doctor { .. } => commands::CommandResult::failure(
            command.name(),
            "dispatch",
            "command is handled before configuration loading",
            1,
        ),
    }
}
