mod cmd_chat;
mod cmd_compile;
mod cmd_config;

use std::path::Path;

use clap::{Parser, Subcommand};

use moot_backend::BackendConfig;

#[derive(Parser)]
#[command(name = "moot", version, about = "Consultation client for analyst-panel backends")]
struct Cli {
    /// Path to the backend config file
    #[arg(long, global = true, default_value = "moot.json")]
    config: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive consultation session
    Chat {
        /// Directory for exported reports
        #[arg(long, default_value = ".")]
        out: String,
        /// Filename stem for exported reports (`<stem>_report.txt`)
        #[arg(long, default_value = "consultation")]
        stem: String,
    },
    /// Compile a report source file into pages without a session
    Compile {
        /// Source file: markdown text or JSON
        file: String,
        /// Write to this directory instead of stdout
        #[arg(long)]
        out: Option<String>,
        /// Filename stem for the exported report
        #[arg(long, default_value = "consultation")]
        stem: String,
    },
    /// Read workspace configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Subcommand)]
enum ConfigCmd {
    /// Print the effective backend configuration
    Show,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BackendConfig::load(Path::new(&cli.config));

    match cli.cmd {
        Command::Chat { out, stem } => cmd_chat::execute(&config, Path::new(&out), &stem),
        Command::Compile { file, out, stem } => {
            cmd_compile::execute(Path::new(&file), out.as_deref().map(Path::new), &stem)
        }
        Command::Config { cmd } => match cmd {
            ConfigCmd::Show => cmd_config::show(&config),
        },
    }
}
