use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    time::Duration,
};

use clap::{Args, Parser, Subcommand};
use portfolio_tui::{
    content::PORTFOLIO,
    error::{Error, Result},
    theme,
    tui::{self, tracker::TieBreak, ViewConfig},
};

#[derive(Parser)]
#[command(name = "portfolio-tui")]
#[command(about = "Personal portfolio page for the terminal")]
struct Cli {
    #[command(flatten)]
    view: ViewArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive page (default)
    View,
    /// Print the theme class table as JSON
    Themes,
    /// Print the static page content as JSON
    Content,
}

#[derive(Args)]
struct ViewArgs {
    /// Milliseconds after which a smooth scroll stops blocking clicks
    #[arg(long, default_value_t = 1000)]
    settle_ms: u64,
    /// Length of the smooth-scroll animation in milliseconds
    #[arg(long, default_value_t = 600)]
    animation_ms: u64,
    /// Which section wins when several become visible at once
    #[arg(long, value_enum, default_value_t = TieBreak::LastObserver)]
    tie_break: TieBreak,
    /// Log file (defaults to the user cache directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl ViewArgs {
    fn config(&self) -> ViewConfig {
        ViewConfig {
            settle_delay: Duration::from_millis(self.settle_ms),
            animation: Duration::from_millis(self.animation_ms),
            tie_break: self.tie_break,
            ..ViewConfig::default()
        }
    }
}

fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio-tui/portfolio-tui.log")
}

// The terminal belongs to the UI, so logs go to a file.
fn init_tracing(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(path)?;
    let directive = "portfolio_tui=info"
        .parse()
        .map_err(|e| Error::Log(format!("{e}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Log(e.to_string()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn view(args: ViewArgs) -> Result<()> {
    let log_path = args.log_file.clone().unwrap_or_else(default_log_path);
    init_tracing(&log_path)?;
    tracing::info!(log = %log_path.display(), "Starting portfolio view");
    tui::run(args.config()).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::View) => view(cli.view).await,
        Some(Commands::Themes) => print_json(&theme::table()),
        Some(Commands::Content) => print_json(&PORTFOLIO),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
