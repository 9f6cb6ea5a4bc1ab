use clap::{Parser, Subcommand};
use colored::Colorize;
use datalab_lib::{CoreConfig, Route};
use sysexits::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod campaign;
mod detail;

#[derive(Parser, Debug)]
#[command(name = "datalab")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Operate on print campaigns
    #[command(subcommand)]
    Campaign(campaign::Command),
    /// Inspect a campaign's detail form
    #[command(subcommand)]
    Detail(detail::Command),
    /// Show which page a path resolves to
    Route { path: String },
}

fn main() -> ExitCode {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging goes to stderr so it never mixes with command output
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }

    let cli = Cli::parse();

    let cfg = match CoreConfig::load() {
        Ok(cfg) => cfg.shared(),
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            return ExitCode::Config;
        }
    };

    match &cli.command {
        Command::Campaign(cmd) => campaign::handle(cfg, cmd),
        Command::Detail(cmd) => detail::handle(cfg, cmd),
        Command::Route { path } => {
            match Route::parse(path) {
                Route::Campaigns => println!("{} campaign list", path.bold()),
                Route::CampaignDetail(id) => {
                    println!("{} campaign detail for {}", path.bold(), id.cyan())
                }
                Route::NotFound(_) => println!("{} {}", path.bold(), "not found".red()),
            }
            ExitCode::Ok
        }
    }
}
