use crate::demo::{run_demo, run_search, DemoArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skillup::config::AppConfig;
use skillup::error::AppError;
use skillup::listings::ListingKind;
use skillup::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "SkillUp",
    about = "Search, filter, and rank SkillUp job and course listings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Filter and rank job openings
    Jobs(SearchArgs),
    /// Filter and rank course recommendations
    Courses(SearchArgs),
    /// Walk through jobs, courses, roadmap, and insights for a sample profile
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Keep accounts in memory instead of the configured JSON file
    #[arg(long)]
    pub(crate) ephemeral_accounts: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Jobs(args) => run_search(&config, ListingKind::Job, args),
        Command::Courses(args) => run_search(&config, ListingKind::Course, args),
        Command::Demo(args) => run_demo(&config, args),
    }
}
