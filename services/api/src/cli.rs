use crate::demo::{run_demo, run_schemes, run_score, DemoArgs, SchemesArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dpr_studio::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "MSME DPR Studio",
    about = "Serve and demonstrate the MSME project report studio from the command line",
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
    /// Print every dashboard view built from the reference datasets
    Demo(DemoArgs),
    /// Score a project narrative for bankability
    Score(ScoreArgs),
    /// Rank credit schemes for a set of focus areas
    Schemes(SchemesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args),
        Command::Score(args) => run_score(args),
        Command::Schemes(args) => run_schemes(args),
    }
}
