mod run;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "scout-cli")]
#[command(about = "content-scout command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect trend, competitor, and community titles and print them as JSON
    Collect(BriefArgs),
    /// Print the prompt that would be sent to the generator
    Prompt(BriefArgs),
    /// Generate a full content strategy and print the raw JSON document
    Generate(BriefArgs),
}

/// The client brief shared by every command.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
struct BriefArgs {
    /// Who the channel is for
    #[arg(long)]
    audience: String,

    /// What the channel wants to achieve
    #[arg(long)]
    goal: String,

    /// Competitor YouTube channel name (repeatable)
    #[arg(long = "channel")]
    channels: Vec<String>,

    /// Subreddit to sample hot posts from (repeatable)
    #[arg(long = "subreddit")]
    subreddits: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = scout_core::load_app_config()?;
    // Logs go to stderr so stdout stays pipeable JSON.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Collect(brief) => run::run_collect(&config, brief).await,
        Commands::Prompt(brief) => run::run_prompt(&config, brief).await,
        Commands::Generate(brief) => run::run_generate(&config, brief).await,
    }
}
