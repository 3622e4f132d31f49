use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ecohabit-cli", version, about = "EcoHabit CLI")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the challenge catalog
    Challenges {
        #[command(subcommand)]
        action: commands::challenges::ChallengesAction,
    },
    /// Reward tiers
    Rewards {
        #[command(subcommand)]
        action: commands::rewards::RewardsAction,
    },
    /// Eco-friendly tips
    Tips,
    /// Talk to the eco assistant
    Chat {
        #[command(subcommand)]
        action: commands::chat::ChatAction,
    },
    /// Interactive session: start challenges, earn points, chat
    Session,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// API token management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Challenges { action } => commands::challenges::run(action),
        Commands::Rewards { action } => commands::rewards::run(action),
        Commands::Tips => commands::tips::run(),
        Commands::Chat { action } => commands::chat::run(action),
        Commands::Session => commands::session::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Auth { action } => commands::auth::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
