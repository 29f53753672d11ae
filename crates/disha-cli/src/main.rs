use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "disha", version, about = "Disha student guidance CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive guidance chat
    Chat(commands::chat::ChatArgs),
    /// Browse the course catalog
    Courses {
        #[command(subcommand)]
        action: commands::courses::CourseAction,
    },
    /// Browse colleges
    Colleges {
        #[command(subcommand)]
        action: commands::colleges::CollegeAction,
    },
    /// Browse career paths
    Careers {
        #[command(subcommand)]
        action: commands::careers::CareerAction,
    },
    /// Login session management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    // RUST_LOG overrides; default keeps command output clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Chat(args) => commands::chat::run(args),
        Commands::Courses { action } => commands::courses::run(action),
        Commands::Colleges { action } => commands::colleges::run(action),
        Commands::Careers { action } => commands::careers::run(action),
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
