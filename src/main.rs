use clap::{Parser, Subcommand};
use problem_rotator::commands::*;
use problem_rotator::core::{
    error::{Result, RotatorError},
    print_error,
};
use std::env;

#[derive(Parser)]
#[command(name = "problem-rotator")]
#[command(about = "Rotating daily-problem picker backed by a GitHub repository")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current problem (reconciling with widget state)
    Show,
    /// Advance to a new random problem
    Next,
    /// Re-fetch the candidate problem list from the repository
    Refresh,
    /// Set or show the folder filter
    Filter {
        /// Folder path prefix, or "All" to clear the filter
        folder: Option<String>,
    },
    /// List folders available for filtering
    Folders,
    /// Show previously seen problems, most recent first
    History,
    /// Manage the repository configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Clear all cached state and the configuration
    Reset,
    /// Widget action surface (runs against the widget files only)
    Widget {
        #[command(subcommand)]
        action: WidgetAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the repository to rotate problems from
    Set {
        /// GitHub username owning the repository
        #[arg(long)]
        username: String,
        /// Repository name
        #[arg(long)]
        repo: String,
        /// Access token for private repositories
        #[arg(long)]
        token: Option<String>,
    },
    /// Show the active configuration
    Show,
}

#[derive(Subcommand)]
enum WidgetAction {
    /// Pick the next problem from the widget's candidate pool
    Next,
    /// Go back to the previous problem in the widget history
    Previous,
    /// Render the widget's current problem file
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Show => execute_show(),
        Commands::Next => execute_next(),
        Commands::Refresh => execute_refresh(),
        Commands::Filter { folder } => execute_filter(folder),
        Commands::Folders => execute_folders(),
        Commands::History => execute_history(),
        Commands::Config { action } => match action {
            ConfigAction::Set {
                username,
                repo,
                token,
            } => execute_config_set(username, repo, token),
            ConfigAction::Show => execute_config_show(),
        },
        Commands::Reset => execute_reset(),
        Commands::Widget { action } => match action {
            WidgetAction::Next => execute_widget_next(),
            WidgetAction::Previous => execute_widget_previous(),
            WidgetAction::Show => execute_widget_show(),
        },
    };

    if let Err(e) = result {
        if let RotatorError::ConfigMissing = e {
            print_error("No repository configured. Run 'problem-rotator config set --username <user> --repo <repo>' first");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }

    Ok(())
}
