//! cognilexicon CLI: explore concepts and manage mirror tokens.
//!
//! Usage:
//!   cognilexicon [--db path] explore <concept> [--view profile|graph] [--json]
//!   cognilexicon [--db path] token <subcommand>

use clap::{Parser, Subcommand};
use cognilexicon::config::default_db_path;
use cognilexicon::render::render;
use cognilexicon::{
    Config, GeminiClient, MirrorToken, MirrorTokenStore, OpenStore, SemanticDataFetcher, SqliteStorage,
    TokenError, View,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "cognilexicon",
    version,
    about = "Semantic profiles and concept graphs for words"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to SQLite database file
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the semantic profile and graph for a concept
    Explore {
        /// Word or phrase to explore
        concept: String,
        /// View to show (profile or graph)
        #[arg(long, default_value_t = View::Profile)]
        view: View,
        /// Print the raw normalized JSON instead of text views
        #[arg(long)]
        json: bool,
    },
    /// Manage mirror tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Save a named shortcut to a concept
    Add {
        /// Token name (unique, case-insensitive)
        name: String,
        /// Concept the token replays
        #[arg(long)]
        concept: String,
    },
    /// Delete a token by exact name
    Remove {
        /// Name of the token to delete
        name: String,
    },
    /// List all tokens
    List,
    /// Explore the concept saved under a token
    Load {
        /// Name of the token to load
        name: String,
        #[arg(long, default_value_t = View::Profile)]
        view: View,
        #[arg(long)]
        json: bool,
    },
}

fn open_store(db: Option<PathBuf>) -> Result<MirrorTokenStore<SqliteStorage>, String> {
    let db_path = db.unwrap_or_else(default_db_path);
    let storage = SqliteStorage::open(&db_path).map_err(|e| format!("Failed to open database: {}", e))?;
    Ok(MirrorTokenStore::new(storage))
}

fn build_fetcher() -> Result<SemanticDataFetcher, String> {
    let config = Config::from_env().map_err(|e| e.to_string())?;
    let client = GeminiClient::from_config(&config).map_err(|e| e.to_string())?;
    Ok(SemanticDataFetcher::new(Arc::new(client)))
}

async fn cmd_explore(concept: &str, view: View, json: bool) -> i32 {
    let query = concept.trim();
    if query.is_empty() {
        eprintln!("Error: concept must not be empty");
        return 1;
    }

    let fetcher = match build_fetcher() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match fetcher.fetch(query).await {
        Ok(data) if json => match serde_json::to_string_pretty(&data) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Ok(data) => {
            print!("{}", render(query, &data, view));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_token_add(store: &MirrorTokenStore<SqliteStorage>, name: &str, concept: &str) -> i32 {
    let name = name.trim();
    let concept = concept.trim();
    if name.is_empty() || concept.is_empty() {
        eprintln!("Error: token name and concept must not be empty");
        return 1;
    }
    match store.add(MirrorToken::new(name, concept).saved_now()) {
        Ok(()) => {
            println!("Saved token '{}' -> '{}'", name, concept);
            0
        }
        Err(e @ TokenError::AlreadyExists(_)) => {
            eprintln!("{}", e);
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_token_remove(store: &MirrorTokenStore<SqliteStorage>, name: &str) -> i32 {
    match store.remove(name) {
        Ok(true) => {
            println!("Removed token '{}'", name);
            0
        }
        Ok(false) => {
            eprintln!("Error: token '{}' not found", name);
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_token_list(store: &MirrorTokenStore<SqliteStorage>) -> i32 {
    let tokens = match store.load_all() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if tokens.is_empty() {
        println!("No mirror tokens saved.");
        return 0;
    }
    println!("{:<24}  {:<32}  {:<20}", "NAME", "CONCEPT", "SAVED");
    println!("{}", "-".repeat(80));
    for token in tokens {
        let saved = token
            .saved_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("{:<24}  {:<32}  {:<20}", token.name, token.concept, saved);
    }
    0
}

async fn cmd_token_load(
    store: &MirrorTokenStore<SqliteStorage>,
    name: &str,
    view: View,
    json: bool,
) -> i32 {
    match store.find(name) {
        Ok(Some(token)) => cmd_explore(&token.concept, view, json).await,
        Ok(None) => {
            eprintln!("Error: token '{}' not found", name);
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let code = match cli.command {
        Commands::Explore { concept, view, json } => cmd_explore(&concept, view, json).await,
        Commands::Token { action } => {
            let store = match open_store(cli.db) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            match action {
                TokenAction::Add { name, concept } => cmd_token_add(&store, &name, &concept),
                TokenAction::Remove { name } => cmd_token_remove(&store, &name),
                TokenAction::List => cmd_token_list(&store),
                TokenAction::Load { name, view, json } => cmd_token_load(&store, &name, view, json).await,
            }
        }
    };
    std::process::exit(code);
}
