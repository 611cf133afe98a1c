use anyhow::Context;
use chatter::cli::create_user;
use chatter::cli::seeder::{clear_users, seed_users};
use chatter_config::DatabaseConfig;
use chatter_db::{PgCredentialStore, init_db_pool};
use chatter_observability::init_basic_console_logging;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "chatter-cli")]
#[command(about = "Chatter CLI - Administrative tools for Chatter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    CreateUser {
        /// Username (prompted if not provided)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake accounts
    Seed {
        /// Number of accounts to create
        #[arg(short = 'c', long, default_value = "100")]
        count: usize,

        /// Password shared by every seeded account
        #[arg(long, default_value = "password123")]
        password: String,
    },
    /// Delete every account
    ClearUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();

    let config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    let pool = init_db_pool(&config).await?;

    match cli.command {
        Commands::CreateUser { username, password } => {
            let username = match username {
                Some(username) => username,
                None => Input::new()
                    .with_prompt("Username")
                    .interact_text()
                    .context("Failed to read username")?,
            };
            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .context("Failed to read password")?,
            };

            let store = PgCredentialStore::new(pool);
            let user = create_user(&store, &username, &password)
                .await
                .with_context(|| format!("Could not create user {username}"))?;

            println!("✅ User created successfully!");
            println!("   Username: {}", user.username);
            println!("   ID: {}", user.id);
        }
        Commands::Seed { count, password } => {
            println!("🌱 Seeding {} users...", count);
            let inserted = seed_users(&pool, count, &password).await?;
            println!("✅ Seeded {} users", inserted);
        }
        Commands::ClearUsers => {
            let removed = clear_users(&pool).await?;
            println!("🗑️  Removed {} users", removed);
        }
    }

    Ok(())
}
