use std::fs;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use syllabus::auth::{CredentialHasher, register_user};
use syllabus::config::ServerConfig;
use syllabus::server::{AppState, create_router};
use syllabus::store::{SqliteStore, Store};
use syllabus::types::NewUser;

#[derive(Parser)]
#[command(name = "syllabus")]
#[command(about = "A course catalog REST API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Administrative commands
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Start the server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, short, default_value = "8080")]
        port: u16,

        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Initialize the database (safe to run repeatedly)
    Init {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,
    },

    /// Register a user
    CreateUser {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        /// Password for the new user. Prompted for interactively when omitted.
        #[arg(long)]
        password: Option<String>,
    },
}

fn open_store(data_dir: &str) -> anyhow::Result<SqliteStore> {
    let data_path: std::path::PathBuf = data_dir.into();
    fs::create_dir_all(&data_path)?;

    let store = SqliteStore::new(data_path.join("syllabus.db"))?;
    store.initialize()?;
    Ok(store)
}

fn run_init(data_dir: String) -> anyhow::Result<()> {
    open_store(&data_dir)?;
    println!("Initialized database in {data_dir}");
    Ok(())
}

fn run_create_user(
    data_dir: String,
    username: String,
    email: String,
    password: Option<String>,
) -> anyhow::Result<()> {
    let store = open_store(&data_dir)?;

    let password = match password {
        Some(p) => p,
        None => inquire::Password::new("Password:").prompt()?,
    };

    let hasher = CredentialHasher::new();
    let user = register_user(
        &store,
        &hasher,
        &NewUser {
            username,
            email,
            password,
        },
    )?;

    println!("Created user '{}' ({})", user.username, user.email);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("syllabus=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Admin { command } => match command {
            AdminCommands::Init { data_dir } => {
                run_init(data_dir)?;
            }
            AdminCommands::CreateUser {
                data_dir,
                username,
                email,
                password,
            } => {
                run_create_user(data_dir, username, email, password)?;
            }
        },
        Commands::Serve {
            host,
            port,
            data_dir,
        } => {
            let config = ServerConfig {
                host,
                port,
                data_dir: data_dir.into(),
            };

            fs::create_dir_all(&config.data_dir)?;

            let store = SqliteStore::new(config.db_path())?;
            store.initialize()?;

            let state = Arc::new(AppState::new(Arc::new(store)));

            let app = create_router(state);
            let addr = config.socket_addr()?;

            info!("Starting server on {}", addr);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
