use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use sea_orm::DatabaseConnection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cellar::server::{
    config::{Config, StorageConfig},
    error::Error,
    model::app::AppState,
    router,
    service::{
        seed::collection::{CollectionSeeder, SeedOptions, DEFAULT_WINE_COUNT},
        varietal::VarietalService,
    },
    startup,
};

const DEFAULT_LOG_FILTER: &str = "info,sea_orm=warn,sqlx=warn";

#[derive(Parser)]
#[command(name = "cellar", version, about = "Wine cellar backend and database seeder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API
    Serve,
    /// Populate the database
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Upsert the fixed varietal catalog
    Varietals,
    /// Replace the collection with generated wines, keeping the varietal catalog
    Collection {
        /// Seed for a reproducible collection
        #[arg(long)]
        seed: Option<u64>,
        /// Number of wines to generate
        #[arg(long, default_value_t = DEFAULT_WINE_COUNT)]
        count: usize,
    },
    /// Load the varietal catalog, then generate the collection
    All {
        /// Seed for a reproducible collection
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::Serve => serve(&config, db.clone()).await,
        Command::Seed { target } => seed(&db, target).await,
    };

    if let Err(e) = db.close().await {
        tracing::warn!("Failed to close database connection: {}", e);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::SeedError(e)) => {
            tracing::warn!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::info!("Using RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

async fn seed(db: &DatabaseConnection, target: SeedTarget) -> Result<(), Error> {
    match target {
        SeedTarget::Varietals => load_varietals(db).await,
        SeedTarget::Collection { seed, count } => generate_collection(db, seed, count).await,
        SeedTarget::All { seed } => {
            load_varietals(db).await?;
            generate_collection(db, seed, DEFAULT_WINE_COUNT).await
        }
    }
}

async fn load_varietals(db: &DatabaseConnection) -> Result<(), Error> {
    tracing::info!("Loading varietal catalog");

    let varietals = VarietalService::new(db).load_catalog().await?;

    tracing::info!("Varietal catalog loaded: {} varietals", varietals.len());

    Ok(())
}

async fn generate_collection(
    db: &DatabaseConnection,
    seed: Option<u64>,
    wine_count: usize,
) -> Result<(), Error> {
    tracing::info!("Generating collection of {} wines", wine_count);

    let mut rng = build_rng(seed);
    let options = SeedOptions {
        wine_count,
        ..Default::default()
    };

    let stats = CollectionSeeder::new(db).run(&mut rng, options).await?;
    stats.log();

    Ok(())
}

async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), Error> {
    let storage_config = StorageConfig::from_env()?;
    let storage = startup::build_storage(&storage_config)?;

    let app = router::routes().with_state(AppState {
        db,
        storage,
        public_url: storage_config.public_url,
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
