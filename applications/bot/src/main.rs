/// Kazoo Bot - Discord music bot with a persisted queue
use clap::{Parser, Subcommand};
use kazoo_bot::{
    api, commands,
    config::BotConfig,
    services::AuthService,
    state::AppState,
    transport::SongbirdTransport,
};
use kazoo_core::SongStore;
use kazoo_playback::{Coordinator, Transport};
use kazoo_resolver::{Resolver, YtDlpResolver};
use kazoo_storage::SqliteSongStore;
use poise::serenity_prelude as serenity;
use serenity::GatewayIntents;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kazoo-bot")]
#[command(about = "Discord music bot with a persisted queue", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot and the HTTP facade
    Serve,
    /// Create a user (or set their password) for the HTTP facade
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all known users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kazoo_bot=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve().await?,
        Commands::AddUser { username, password } => add_user(&username, &password).await?,
        Commands::ListUsers => list_users().await?,
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    let config = BotConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Kazoo");

    // Initialize database
    let pool = kazoo_storage::create_pool(&config.storage.database_url).await?;
    kazoo_storage::run_migrations(&pool).await?;
    let store = Arc::new(SqliteSongStore::new(pool));

    // A stale Playing row from a previous process means nothing now
    store.reset_status().await?;
    tracing::info!("Database connected");

    tokio::fs::create_dir_all(&config.storage.songs_dir).await?;

    // Voice transport and coordinator
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let manager = songbird::Songbird::serenity();
    let transport = Arc::new(SongbirdTransport::new(Arc::clone(&manager), events_tx));

    let coordinator = Arc::new(Coordinator::new(
        Arc::clone(&store) as Arc<dyn SongStore>,
        Arc::clone(&transport) as Arc<dyn Transport>,
    ));
    coordinator.spawn(
        events_rx,
        Duration::from_secs(config.playback.poll_interval_secs),
    );
    tracing::info!("Playback coordinator started");

    // Song resolution
    let resolver: Arc<dyn Resolver> = Arc::new(YtDlpResolver::new(
        config.resolver.yt_dlp_path.clone(),
        config.storage.songs_dir.clone(),
    ));

    // HTTP facade
    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    ));
    let app_state = AppState::new(
        Arc::clone(&store),
        Arc::clone(&coordinator),
        Arc::clone(&resolver),
        Arc::clone(&auth_service),
    );
    let app = api::create_router(app_state, auth_service);

    let addr = SocketAddr::from((
        config.http.host.parse::<std::net::IpAddr>()?,
        config.http.port,
    ));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP facade listening on {}", addr);

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            tracing::error!("HTTP facade stopped: {}", err);
        }
    });

    // Discord client
    let prefix = config.discord.prefix.clone();
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                tracing::info!("Commands registered");
                Ok(commands::Data {
                    store,
                    resolver,
                    coordinator,
                    transport,
                })
            })
        })
        .build();

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let mut client = serenity::ClientBuilder::new(&config.discord.token, intents)
        .framework(framework)
        .voice_manager_arc(manager)
        .await?;

    tracing::info!("Connecting to Discord");
    client.start().await?;

    Ok(())
}

async fn add_user(username: &str, password: &str) -> anyhow::Result<()> {
    let config = BotConfig::load()?;

    let pool = kazoo_storage::create_pool(&config.storage.database_url).await?;
    kazoo_storage::run_migrations(&pool).await?;
    let store = SqliteSongStore::new(pool);

    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    );

    let user = store.get_or_create_user(username).await?;
    let password_hash = auth_service.hash_password(password)?;
    store.set_password_hash(&user, &password_hash).await?;

    println!("Credentials set for {}", user.name);
    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = BotConfig::load()?;

    let pool = kazoo_storage::create_pool(&config.storage.database_url).await?;
    kazoo_storage::run_migrations(&pool).await?;

    let users = kazoo_storage::users::get_all(&pool).await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id, user.name);
    }

    Ok(())
}
