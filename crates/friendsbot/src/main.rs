use friendsbot_config::{self, config::FriendsbotConfig};
use poise::serenity_prelude as serenity;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{filter, prelude::*};

mod cache;
mod commands;
mod handlers;
mod relationships;
mod utils;

pub struct Data {
    config: &'static FriendsbotConfig,
}

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

async fn on_ready(
    ctx: &serenity::Context,
    ready: &serenity::Ready,
    framework: &poise::Framework<Data, Error>,
) -> Result<Data, Error> {
    info!("Logged in as {}", ready.user.name);
    let config = friendsbot_config::get_config();

    let problems = relationships::check_relationships(&config.relationships);
    info!(
        "Loaded friend lists for {} users ({} problem entries)",
        config.relationships.len(),
        problems
    );

    // Register slash commands in all guilds we're currently in for fast availability
    for g in &ready.guilds {
        if let Err(e) = poise::builtins::register_in_guild(ctx, &framework.options().commands, g.id).await {
            warn!("Failed to register commands in guild {}: {}", g.id, e);
        }
    }

    Ok(Data { config })
}

async fn bot_entrypoint(config: &'static FriendsbotConfig) -> Result<(), Error> {
    let commands = vec![
        commands::register::register_commands(),
        commands::friends::friends(),
    ];

    let options = poise::FrameworkOptions {
        commands,
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some("~".into()),
            execute_self_messages: false,
            mention_as_prefix: false,
            ..Default::default()
        },
        event_handler: |ctx, event, framework, data| {
            Box::pin(handlers::handler(ctx, event, framework, data))
        },
        on_error: |error| Box::pin(handlers::error_handler(error)),
        ..Default::default()
    };

    let framework = poise::Framework::builder()
        .setup(|ctx, ready, framework| Box::pin(on_ready(ctx, ready, framework)))
        .options(options)
        .build();

    // Members, presences and voice states all feed the roster cache.
    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::GUILD_PRESENCES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(config.discord.token.as_str(), intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

fn main() {
    let cfg_path = std::env::var("FRIENDSBOT_CONFIG_FILE").unwrap_or(String::from("config.toml"));
    let config = match friendsbot_config::load_config(&cfg_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Unable to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    };

    if config.discord.token.is_empty() {
        eprintln!("Discord token is not set in the configuration file");
        std::process::exit(1);
    }

    let _guard = sentry::init((
        config.sentry.dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    // Configure logging with Sentry
    let stdout_log = tracing_subscriber::fmt::layer()
        .compact()
        .with_filter(filter::LevelFilter::from(Level::INFO));

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(sentry_tracing::layer())
        .init();

    if config.sentry.dsn.is_empty() {
        warn!("Sentry initialized with empty DSN - will be disabled")
    }
    info!("Loaded configuration from: {}", cfg_path);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start the tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(bot_entrypoint(config)) {
        error!("Client stopped: {}", e);
        std::process::exit(1);
    }
}
