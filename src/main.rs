// main.rs
mod commands;
mod config;
mod error;
mod events;
mod keep_alive;
mod panel;

use crate::config::Config;
use crate::error::Error;
use poise::serenity_prelude as serenity;
use serenity::GatewayIntents;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::Level;

/// Application context handed to every command.
#[derive(Clone)]
pub struct Data {
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = match Config::load().await {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!("Refusing to start: {}", e);
            return Err(e);
        }
    };

    let listener = TcpListener::bind(&config.keep_alive_addr).await?;
    tokio::spawn(async move {
        if let Err(e) = keep_alive::serve(listener).await {
            tracing::error!("Keep-alive server stopped: {}", e);
        }
    });

    let data = Data {
        config: config.clone(),
    };
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::get_commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.prefix.clone()),
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::handle_event(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(events::on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let mut client = serenity::ClientBuilder::new(&config.bot_token, intents)
        .framework(framework)
        .await?;

    client.start_autosharded().await.map_err(Error::from)
}
