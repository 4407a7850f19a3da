// events.rs
use crate::error::Error;
use crate::Data;
use poise::serenity_prelude::{ChannelType, Context, FullEvent, Guild, Ready};
use poise::{FrameworkContext, FrameworkError};

pub async fn handle_event(
    _ctx: &Context,
    event: &FullEvent,
    _framework: FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            handle_ready(data_about_bot);
        }
        FullEvent::GuildCreate { guild, .. } => {
            handle_guild_create(guild);
        }
        _ => {}
    }
    Ok(())
}

fn handle_ready(ready: &Ready) {
    tracing::info!("Connected as {} to {} guilds", ready.user.name, ready.guilds.len());
}

fn handle_guild_create(guild: &Guild) {
    tracing::info!(
        "Guild Create event received for: {} (ID: {}, {} categories)",
        guild.name,
        guild.id,
        guild.channels.values().filter(|c| c.kind == ChannelType::Category).count()
    );
}

/// Logs every framework error before handing it to poise's default reply.
pub async fn on_error(error: FrameworkError<'_, Data, Error>) {
    if let FrameworkError::Command { error, ctx, .. } = &error {
        tracing::error!("Command {} failed: {}", ctx.command().name, error);
    }

    if let Err(e) = poise::builtins::on_error(error).await {
        tracing::error!("Error while handling error: {}", e);
    }
}
