// commands/help.rs
use crate::error::Error;
use crate::Data;
use poise::serenity_prelude::CreateEmbed;
use poise::CreateReply;

type Context<'a> = poise::Context<'a, Data, Error>;

/// Walkthrough of the admin panel, written for the prefix in use.
fn panel_guide(prefix: &str, timeout_secs: u64) -> String {
    [
        format!("1. Run `{prefix}admin` in the server. Only you can use the panel it posts."),
        "2. Pick a role and a category from the two menus.".to_string(),
        "3. **Basic Permissions** sets the channel name and view/send for everyone and the role."
            .to_string(),
        "4. **Advanced Permissions** sets images, stickers, commands and reactions.".to_string(),
        "   Answer `yes` to allow; anything else denies. Skipped settings deny everyone and allow the role."
            .to_string(),
        format!("5. **Create Channel** makes the channel. The panel closes after {timeout_secs}s without activity."),
        format!("Use `{prefix}help <command>` for details on a single command."),
    ]
    .join("\n")
}

/// Show how the admin panel works, or help for one command
#[poise::command(prefix_command, track_edits, slash_command, category = "Utility")]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Specific command to show help about"]
    #[rest]
    command: Option<String>,
) -> Result<(), Error> {
    if command.is_some() {
        let config = poise::builtins::HelpConfiguration {
            ephemeral: true,
            ..Default::default()
        };
        poise::builtins::help(ctx, command.as_deref(), config).await?;
        return Ok(());
    }

    let embed = CreateEmbed::default()
        .title("Channel panel")
        .description(panel_guide(ctx.prefix(), ctx.data().config.panel_timeout_secs))
        .color(0x00FF00);

    ctx.send(CreateReply::default().embed(embed).ephemeral(true)).await?;
    Ok(())
}
