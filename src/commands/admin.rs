// commands/admin.rs
use std::pin::pin;
use std::time::Duration;

use futures::StreamExt;
use poise::serenity_prelude::{
    ButtonStyle, ChannelType, ComponentInteraction, ComponentInteractionCollector,
    CreateActionRow, CreateButton, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, GuildId, Mentionable,
    MessageId, ModalInteraction, ModalInteractionCollector, RoleId, UserId,
};
use poise::{CreateReply, Modal};
use tracing::{debug, error, info, warn};

use crate::error::Error;
use crate::panel::{
    eligible_roles, highest_position, placeholder, sorted_categories, truncate_options,
    AdvancedForm, BasicForm, CategoryRef, Outcome, Panel, PanelError, PanelEvent, RoleRef,
    SerenityGateway, ADVANCED_BUTTON, BASIC_BUTTON, CATEGORY_SELECT, CREATE_BUTTON, ROLE_SELECT,
};
use crate::Data;

type Context<'a> = poise::Context<'a, Data, Error>;

/// Discord keeps an interaction token valid for this long, so an open form
/// can still be submitted until then.
const FORM_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Open a panel for creating a channel with role permissions
#[poise::command(prefix_command, slash_command, guild_only, category = "Admin")]
pub async fn admin(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or(Error::NotInGuild)?;
    let (roles, categories) = panel_targets(ctx, guild_id).await?;

    if roles.is_empty() || categories.is_empty() {
        ctx.send(
            CreateReply::default()
                .content("❌ This server needs at least one category and one role below mine.")
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let handle = ctx
        .send(
            CreateReply::default()
                .content("✅ Admin panel loaded.")
                .components(panel_components(roles, categories)),
        )
        .await?;
    let message_id = handle.message().await?.id;

    info!("Admin panel {} opened by {} in guild {}", message_id, ctx.author().id, guild_id);

    let mut panel = Panel::new(ctx.author().id, guild_id);
    let closing = run_session(ctx, &mut panel, guild_id, message_id).await;

    handle
        .edit(ctx, CreateReply::default().content(closing).components(Vec::new()))
        .await?;

    Ok(())
}

/// Roles and categories offered by the menus, read from the cache.
async fn panel_targets(
    ctx: Context<'_>,
    guild_id: GuildId,
) -> Result<(Vec<RoleRef>, Vec<CategoryRef>), Error> {
    let bot_id = ctx.cache().current_user().id;

    let (roles, categories, bot_roles) = {
        let guild = ctx.guild().ok_or(Error::NotInGuild)?;
        let roles: Vec<RoleRef> = guild.roles.values().map(RoleRef::from).collect();
        let categories: Vec<CategoryRef> = guild
            .channels
            .values()
            .filter(|channel| channel.kind == ChannelType::Category)
            .map(CategoryRef::from)
            .collect();
        let bot_roles: Option<Vec<RoleId>> = guild.members.get(&bot_id).map(|m| m.roles.clone());
        (roles, categories, bot_roles)
    };

    let bot_roles = match bot_roles {
        Some(bot_roles) => bot_roles,
        None => guild_id.member(ctx.serenity_context(), bot_id).await?.roles,
    };

    let ceiling = highest_position(&roles, &bot_roles);
    Ok((eligible_roles(roles, guild_id, ceiling), sorted_categories(categories)))
}

fn panel_components(roles: Vec<RoleRef>, categories: Vec<CategoryRef>) -> Vec<CreateActionRow> {
    let (roles, hidden_roles) = truncate_options(roles);
    let (categories, hidden_categories) = truncate_options(categories);

    let role_placeholder = placeholder("Select a role", roles.len(), hidden_roles);
    let role_options = roles
        .into_iter()
        .map(|role| CreateSelectMenuOption::new(role.name, role.id.to_string()))
        .collect();

    let category_placeholder = placeholder("Select a category", categories.len(), hidden_categories);
    let category_options = categories
        .into_iter()
        .map(|category| CreateSelectMenuOption::new(category.name, category.id.to_string()))
        .collect();

    vec![
        CreateActionRow::SelectMenu(
            CreateSelectMenu::new(ROLE_SELECT, CreateSelectMenuKind::String { options: role_options })
                .placeholder(role_placeholder)
                .min_values(1)
                .max_values(1),
        ),
        CreateActionRow::SelectMenu(
            CreateSelectMenu::new(
                CATEGORY_SELECT,
                CreateSelectMenuKind::String { options: category_options },
            )
            .placeholder(category_placeholder)
            .min_values(1)
            .max_values(1),
        ),
        CreateActionRow::Buttons(vec![
            CreateButton::new(BASIC_BUTTON)
                .label("Basic Permissions")
                .style(ButtonStyle::Primary),
            CreateButton::new(ADVANCED_BUTTON)
                .label("Advanced Permissions")
                .style(ButtonStyle::Primary),
            CreateButton::new(CREATE_BUTTON)
                .label("Create Channel")
                .style(ButtonStyle::Success),
        ]),
    ]
}

/// How long the session waits for the next interaction. A form the owner
/// has open keeps the session alive so its submission still gets an answer.
fn idle_window(idle: Duration, form_open: bool) -> Duration {
    if form_open {
        idle.max(FORM_WINDOW)
    } else {
        idle
    }
}

/// Feeds panel interactions and form submissions into the panel until it
/// is finished or left idle. Returns the text the panel message ends with.
async fn run_session(
    ctx: Context<'_>,
    panel: &mut Panel,
    guild_id: GuildId,
    message_id: MessageId,
) -> &'static str {
    let serenity_ctx = ctx.serenity_context();
    let gateway = SerenityGateway::new(serenity_ctx, guild_id);
    let idle = Duration::from_secs(ctx.data().config.panel_timeout_secs);

    let modal_prefix = format!("admin_panel:{message_id}:");
    let filter_prefix = modal_prefix.clone();

    let mut components = pin!(ComponentInteractionCollector::new(serenity_ctx)
        .message_id(message_id)
        .stream());
    let mut modals = pin!(ModalInteractionCollector::new(serenity_ctx)
        .filter(move |modal| modal.data.custom_id.starts_with(&filter_prefix))
        .stream());

    let mut form_open = false;

    loop {
        tokio::select! {
            Some(interaction) = components.next() => {
                form_open = match on_component(ctx, panel, &gateway, &interaction, &modal_prefix).await {
                    Ok(opened) => opened,
                    Err(e) => {
                        error!("Error answering panel interaction: {}", e);
                        false
                    }
                };
            }
            Some(submission) = modals.next() => {
                form_open = false;
                if let Err(e) = on_modal(ctx, panel, &gateway, &submission, &modal_prefix).await {
                    error!("Error answering panel form: {}", e);
                }
            }
            () = tokio::time::sleep(idle_window(idle, form_open)) => {
                info!("Admin panel {} expired", message_id);
                return "⌛ Admin panel expired.";
            }
        }

        if panel.is_finished() {
            return "✅ Admin panel closed: channel created.";
        }
    }
}

async fn on_component(
    ctx: Context<'_>,
    panel: &mut Panel,
    gateway: &SerenityGateway<'_>,
    interaction: &ComponentInteraction,
    modal_prefix: &str,
) -> Result<bool, Error> {
    let user = interaction.user.id;
    let outcome = match PanelEvent::from_component(&interaction.data.custom_id, &interaction.data.kind) {
        Ok(event) => panel.handle(user, event, gateway).await,
        Err(err) => panel.reject_malformed(user, err),
    };
    debug!("Panel interaction {} from {}: stage now {:?}", interaction.data.custom_id, user, panel.stage());

    let (response, form_opened) = match outcome {
        Ok(Outcome::ShowBasicForm) => (BasicForm::create(None, format!("{modal_prefix}basic")), true),
        Ok(Outcome::ShowAdvancedForm) => {
            (AdvancedForm::create(None, format!("{modal_prefix}advanced")), true)
        }
        other => (response_for(other, user), false),
    };

    interaction.create_response(ctx.serenity_context(), response).await?;
    Ok(form_opened)
}

async fn on_modal(
    ctx: Context<'_>,
    panel: &mut Panel,
    gateway: &SerenityGateway<'_>,
    submission: &ModalInteraction,
    modal_prefix: &str,
) -> Result<(), Error> {
    let user = submission.user.id;
    let event = match submission.data.custom_id.strip_prefix(modal_prefix) {
        Some("basic") => BasicForm::parse(submission.data.clone()).map(PanelEvent::BasicFormSubmitted),
        Some("advanced") => {
            AdvancedForm::parse(submission.data.clone()).map(PanelEvent::AdvancedFormSubmitted)
        }
        _ => Err("unknown form"),
    };

    let outcome = match event {
        Ok(event) => panel.handle(user, event, gateway).await,
        Err(reason) => {
            warn!("Could not parse form {}: {}", submission.data.custom_id, reason);
            panel.reject_malformed(user, PanelError::MalformedInteraction)
        }
    };
    debug!("Panel form from {}: settings now {:?}", user, panel.settings());

    submission
        .create_response(ctx.serenity_context(), response_for(outcome, user))
        .await?;
    Ok(())
}

fn response_for(outcome: Result<Outcome, PanelError>, user: UserId) -> CreateInteractionResponse {
    let content = match outcome {
        Ok(Outcome::Acknowledge) => return CreateInteractionResponse::Acknowledge,
        Ok(Outcome::Notice(text)) => text.to_string(),
        Ok(Outcome::ChannelCreated(channel_id)) => {
            info!("Channel {} created through the admin panel by {}", channel_id, user);
            format!("✅ Channel created: {}", channel_id.mention())
        }
        Ok(Outcome::ShowBasicForm | Outcome::ShowAdvancedForm) => {
            PanelError::MalformedInteraction.to_string()
        }
        Err(err) => {
            match &err {
                PanelError::ChannelCreation(source) => {
                    error!("Channel creation failed for {}: {}", user, source)
                }
                PanelError::NotOwner => warn!("User {} tried to use someone else's admin panel", user),
                _ => {}
            }
            err.to_string()
        }
    };

    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}
