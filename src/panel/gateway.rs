use std::future::Future;

use poise::serenity_prelude::{
    self as serenity, ChannelId, ChannelType, CreateChannel, GuildChannel, GuildId,
    PermissionOverwrite, Role, RoleId,
};

/// A role the panel can offer or has selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRef {
    pub id: RoleId,
    pub name: String,
    pub position: u16,
}

impl From<&Role> for RoleRef {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
            position: role.position,
        }
    }
}

/// A category channel the new channel can be placed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: ChannelId,
    pub name: String,
    pub position: u16,
}

impl From<&GuildChannel> for CategoryRef {
    fn from(channel: &GuildChannel) -> Self {
        Self {
            id: channel.id,
            name: channel.name.clone(),
            position: channel.position,
        }
    }
}

/// Everything needed for the single channel-creation call.
#[derive(Debug, Clone)]
pub struct ChannelPlan {
    pub name: String,
    pub parent: ChannelId,
    pub overwrites: Vec<PermissionOverwrite>,
}

/// The guild operations a panel session depends on.
pub trait GuildGateway {
    fn resolve_role(&self, id: RoleId) -> Option<RoleRef>;

    fn resolve_category(&self, id: ChannelId) -> Option<CategoryRef>;

    fn create_text_channel(
        &self,
        plan: &ChannelPlan,
    ) -> impl Future<Output = Result<ChannelId, serenity::Error>> + Send;
}

/// Resolves against the serenity cache and creates channels over HTTP.
pub struct SerenityGateway<'a> {
    ctx: &'a serenity::Context,
    guild_id: GuildId,
}

impl<'a> SerenityGateway<'a> {
    pub fn new(ctx: &'a serenity::Context, guild_id: GuildId) -> Self {
        Self { ctx, guild_id }
    }
}

impl GuildGateway for SerenityGateway<'_> {
    fn resolve_role(&self, id: RoleId) -> Option<RoleRef> {
        let guild = self.ctx.cache.guild(self.guild_id)?;
        guild.roles.get(&id).map(RoleRef::from)
    }

    fn resolve_category(&self, id: ChannelId) -> Option<CategoryRef> {
        let guild = self.ctx.cache.guild(self.guild_id)?;
        guild
            .channels
            .get(&id)
            .filter(|channel| channel.kind == ChannelType::Category)
            .map(CategoryRef::from)
    }

    async fn create_text_channel(&self, plan: &ChannelPlan) -> Result<ChannelId, serenity::Error> {
        let builder = CreateChannel::new(plan.name.clone())
            .kind(ChannelType::Text)
            .category(plan.parent)
            .permissions(plan.overwrites.clone());

        let channel = self.guild_id.create_channel(self.ctx, builder).await?;
        Ok(channel.id)
    }
}
