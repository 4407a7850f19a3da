use poise::serenity_prelude::{
    GuildId, PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId,
};

pub const DEFAULT_CHANNEL_NAME: &str = "new-channel";

/// Per-target capability flags. `None` means the owner never submitted a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub view: Option<bool>,
    pub send: Option<bool>,
    pub images: Option<bool>,
    pub stickers: Option<bool>,
    pub commands: Option<bool>,
    pub react: Option<bool>,
}

impl Flags {
    fn merge(&mut self, patch: Flags) {
        overlay(&mut self.view, patch.view);
        overlay(&mut self.send, patch.send);
        overlay(&mut self.images, patch.images);
        overlay(&mut self.stickers, patch.stickers);
        overlay(&mut self.commands, patch.commands);
        overlay(&mut self.react, patch.react);
    }

    /// Splits the flags into allow/deny sets, filling unset flags with `default`.
    pub fn resolve(&self, default: bool) -> (Permissions, Permissions) {
        let pairs = [
            (self.view, Permissions::VIEW_CHANNEL),
            (self.send, Permissions::SEND_MESSAGES),
            (self.images, Permissions::ATTACH_FILES),
            (self.stickers, Permissions::USE_EXTERNAL_STICKERS),
            (self.commands, Permissions::USE_APPLICATION_COMMANDS),
            (self.react, Permissions::ADD_REACTIONS),
        ];

        pairs.into_iter().fold(
            (Permissions::empty(), Permissions::empty()),
            |(allow, deny), (flag, permission)| {
                if flag.unwrap_or(default) {
                    (allow | permission, deny)
                } else {
                    (allow, deny | permission)
                }
            },
        )
    }
}

fn overlay<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Settings collected by one panel session. Forms produce instances of this
/// type as patches which the panel merges in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSettings {
    pub channel_name: Option<String>,
    pub everyone: Flags,
    pub role: Flags,
}

impl PermissionSettings {
    /// Overwrites every key the patch sets; keys it leaves unset are kept.
    pub fn merge(&mut self, patch: PermissionSettings) {
        overlay(&mut self.channel_name, patch.channel_name);
        self.everyone.merge(patch.everyone);
        self.role.merge(patch.role);
    }

    pub fn channel_name(&self) -> &str {
        self.channel_name.as_deref().unwrap_or(DEFAULT_CHANNEL_NAME)
    }

    /// Overwrite for `@everyone`; unset flags are denied.
    pub fn everyone_overwrite(&self, guild_id: GuildId) -> PermissionOverwrite {
        let (allow, deny) = self.everyone.resolve(false);
        PermissionOverwrite {
            allow,
            deny,
            kind: PermissionOverwriteType::Role(guild_id.everyone_role()),
        }
    }

    /// Overwrite for the selected role; unset flags are allowed.
    pub fn role_overwrite(&self, role_id: RoleId) -> PermissionOverwrite {
        let (allow, deny) = self.role.resolve(true);
        PermissionOverwrite {
            allow,
            deny,
            kind: PermissionOverwriteType::Role(role_id),
        }
    }
}
