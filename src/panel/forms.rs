//! Modal dialogs shown from the panel buttons. Each form turns its submission
//! into a [`PermissionSettings`] patch; merging is left to the panel.

use super::settings::{Flags, PermissionSettings, DEFAULT_CHANNEL_NAME};

/// `"yes"` in any casing is true, anything else (blank included) is false.
pub fn is_yes(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("yes"))
}

#[derive(Debug, Clone, Default, poise::Modal)]
#[name = "Basic Permissions"]
pub struct BasicForm {
    #[name = "Channel name"]
    #[placeholder = "new-channel"]
    #[max_length = 100]
    pub channel_name: Option<String>,
    #[name = "Everyone can view? yes/no"]
    pub everyone_view: Option<String>,
    #[name = "Everyone can send? yes/no"]
    pub everyone_send: Option<String>,
    #[name = "Role can view? yes/no"]
    pub role_view: Option<String>,
    #[name = "Role can send? yes/no"]
    pub role_send: Option<String>,
}

impl BasicForm {
    pub fn into_patch(self) -> PermissionSettings {
        let channel_name = self
            .channel_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_CHANNEL_NAME.to_string());

        PermissionSettings {
            channel_name: Some(channel_name),
            everyone: Flags {
                view: Some(is_yes(self.everyone_view.as_deref())),
                send: Some(is_yes(self.everyone_send.as_deref())),
                ..Default::default()
            },
            role: Flags {
                view: Some(is_yes(self.role_view.as_deref())),
                send: Some(is_yes(self.role_send.as_deref())),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default, poise::Modal)]
#[name = "Advanced Permissions"]
pub struct AdvancedForm {
    #[name = "Everyone images? yes/no"]
    pub everyone_images: Option<String>,
    #[name = "Everyone stickers? yes/no"]
    pub everyone_stickers: Option<String>,
    #[name = "Everyone bot commands? yes/no"]
    pub everyone_commands: Option<String>,
    #[name = "Everyone reactions? yes/no"]
    pub everyone_react: Option<String>,
    #[name = "Role images? yes/no"]
    pub role_images: Option<String>,
}

impl AdvancedForm {
    /// The role always keeps stickers, commands and reactions; there is no field for them.
    pub fn into_patch(self) -> PermissionSettings {
        PermissionSettings {
            channel_name: None,
            everyone: Flags {
                images: Some(is_yes(self.everyone_images.as_deref())),
                stickers: Some(is_yes(self.everyone_stickers.as_deref())),
                commands: Some(is_yes(self.everyone_commands.as_deref())),
                react: Some(is_yes(self.everyone_react.as_deref())),
                ..Default::default()
            },
            role: Flags {
                images: Some(is_yes(self.role_images.as_deref())),
                stickers: Some(true),
                commands: Some(true),
                react: Some(true),
                ..Default::default()
            },
        }
    }
}
