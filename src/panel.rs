// panel.rs
//! State and dispatch for one admin panel session. Nothing here talks to
//! Discord directly: the command loop turns interactions into [`PanelEvent`]s
//! and turns [`Outcome`]s back into responses.

mod forms;
mod gateway;
mod settings;

pub use forms::{AdvancedForm, BasicForm};
pub use gateway::{CategoryRef, ChannelPlan, GuildGateway, RoleRef, SerenityGateway};
pub use settings::PermissionSettings;

use poise::serenity_prelude::{
    self as serenity, ChannelId, ComponentInteractionDataKind, GuildId, RoleId, UserId,
};
use thiserror::Error;

pub const ROLE_SELECT: &str = "admin_panel:role";
pub const CATEGORY_SELECT: &str = "admin_panel:category";
pub const BASIC_BUTTON: &str = "admin_panel:basic";
pub const ADVANCED_BUTTON: &str = "admin_panel:advanced";
pub const CREATE_BUTTON: &str = "admin_panel:create";

/// Discord refuses select menus with more options than this.
pub const MAX_SELECT_OPTIONS: usize = 25;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("❌ Only the command author can use this panel.")]
    NotOwner,

    #[error("❌ Select a role and category first.")]
    IncompleteSelection,

    #[error("❌ Something went wrong reading that interaction.")]
    MalformedInteraction,

    #[error("❌ That role no longer exists.")]
    UnknownRole,

    #[error("❌ That category no longer exists.")]
    UnknownCategory,

    #[error("❌ This panel is closed.")]
    Closed,

    #[error("❌ Could not create the channel: {0}")]
    ChannelCreation(#[source] serenity::Error),
}

/// Where the owner is in the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    AwaitingBoth,
    AwaitingCategory { role: RoleRef },
    AwaitingRole { category: CategoryRef },
    Ready { role: RoleRef, category: CategoryRef },
    Finished,
}

impl Stage {
    fn with_role(self, role: RoleRef) -> Stage {
        match self {
            Stage::AwaitingBoth | Stage::AwaitingCategory { .. } => Stage::AwaitingCategory { role },
            Stage::AwaitingRole { category } | Stage::Ready { category, .. } => {
                Stage::Ready { role, category }
            }
            Stage::Finished => Stage::Finished,
        }
    }

    fn with_category(self, category: CategoryRef) -> Stage {
        match self {
            Stage::AwaitingBoth | Stage::AwaitingRole { .. } => Stage::AwaitingRole { category },
            Stage::AwaitingCategory { role } | Stage::Ready { role, .. } => {
                Stage::Ready { role, category }
            }
            Stage::Finished => Stage::Finished,
        }
    }
}

#[derive(Debug, Clone)]
pub enum PanelEvent {
    RoleSelected(RoleId),
    CategorySelected(ChannelId),
    OpenBasicForm,
    OpenAdvancedForm,
    CreateChannel,
    BasicFormSubmitted(BasicForm),
    AdvancedFormSubmitted(AdvancedForm),
}

impl PanelEvent {
    /// Maps a component interaction on the panel message to an event.
    pub fn from_component(
        custom_id: &str,
        kind: &ComponentInteractionDataKind,
    ) -> Result<PanelEvent, PanelError> {
        let selected = || match kind {
            ComponentInteractionDataKind::StringSelect { values } => values.first(),
            _ => None,
        };

        match custom_id {
            ROLE_SELECT => selected()
                .and_then(|value| value.parse::<RoleId>().ok())
                .map(PanelEvent::RoleSelected)
                .ok_or(PanelError::MalformedInteraction),
            CATEGORY_SELECT => selected()
                .and_then(|value| value.parse::<ChannelId>().ok())
                .map(PanelEvent::CategorySelected)
                .ok_or(PanelError::MalformedInteraction),
            BASIC_BUTTON => Ok(PanelEvent::OpenBasicForm),
            ADVANCED_BUTTON => Ok(PanelEvent::OpenAdvancedForm),
            CREATE_BUTTON => Ok(PanelEvent::CreateChannel),
            _ => Err(PanelError::MalformedInteraction),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Acknowledge without visible output.
    Acknowledge,
    ShowBasicForm,
    ShowAdvancedForm,
    /// Private confirmation to the owner.
    Notice(&'static str),
    ChannelCreated(ChannelId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    owner: UserId,
    guild_id: GuildId,
    stage: Stage,
    settings: PermissionSettings,
}

impl Panel {
    pub fn new(owner: UserId, guild_id: GuildId) -> Self {
        Self {
            owner,
            guild_id,
            stage: Stage::default(),
            settings: PermissionSettings::default(),
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn settings(&self) -> &PermissionSettings {
        &self.settings
    }

    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Finished
    }

    pub fn authorize(&self, actor: UserId) -> Result<(), PanelError> {
        if actor != self.owner {
            return Err(PanelError::NotOwner);
        }
        if self.is_finished() {
            return Err(PanelError::Closed);
        }
        Ok(())
    }

    /// Answer for an interaction whose payload could not be read. The owner
    /// check still comes first, so strangers only ever see `NotOwner`.
    pub fn reject_malformed(&self, actor: UserId, err: PanelError) -> Result<Outcome, PanelError> {
        self.authorize(actor)?;
        Err(err)
    }

    /// Single entry point for every interaction on the panel. State is only
    /// touched after the actor has been authorized.
    pub async fn handle<G: GuildGateway>(
        &mut self,
        actor: UserId,
        event: PanelEvent,
        gateway: &G,
    ) -> Result<Outcome, PanelError> {
        self.authorize(actor)?;

        match event {
            PanelEvent::RoleSelected(id) => self.select_role(id, gateway),
            PanelEvent::CategorySelected(id) => self.select_category(id, gateway),
            PanelEvent::OpenBasicForm => Ok(Outcome::ShowBasicForm),
            PanelEvent::OpenAdvancedForm => Ok(Outcome::ShowAdvancedForm),
            PanelEvent::BasicFormSubmitted(form) => {
                self.settings.merge(form.into_patch());
                Ok(Outcome::Notice("✅ Basic permissions updated."))
            }
            PanelEvent::AdvancedFormSubmitted(form) => {
                self.settings.merge(form.into_patch());
                Ok(Outcome::Notice("✅ Advanced permissions updated."))
            }
            PanelEvent::CreateChannel => self.create_channel(gateway).await,
        }
    }

    fn select_role<G: GuildGateway>(&mut self, id: RoleId, gateway: &G) -> Result<Outcome, PanelError> {
        let role = gateway.resolve_role(id).ok_or(PanelError::UnknownRole)?;
        self.stage = std::mem::take(&mut self.stage).with_role(role);
        Ok(Outcome::Acknowledge)
    }

    fn select_category<G: GuildGateway>(
        &mut self,
        id: ChannelId,
        gateway: &G,
    ) -> Result<Outcome, PanelError> {
        let category = gateway.resolve_category(id).ok_or(PanelError::UnknownCategory)?;
        self.stage = std::mem::take(&mut self.stage).with_category(category);
        Ok(Outcome::Acknowledge)
    }

    /// The channel the panel would create right now, if both selections are made.
    pub fn plan(&self) -> Result<ChannelPlan, PanelError> {
        let Stage::Ready { role, category } = &self.stage else {
            return Err(PanelError::IncompleteSelection);
        };

        Ok(ChannelPlan {
            name: self.settings.channel_name().to_string(),
            parent: category.id,
            overwrites: vec![
                self.settings.everyone_overwrite(self.guild_id),
                self.settings.role_overwrite(role.id),
            ],
        })
    }

    async fn create_channel<G: GuildGateway>(&mut self, gateway: &G) -> Result<Outcome, PanelError> {
        let plan = self.plan()?;
        let channel_id = gateway
            .create_text_channel(&plan)
            .await
            .map_err(PanelError::ChannelCreation)?;

        self.stage = Stage::Finished;
        Ok(Outcome::ChannelCreated(channel_id))
    }
}

/// Caps a menu at [`MAX_SELECT_OPTIONS`], returning how many entries were dropped.
pub fn truncate_options<T>(mut items: Vec<T>) -> (Vec<T>, usize) {
    let hidden = items.len().saturating_sub(MAX_SELECT_OPTIONS);
    items.truncate(MAX_SELECT_OPTIONS);
    (items, hidden)
}

/// Menu placeholder, noting when entries were left out.
pub fn placeholder(base: &str, shown: usize, hidden: usize) -> String {
    if hidden == 0 {
        base.to_string()
    } else {
        format!("{base} (first {shown} of {})", shown + hidden)
    }
}

/// Roles the bot can hand overwrites to: not `@everyone`, strictly below
/// the bot's highest role, lowest first.
pub fn eligible_roles(mut roles: Vec<RoleRef>, guild_id: GuildId, ceiling: u16) -> Vec<RoleRef> {
    let everyone = guild_id.everyone_role();
    roles.retain(|role| role.id != everyone && role.position < ceiling);
    roles.sort_by_key(|role| (role.position, role.id));
    roles
}

/// Position of the highest of `member_roles`, or 0 when the bot has none.
pub fn highest_position(roles: &[RoleRef], member_roles: &[RoleId]) -> u16 {
    roles
        .iter()
        .filter(|role| member_roles.contains(&role.id))
        .map(|role| role.position)
        .max()
        .unwrap_or(0)
}

pub fn sorted_categories(mut categories: Vec<CategoryRef>) -> Vec<CategoryRef> {
    categories.sort_by_key(|category| (category.position, category.id));
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use poise::serenity_prelude::{PermissionOverwriteType, Permissions};
    use std::sync::Mutex;

    const GUILD: u64 = 1000;
    const OWNER: u64 = 1;
    const INTRUDER: u64 = 2;
    const ROLE: u64 = 50;
    const CATEGORY: u64 = 60;

    #[derive(Default)]
    struct MockGuild {
        created: Mutex<Vec<ChannelPlan>>,
        fail: bool,
    }

    impl MockGuild {
        fn calls(&self) -> usize {
            self.created.lock().unwrap().len()
        }
    }

    impl GuildGateway for MockGuild {
        fn resolve_role(&self, id: RoleId) -> Option<RoleRef> {
            (id.get() == ROLE || id.get() == ROLE + 1).then(|| RoleRef {
                id,
                name: format!("role-{id}"),
                position: 1,
            })
        }

        fn resolve_category(&self, id: ChannelId) -> Option<CategoryRef> {
            (id.get() == CATEGORY).then(|| CategoryRef {
                id,
                name: "Text Channels".into(),
                position: 0,
            })
        }

        async fn create_text_channel(&self, plan: &ChannelPlan) -> Result<ChannelId, serenity::Error> {
            if self.fail {
                return Err(serenity::Error::Other("Missing Permissions"));
            }
            self.created.lock().unwrap().push(plan.clone());
            Ok(ChannelId::new(777))
        }
    }

    fn owner() -> UserId {
        UserId::new(OWNER)
    }

    fn panel() -> Panel {
        Panel::new(owner(), GuildId::new(GUILD))
    }

    async fn ready_panel(gateway: &MockGuild) -> Panel {
        let mut panel = panel();
        panel.handle(owner(), PanelEvent::RoleSelected(RoleId::new(ROLE)), gateway).await.unwrap();
        panel
            .handle(owner(), PanelEvent::CategorySelected(ChannelId::new(CATEGORY)), gateway)
            .await
            .unwrap();
        panel
    }

    fn all() -> Permissions {
        Permissions::VIEW_CHANNEL
            | Permissions::SEND_MESSAGES
            | Permissions::ATTACH_FILES
            | Permissions::USE_EXTERNAL_STICKERS
            | Permissions::USE_APPLICATION_COMMANDS
            | Permissions::ADD_REACTIONS
    }

    #[tokio::test]
    async fn selections_move_through_stages_in_any_order() {
        let gateway = MockGuild::default();
        let mut panel = panel();

        let outcome = panel
            .handle(owner(), PanelEvent::CategorySelected(ChannelId::new(CATEGORY)), &gateway)
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Acknowledge);
        assert!(matches!(panel.stage(), Stage::AwaitingRole { .. }));

        panel.handle(owner(), PanelEvent::RoleSelected(RoleId::new(ROLE)), &gateway).await.unwrap();
        assert!(matches!(panel.stage(), Stage::Ready { role, .. } if role.id == RoleId::new(ROLE)));

        panel.handle(owner(), PanelEvent::RoleSelected(RoleId::new(ROLE + 1)), &gateway).await.unwrap();
        assert!(matches!(panel.stage(), Stage::Ready { role, .. } if role.id == RoleId::new(ROLE + 1)));
    }

    #[tokio::test]
    async fn unknown_selection_leaves_state_alone() {
        let gateway = MockGuild::default();
        let mut panel = panel();
        let before = panel.clone();

        let err = panel.handle(owner(), PanelEvent::RoleSelected(RoleId::new(9)), &gateway).await;
        assert!(matches!(err, Err(PanelError::UnknownRole)));
        let err = panel.handle(owner(), PanelEvent::CategorySelected(ChannelId::new(9)), &gateway).await;
        assert!(matches!(err, Err(PanelError::UnknownCategory)));
        assert_eq!(panel, before);
    }

    #[tokio::test]
    async fn create_without_both_selections_makes_no_call() {
        let gateway = MockGuild::default();

        let mut none = panel();
        let mut role_only = panel();
        role_only.handle(owner(), PanelEvent::RoleSelected(RoleId::new(ROLE)), &gateway).await.unwrap();
        let mut category_only = panel();
        category_only
            .handle(owner(), PanelEvent::CategorySelected(ChannelId::new(CATEGORY)), &gateway)
            .await
            .unwrap();

        for panel in [&mut none, &mut role_only, &mut category_only] {
            let before = panel.clone();
            let result = panel.handle(owner(), PanelEvent::CreateChannel, &gateway).await;
            assert!(matches!(result, Err(PanelError::IncompleteSelection)));
            assert_eq!(*panel, before);
        }
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn create_with_defaults_denies_everyone_and_allows_role() {
        let gateway = MockGuild::default();
        let mut panel = ready_panel(&gateway).await;

        let outcome = panel.handle(owner(), PanelEvent::CreateChannel, &gateway).await.unwrap();
        assert_eq!(outcome, Outcome::ChannelCreated(ChannelId::new(777)));
        assert!(panel.is_finished());

        let created = gateway.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        let plan = &created[0];
        assert_eq!(plan.name, "new-channel");
        assert_eq!(plan.parent, ChannelId::new(CATEGORY));

        let everyone = &plan.overwrites[0];
        assert!(matches!(everyone.kind, PermissionOverwriteType::Role(id) if id == GuildId::new(GUILD).everyone_role()));
        assert_eq!(everyone.allow, Permissions::empty());
        assert_eq!(everyone.deny, all());

        let role = &plan.overwrites[1];
        assert!(matches!(role.kind, PermissionOverwriteType::Role(id) if id.get() == ROLE));
        assert_eq!(role.allow, all());
        assert_eq!(role.deny, Permissions::empty());
    }

    #[tokio::test]
    async fn submitted_forms_shape_the_overwrites() {
        let gateway = MockGuild::default();
        let mut panel = ready_panel(&gateway).await;

        let basic = BasicForm {
            channel_name: Some("staff-only".into()),
            everyone_view: Some("Yes".into()),
            everyone_send: Some("no".into()),
            role_view: Some("yes".into()),
            role_send: Some("".into()),
        };
        let outcome = panel.handle(owner(), PanelEvent::BasicFormSubmitted(basic), &gateway).await.unwrap();
        assert_eq!(outcome, Outcome::Notice("✅ Basic permissions updated."));

        let advanced = AdvancedForm { everyone_react: Some("YES".into()), ..Default::default() };
        panel.handle(owner(), PanelEvent::AdvancedFormSubmitted(advanced), &gateway).await.unwrap();

        let plan = panel.plan().unwrap();
        assert_eq!(plan.name, "staff-only");
        assert_eq!(plan.overwrites[0].allow, Permissions::VIEW_CHANNEL | Permissions::ADD_REACTIONS);
        assert_eq!(
            plan.overwrites[1].allow,
            all() - Permissions::SEND_MESSAGES - Permissions::ATTACH_FILES
        );
        assert_eq!(
            plan.overwrites[1].deny,
            Permissions::SEND_MESSAGES | Permissions::ATTACH_FILES
        );
    }

    #[tokio::test]
    async fn later_submissions_win_and_advanced_resets_forced_flags() {
        let gateway = MockGuild::default();
        let mut panel = panel();

        let first = BasicForm { channel_name: Some("one".into()), role_view: Some("yes".into()), ..Default::default() };
        let second = BasicForm { channel_name: Some("two".into()), ..Default::default() };
        panel.handle(owner(), PanelEvent::BasicFormSubmitted(first), &gateway).await.unwrap();
        panel.handle(owner(), PanelEvent::BasicFormSubmitted(second), &gateway).await.unwrap();
        assert_eq!(panel.settings().channel_name(), "two");
        assert_eq!(panel.settings().role.view, Some(false));

        panel.settings.role.stickers = Some(false);
        panel
            .handle(owner(), PanelEvent::AdvancedFormSubmitted(AdvancedForm::default()), &gateway)
            .await
            .unwrap();
        assert_eq!(panel.settings().role.stickers, Some(true));
        assert_eq!(panel.settings().role.commands, Some(true));
        assert_eq!(panel.settings().role.react, Some(true));
        assert_eq!(panel.settings().channel_name(), "two");
    }

    #[tokio::test]
    async fn intruder_is_rejected_everywhere() {
        let gateway = MockGuild::default();
        let mut panel = ready_panel(&gateway).await;
        let before = panel.clone();
        let intruder = UserId::new(INTRUDER);

        let events = [
            PanelEvent::RoleSelected(RoleId::new(ROLE + 1)),
            PanelEvent::CategorySelected(ChannelId::new(CATEGORY)),
            PanelEvent::OpenBasicForm,
            PanelEvent::OpenAdvancedForm,
            PanelEvent::CreateChannel,
            PanelEvent::BasicFormSubmitted(BasicForm::default()),
            PanelEvent::AdvancedFormSubmitted(AdvancedForm::default()),
        ];
        for event in events {
            let result = panel.handle(intruder, event, &gateway).await;
            assert!(matches!(result, Err(PanelError::NotOwner)));
        }
        assert_eq!(panel, before);
        assert_eq!(gateway.calls(), 0);
    }

    #[test]
    fn unreadable_payload_from_stranger_is_not_owner() {
        let panel = panel();
        let before = panel.clone();

        let stranger = panel.reject_malformed(UserId::new(INTRUDER), PanelError::MalformedInteraction);
        assert!(matches!(stranger, Err(PanelError::NotOwner)));

        let owner_result = panel.reject_malformed(owner(), PanelError::MalformedInteraction);
        assert!(matches!(owner_result, Err(PanelError::MalformedInteraction)));
        assert_eq!(panel, before);
    }

    #[tokio::test]
    async fn unreadable_payload_on_finished_panel_is_closed() {
        let gateway = MockGuild::default();
        let mut panel = ready_panel(&gateway).await;
        panel.handle(owner(), PanelEvent::CreateChannel, &gateway).await.unwrap();

        let result = panel.reject_malformed(owner(), PanelError::MalformedInteraction);
        assert!(matches!(result, Err(PanelError::Closed)));
    }

    #[tokio::test]
    async fn failed_creation_keeps_the_session_open() {
        let gateway = MockGuild { fail: true, ..Default::default() };
        let mut panel = ready_panel(&gateway).await;
        let before = panel.clone();

        let result = panel.handle(owner(), PanelEvent::CreateChannel, &gateway).await;
        assert!(matches!(result, Err(PanelError::ChannelCreation(_))));
        assert_eq!(panel, before);
        assert!(!panel.is_finished());
    }

    #[tokio::test]
    async fn finished_panel_is_inert() {
        let gateway = MockGuild::default();
        let mut panel = ready_panel(&gateway).await;
        panel.handle(owner(), PanelEvent::CreateChannel, &gateway).await.unwrap();

        let result = panel.handle(owner(), PanelEvent::CreateChannel, &gateway).await;
        assert!(matches!(result, Err(PanelError::Closed)));
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn sessions_do_not_share_state() {
        let gateway = MockGuild::default();
        let mut first = panel();
        let mut second = Panel::new(UserId::new(INTRUDER), GuildId::new(GUILD));

        first.handle(owner(), PanelEvent::RoleSelected(RoleId::new(ROLE)), &gateway).await.unwrap();
        let form = BasicForm { channel_name: Some("mine".into()), ..Default::default() };
        first.handle(owner(), PanelEvent::BasicFormSubmitted(form), &gateway).await.unwrap();

        assert_eq!(second.stage(), &Stage::AwaitingBoth);
        assert_eq!(second.settings(), &PermissionSettings::default());

        let result = second.handle(owner(), PanelEvent::CreateChannel, &gateway).await;
        assert!(matches!(result, Err(PanelError::NotOwner)));
        assert!(matches!(first.stage(), Stage::AwaitingCategory { .. }));
    }

    #[test]
    fn component_ids_map_to_events() {
        let select = |value: &str| ComponentInteractionDataKind::StringSelect { values: vec![value.to_string()] };

        assert!(matches!(
            PanelEvent::from_component(ROLE_SELECT, &select("50")),
            Ok(PanelEvent::RoleSelected(id)) if id.get() == 50
        ));
        assert!(matches!(
            PanelEvent::from_component(CATEGORY_SELECT, &select("60")),
            Ok(PanelEvent::CategorySelected(id)) if id.get() == 60
        ));
        assert!(matches!(
            PanelEvent::from_component(CREATE_BUTTON, &ComponentInteractionDataKind::Button),
            Ok(PanelEvent::CreateChannel)
        ));
        assert!(matches!(
            PanelEvent::from_component(BASIC_BUTTON, &ComponentInteractionDataKind::Button),
            Ok(PanelEvent::OpenBasicForm)
        ));
    }

    #[test]
    fn missing_selection_data_is_malformed() {
        let empty = ComponentInteractionDataKind::StringSelect { values: vec![] };
        let garbage = ComponentInteractionDataKind::StringSelect { values: vec!["abc".into()] };

        for (id, kind) in [
            (ROLE_SELECT, &empty),
            (CATEGORY_SELECT, &garbage),
            (ROLE_SELECT, &ComponentInteractionDataKind::Button),
            ("something_else", &ComponentInteractionDataKind::Button),
        ] {
            assert!(matches!(
                PanelEvent::from_component(id, kind),
                Err(PanelError::MalformedInteraction)
            ));
        }
    }

    #[test]
    fn menus_are_capped_at_25() {
        let (shown, hidden) = truncate_options((0..40).collect::<Vec<_>>());
        assert_eq!(shown.len(), 25);
        assert_eq!(shown.last(), Some(&24));
        assert_eq!(hidden, 15);
        assert_eq!(placeholder("Select a role", 25, 15), "Select a role (first 25 of 40)");

        let (shown, hidden) = truncate_options(vec![1, 2]);
        assert_eq!(shown, vec![1, 2]);
        assert_eq!(hidden, 0);
        assert_eq!(placeholder("Select a role", 2, 0), "Select a role");
    }

    #[test]
    fn eligible_roles_skip_everyone_and_higher_roles() {
        let role = |id: u64, position: u16| RoleRef { id: RoleId::new(id), name: id.to_string(), position };
        let roles = vec![role(GUILD, 0), role(5, 3), role(4, 1), role(6, 5), role(7, 8)];

        let ceiling = highest_position(&roles, &[RoleId::new(6)]);
        assert_eq!(ceiling, 5);

        let ids: Vec<u64> = eligible_roles(roles, GuildId::new(GUILD), ceiling)
            .into_iter()
            .map(|role| role.id.get())
            .collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn bot_without_roles_offers_nothing() {
        let roles = vec![RoleRef { id: RoleId::new(5), name: "a".into(), position: 2 }];
        assert_eq!(highest_position(&roles, &[]), 0);
        assert!(eligible_roles(roles, GuildId::new(GUILD), 0).is_empty());
    }
}
