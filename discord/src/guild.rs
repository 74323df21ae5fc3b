use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::{
    channel::{ChannelPayload, ChannelType, GuildChannel},
    emoji::{Emoji, EmojiPayload},
    member::{MemberPayload, MembersManager},
    request::{Request, Result},
    resource::Snowflake,
    role::{Permissions, Role, RolePayload},
    user::User,
};

#[derive(Debug, Serialize_repr, Deserialize_repr, PartialEq, Eq, Default, Copy, Clone)]
#[repr(u8)]
pub enum VerificationLevel {
    #[default]
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    VeryHigh = 4,
}

#[derive(Debug, Serialize_repr, Deserialize_repr, PartialEq, Eq, Default, Copy, Clone)]
#[repr(u8)]
pub enum DefaultMessageNotifications {
    #[default]
    AllMessages = 0,
    OnlyMentions = 1,
}

#[derive(Debug, Serialize_repr, Deserialize_repr, PartialEq, Eq, Default, Copy, Clone)]
#[repr(u8)]
pub enum ExplicitContentFilter {
    #[default]
    Disabled = 0,
    MembersWithoutRoles = 1,
    AllMembers = 2,
}

#[derive(Debug, Serialize_repr, Deserialize_repr, PartialEq, Eq, Default, Copy, Clone)]
#[repr(u8)]
pub enum MfaLevel {
    #[default]
    None = 0,
    Elevated = 1,
}

#[derive(Debug, Serialize_repr, Deserialize_repr, PartialEq, Eq, Default, Copy, Clone)]
#[repr(u8)]
pub enum PremiumTier {
    #[default]
    None = 0,
    Tier1 = 1,
    Tier2 = 2,
    Tier3 = 3,
}

/// A guild the way the api sends it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GuildPayload {
    pub id: Snowflake<Guild>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub icon_hash: Option<String>,
    #[serde(default)]
    pub splash: Option<String>,
    #[serde(default)]
    pub discovery_splash: Option<String>,
    #[serde(default)]
    pub owner: Option<bool>,
    #[serde(default)]
    pub owner_id: Option<Snowflake<User>>,
    #[serde(default)]
    pub permissions: Option<Permissions>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub afk_channel_id: Option<Snowflake<GuildChannel>>,
    #[serde(default)]
    pub afk_timeout: Option<u32>,
    #[serde(default)]
    pub widget_enabled: Option<bool>,
    #[serde(default)]
    pub widget_channel_id: Option<Snowflake<GuildChannel>>,
    #[serde(default)]
    pub verification_level: Option<VerificationLevel>,
    #[serde(default)]
    pub default_message_notifications: Option<DefaultMessageNotifications>,
    #[serde(default)]
    pub explicit_content_filter: Option<ExplicitContentFilter>,
    #[serde(default)]
    pub roles: Vec<RolePayload>,
    #[serde(default)]
    pub emojis: Vec<EmojiPayload>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub mfa_level: Option<MfaLevel>,
    #[serde(default)]
    pub system_channel_id: Option<Snowflake<GuildChannel>>,
    #[serde(default)]
    pub rules_channel_id: Option<Snowflake<GuildChannel>>,
    #[serde(default)]
    pub public_updates_channel_id: Option<Snowflake<GuildChannel>>,
    #[serde(default)]
    pub joined_at: Option<String>,
    #[serde(default)]
    pub large: Option<bool>,
    #[serde(default)]
    pub unavailable: Option<bool>,
    #[serde(default)]
    pub member_count: Option<u64>,
    #[serde(default)]
    pub members: Option<Vec<MemberPayload>>,
    #[serde(default)]
    pub channels: Option<Vec<ChannelPayload>>,
    #[serde(default)]
    pub max_members: Option<u64>,
    #[serde(default)]
    pub vanity_url_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub premium_tier: Option<PremiumTier>,
    #[serde(default)]
    pub premium_subscription_count: Option<u64>,
    #[serde(default)]
    pub preferred_locale: Option<String>,
    #[serde(default)]
    pub approximate_member_count: Option<u64>,
    #[serde(default)]
    pub approximate_presence_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    pub id: Snowflake<Guild>,
    pub name: String,
    pub icon: Option<String>,
    pub splash: Option<String>,
    pub discovery_splash: Option<String>,
    pub owner_id: Option<Snowflake<User>>,
    pub permissions: Option<Permissions>,
    pub region: Option<String>,
    pub afk_channel_id: Option<Snowflake<GuildChannel>>,
    pub afk_timeout: Option<u32>,
    pub widget_enabled: bool,
    pub widget_channel_id: Option<Snowflake<GuildChannel>>,
    pub verification_level: VerificationLevel,
    pub default_message_notifications: DefaultMessageNotifications,
    pub explicit_content_filter: ExplicitContentFilter,
    pub roles: Vec<Role>,
    pub emojis: Vec<Emoji>,
    pub channels: Vec<GuildChannel>,
    pub features: Vec<String>,
    pub mfa_level: MfaLevel,
    pub system_channel_id: Option<Snowflake<GuildChannel>>,
    pub rules_channel_id: Option<Snowflake<GuildChannel>>,
    pub public_updates_channel_id: Option<Snowflake<GuildChannel>>,
    pub joined_at: Option<String>,
    pub large: bool,
    pub unavailable: bool,
    pub member_count: Option<u64>,
    pub max_members: Option<u64>,
    pub vanity_url_code: Option<String>,
    pub description: Option<String>,
    pub banner: Option<String>,
    pub premium_tier: PremiumTier,
    pub premium_subscription_count: Option<u64>,
    pub preferred_locale: Option<String>,
    pub approximate_member_count: Option<u64>,
    pub approximate_presence_count: Option<u64>,

    /// Only set when the guild was fetched together with its member list.
    pub members: Option<MembersManager>,
}

// The member list is left out here, the manager attaches it when it fetches a
// guild that embeds one.
impl From<GuildPayload> for Guild {
    fn from(payload: GuildPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            icon: payload.icon.or(payload.icon_hash),
            splash: payload.splash,
            discovery_splash: payload.discovery_splash,
            owner_id: payload.owner_id,
            permissions: payload.permissions,
            region: payload.region,
            afk_channel_id: payload.afk_channel_id,
            afk_timeout: payload.afk_timeout,
            widget_enabled: payload.widget_enabled.unwrap_or(false),
            widget_channel_id: payload.widget_channel_id,
            verification_level: payload.verification_level.unwrap_or_default(),
            default_message_notifications: payload
                .default_message_notifications
                .unwrap_or_default(),
            explicit_content_filter: payload.explicit_content_filter.unwrap_or_default(),
            roles: payload.roles.into_iter().map(Role::from).collect(),
            emojis: payload.emojis.into_iter().map(Emoji::from).collect(),
            channels: payload
                .channels
                .unwrap_or_default()
                .into_iter()
                .map(GuildChannel::from)
                .collect(),
            features: payload.features,
            mfa_level: payload.mfa_level.unwrap_or_default(),
            system_channel_id: payload.system_channel_id,
            rules_channel_id: payload.rules_channel_id,
            public_updates_channel_id: payload.public_updates_channel_id,
            joined_at: payload.joined_at,
            large: payload.large.unwrap_or(false),
            unavailable: payload.unavailable.unwrap_or(false),
            member_count: payload.member_count,
            max_members: payload.max_members,
            vanity_url_code: payload.vanity_url_code,
            description: payload.description,
            banner: payload.banner,
            premium_tier: payload.premium_tier.unwrap_or_default(),
            premium_subscription_count: payload.premium_subscription_count,
            preferred_locale: payload.preferred_locale,
            approximate_member_count: payload.approximate_member_count,
            approximate_presence_count: payload.approximate_presence_count,
            members: None,
        }
    }
}

impl Guild {
    pub fn role(&self, id: Snowflake<Role>) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == id)
    }

    /// The `@everyone` role shares its id with the guild.
    pub fn everyone(&self) -> Option<&Role> {
        self.role(self.id.cast())
    }
}

pub const GUILDS_URI: &str = "/guilds";

/// Anything that points at a guild: the guild itself or just its id.
pub trait GuildResource {
    fn endpoint(&self) -> Snowflake<Guild>;

    fn uri(&self) -> String {
        format!("{}/{}", GUILDS_URI, self.endpoint())
    }

    fn get_request(&self) -> Request<GuildPayload> {
        Request::get(self.uri())
    }

    fn preview_request(&self) -> Request<GuildPreviewPayload> {
        Request::get(format!("{}/preview", self.uri()))
    }

    fn patch_request(&self, body: &GuildModifyPayload) -> Result<Request<GuildPayload>> {
        Request::patch(self.uri(), body)
    }

    fn delete_request(&self) -> Request<()> {
        Request::delete(self.uri())
    }
}

impl GuildResource for Snowflake<Guild> {
    fn endpoint(&self) -> Snowflake<Guild> {
        *self
    }
}

impl GuildResource for Guild {
    fn endpoint(&self) -> Snowflake<Guild> {
        self.id
    }
}

impl GuildResource for GuildPayload {
    fn endpoint(&self) -> Snowflake<Guild> {
        self.id
    }
}

impl<T> GuildResource for &T
where
    T: GuildResource + ?Sized,
{
    fn endpoint(&self) -> Snowflake<Guild> {
        (**self).endpoint()
    }
}

pub fn create_request(body: &GuildCreatePayload) -> Result<Request<GuildPayload>> {
    Request::post(GUILDS_URI, body)
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GuildPreviewPayload {
    pub id: Snowflake<Guild>,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub splash: Option<String>,
    #[serde(default)]
    pub discovery_splash: Option<String>,
    #[serde(default)]
    pub emojis: Vec<EmojiPayload>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub approximate_member_count: u64,
    #[serde(default)]
    pub approximate_presence_count: u64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Public information about a guild, available for discoverable guilds even
/// when the bot is not a member.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildPreview {
    pub id: Snowflake<Guild>,
    pub name: String,
    pub icon: Option<String>,
    pub splash: Option<String>,
    pub discovery_splash: Option<String>,
    pub emojis: Vec<Emoji>,
    pub features: Vec<String>,
    pub approximate_member_count: u64,
    pub approximate_presence_count: u64,
    pub description: Option<String>,
}

impl From<GuildPreviewPayload> for GuildPreview {
    fn from(payload: GuildPreviewPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            icon: payload.icon,
            splash: payload.splash,
            discovery_splash: payload.discovery_splash,
            emojis: payload.emojis.into_iter().map(Emoji::from).collect(),
            features: payload.features,
            approximate_member_count: payload.approximate_member_count,
            approximate_presence_count: payload.approximate_presence_count,
            description: payload.description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Setters, Serialize, Deserialize)]
#[setters(strip_option)]
pub struct GuildCreateRolePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentionable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildCreateChannelPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChannelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Setters)]
#[setters(strip_option)]
pub struct GuildCreateChannelOptions {
    #[setters(skip)]
    pub name: String,
    pub id: Option<String>,
    pub kind: Option<ChannelType>,
    pub parent_id: Option<String>,
}

impl GuildCreateChannelOptions {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            id: None,
            kind: None,
            parent_id: None,
        }
    }
}

/// A role for a new guild, either an existing role or a hand written payload.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateRole {
    Role(Role),
    Payload(GuildCreateRolePayload),
}

impl From<Role> for CreateRole {
    fn from(value: Role) -> Self {
        Self::Role(value)
    }
}

impl From<GuildCreateRolePayload> for CreateRole {
    fn from(value: GuildCreateRolePayload) -> Self {
        Self::Payload(value)
    }
}

impl From<CreateRole> for GuildCreateRolePayload {
    fn from(value: CreateRole) -> Self {
        match value {
            CreateRole::Role(role) => role.to_create_payload(),
            CreateRole::Payload(payload) => payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateChannel {
    Channel(GuildChannel),
    Options(GuildCreateChannelOptions),
}

impl From<GuildChannel> for CreateChannel {
    fn from(value: GuildChannel) -> Self {
        Self::Channel(value)
    }
}

impl From<GuildCreateChannelOptions> for CreateChannel {
    fn from(value: GuildCreateChannelOptions) -> Self {
        Self::Options(value)
    }
}

impl From<CreateChannel> for GuildCreateChannelPayload {
    fn from(value: CreateChannel) -> Self {
        match value {
            CreateChannel::Channel(channel) => Self {
                id: Some(channel.id.to_string()),
                name: channel.name,
                kind: Some(channel.kind),
                parent_id: channel.parent_id.map(|id| id.to_string()),
            },
            CreateChannel::Options(options) => Self {
                id: options.id,
                name: options.name,
                kind: options.kind,
                parent_id: options.parent_id,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Setters)]
#[setters(strip_option)]
pub struct GuildCreateOptions {
    #[setters(skip)]
    pub name: String,
    pub region: Option<String>,
    /// A url, a local path or an inline `data:` uri.
    pub icon: Option<String>,
    pub verification_level: Option<VerificationLevel>,
    pub default_message_notifications: Option<DefaultMessageNotifications>,
    pub explicit_content_filter: Option<ExplicitContentFilter>,
    /// `Some(vec![])` is sent as an empty list, `None` leaves the field out.
    pub roles: Option<Vec<CreateRole>>,
    pub channels: Option<Vec<CreateChannel>>,
    pub afk_channel_id: Option<Snowflake<GuildChannel>>,
    pub afk_timeout: Option<u32>,
    pub system_channel_id: Option<Snowflake<GuildChannel>>,
}

impl GuildCreateOptions {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn role(mut self, role: impl Into<CreateRole>) -> Self {
        self.roles.get_or_insert_with(Vec::new).push(role.into());
        self
    }

    pub fn channel(mut self, channel: impl Into<CreateChannel>) -> Self {
        self.channels.get_or_insert_with(Vec::new).push(channel.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildCreatePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<VerificationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_message_notifications: Option<DefaultMessageNotifications>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_content_filter: Option<ExplicitContentFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<GuildCreateRolePayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<GuildCreateChannelPayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<Snowflake<GuildChannel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<Snowflake<GuildChannel>>,
}

fn flatten<T, U: From<T>>(items: Option<Vec<T>>) -> Option<Vec<U>> {
    items.map(|items| items.into_iter().map(U::from).collect())
}

impl From<GuildCreateOptions> for GuildCreatePayload {
    fn from(options: GuildCreateOptions) -> Self {
        Self {
            name: options.name,
            region: options.region,
            icon: options.icon,
            verification_level: options.verification_level,
            default_message_notifications: options.default_message_notifications,
            explicit_content_filter: options.explicit_content_filter,
            roles: flatten(options.roles),
            channels: flatten(options.channels),
            afk_channel_id: options.afk_channel_id,
            afk_timeout: options.afk_timeout,
            system_channel_id: options.system_channel_id,
        }
    }
}

/// Changes to apply to a guild. Fields left unset are not sent; fields set to
/// `Some(None)` are cleared.
#[derive(Debug, Clone, Default, PartialEq, Setters)]
#[setters(strip_option)]
pub struct GuildModifyOptions {
    pub name: Option<String>,
    pub region: Option<Option<String>>,
    pub verification_level: Option<VerificationLevel>,
    pub default_message_notifications: Option<DefaultMessageNotifications>,
    pub explicit_content_filter: Option<ExplicitContentFilter>,
    pub afk_channel_id: Option<Option<Snowflake<GuildChannel>>>,
    pub afk_timeout: Option<u32>,
    pub owner_id: Option<Snowflake<User>>,
    /// A url, a local path or an inline `data:` uri.
    pub icon: Option<Option<String>>,
    pub splash: Option<Option<String>>,
    pub banner: Option<Option<String>>,
    pub system_channel_id: Option<Option<Snowflake<GuildChannel>>>,
    pub rules_channel_id: Option<Option<Snowflake<GuildChannel>>>,
    pub public_updates_channel_id: Option<Option<Snowflake<GuildChannel>>>,
    pub preferred_locale: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuildModifyPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<VerificationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_message_notifications: Option<DefaultMessageNotifications>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_content_filter: Option<ExplicitContentFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<Option<Snowflake<GuildChannel>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Snowflake<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<Option<Snowflake<GuildChannel>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_channel_id: Option<Option<Snowflake<GuildChannel>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_updates_channel_id: Option<Option<Snowflake<GuildChannel>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_locale: Option<Option<String>>,
}

impl From<GuildModifyOptions> for GuildModifyPayload {
    fn from(options: GuildModifyOptions) -> Self {
        Self {
            name: options.name,
            region: options.region,
            verification_level: options.verification_level,
            default_message_notifications: options.default_message_notifications,
            explicit_content_filter: options.explicit_content_filter,
            afk_channel_id: options.afk_channel_id,
            afk_timeout: options.afk_timeout,
            owner_id: options.owner_id,
            icon: options.icon,
            splash: options.splash,
            banner: options.banner,
            system_channel_id: options.system_channel_id,
            rules_channel_id: options.rules_channel_id,
            public_updates_channel_id: options.public_updates_channel_id,
            preferred_locale: options.preferred_locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn partial_guilds_deserialize() {
        let payload: GuildPayload =
            serde_json::from_value(json!({ "id": "41771983423143937", "unavailable": true }))
                .unwrap();
        let guild = Guild::from(payload);
        assert!(guild.unavailable);
        assert!(guild.name.is_empty());
        assert!(guild.members.is_none());
    }

    #[test]
    fn guild_maps_nested_objects() {
        let payload: GuildPayload = serde_json::from_value(json!({
            "id": "197038439483310086",
            "name": "Discord Testers",
            "icon": "f64c482b807da4f539cff778d174971c",
            "owner_id": "73193882359173120",
            "verification_level": 3,
            "default_message_notifications": 1,
            "explicit_content_filter": 2,
            "roles": [{
                "id": "197038439483310086",
                "name": "@everyone",
                "permissions": "104324161",
                "position": 0
            }],
            "emojis": [{ "id": "41771983429993937", "name": "LUL" }],
            "features": ["ANIMATED_ICON", "COMMUNITY"],
            "premium_tier": 3,
            "preferred_locale": "en-US"
        }))
        .unwrap();

        let guild = Guild::from(payload);
        assert_eq!(guild.verification_level, VerificationLevel::High);
        assert_eq!(
            guild.default_message_notifications,
            DefaultMessageNotifications::OnlyMentions
        );
        assert_eq!(guild.explicit_content_filter, ExplicitContentFilter::AllMembers);
        assert_eq!(guild.premium_tier, PremiumTier::Tier3);
        assert_eq!(guild.everyone().unwrap().name, "@everyone");
        assert_eq!(guild.emojis[0].name.as_deref(), Some("LUL"));
        assert_eq!(guild.features.len(), 2);
    }

    #[test]
    fn uris() {
        let id: Snowflake<Guild> = Snowflake::new(123);
        assert_eq!(id.uri(), "/guilds/123");
        assert_eq!(id.preview_request().uri, "/guilds/123/preview");
        assert_eq!((&id).delete_request().uri, "/guilds/123");
    }

    #[test]
    fn modify_payload_omits_unset_fields() {
        let options = GuildModifyOptions::default()
            .name("New".to_owned())
            .banner(None)
            .afk_timeout(300);

        let body = serde_json::to_value(GuildModifyPayload::from(options)).unwrap();
        assert_eq!(
            body,
            json!({ "name": "New", "banner": null, "afk_timeout": 300 })
        );
    }

    #[test]
    fn create_payload_flattens_channels() {
        let category = GuildChannel {
            id: Snowflake::new(1),
            name: "general".to_owned(),
            kind: ChannelType::GuildCategory,
            parent_id: None,
            position: None,
        };
        let options = GuildCreateOptions::new("Test")
            .channel(category)
            .channel(
                GuildCreateChannelOptions::new("chat")
                    .kind(ChannelType::GuildText)
                    .parent_id("1".to_owned()),
            )
            .verification_level(VerificationLevel::Low);

        let body = serde_json::to_value(GuildCreatePayload::from(options)).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Test",
                "verification_level": 1,
                "channels": [
                    { "id": "1", "name": "general", "type": 4 },
                    { "name": "chat", "type": 0, "parent_id": "1" }
                ]
            })
        );
    }

    #[test]
    fn raw_roles_pass_through() {
        let raw = GuildCreateRolePayload::default()
            .id("0".to_owned())
            .permissions("8".to_owned());
        let options = GuildCreateOptions::new("Test").role(raw.clone());

        let body = GuildCreatePayload::from(options);
        assert_eq!(body.roles, Some(vec![raw]));
    }

    #[test]
    fn empty_lists_are_sent() {
        let options = GuildCreateOptions::new("Test").roles(Vec::new());

        let body = serde_json::to_value(GuildCreatePayload::from(options)).unwrap();
        assert_eq!(body, json!({ "name": "Test", "roles": [] }));

        let body = serde_json::to_value(GuildCreatePayload::from(GuildCreateOptions::new("Test")))
            .unwrap();
        assert_eq!(body, json!({ "name": "Test" }));
    }
}
