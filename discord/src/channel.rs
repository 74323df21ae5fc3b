use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::resource::Snowflake;

#[derive(Debug, Serialize_repr, Deserialize_repr, PartialEq, Eq, Default, Copy, Clone)]
#[repr(u8)]
pub enum ChannelType {
    #[default]
    GuildText = 0,
    Dm = 1,
    GuildVoice = 2,
    GroupDm = 3,
    GuildCategory = 4,
    GuildAnnouncement = 5,
    AnnouncementThread = 10,
    PublicThread = 11,
    PrivateThread = 12,
    GuildStageVoice = 13,
    GuildDirectory = 14,
    GuildForum = 15,
    GuildMedia = 16,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChannelPayload {
    pub id: Snowflake<GuildChannel>,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Snowflake<GuildChannel>>,
    #[serde(default)]
    pub position: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuildChannel {
    pub id: Snowflake<GuildChannel>,
    pub name: String,
    pub kind: ChannelType,
    pub parent_id: Option<Snowflake<GuildChannel>>,
    pub position: Option<i64>,
}

impl From<ChannelPayload> for GuildChannel {
    fn from(payload: ChannelPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name.unwrap_or_default(),
            kind: payload.kind,
            parent_id: payload.parent_id,
            position: payload.position,
        }
    }
}

impl Snowflake<GuildChannel> {
    pub fn mention(self) -> String {
        format!("<#{}>", self)
    }
}
