use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{
    guild::Guild,
    resource::Snowflake,
    role::Role,
    user::{User, UserPayload},
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MemberPayload {
    #[serde(default)]
    pub user: Option<UserPayload>,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub roles: Vec<Snowflake<Role>>,
    #[serde(default)]
    pub joined_at: Option<String>,
    #[serde(default)]
    pub premium_since: Option<String>,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub pending: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub user: User,
    pub nick: Option<String>,
    pub avatar: Option<String>,
    pub roles: Vec<Snowflake<Role>>,
    pub joined_at: Option<String>,
    pub premium_since: Option<String>,
    pub deaf: bool,
    pub mute: bool,
    pub pending: bool,
}

impl Member {
    /// Members sent without their user object can't be keyed and are dropped.
    pub fn from_payload(payload: MemberPayload) -> Option<Self> {
        let user = payload.user?;
        Some(Self {
            user: user.into(),
            nick: payload.nick,
            avatar: payload.avatar,
            roles: payload.roles,
            joined_at: payload.joined_at,
            premium_since: payload.premium_since,
            deaf: payload.deaf,
            mute: payload.mute,
            pending: payload.pending.unwrap_or(false),
        })
    }

    pub fn id(&self) -> Snowflake<User> {
        self.user.id
    }

    pub fn display_name(&self) -> &str {
        self.nick
            .as_deref()
            .unwrap_or_else(|| self.user.display_name())
    }
}

/// The members of a single guild, keyed by user id.
#[derive(Debug, Clone, PartialEq)]
pub struct MembersManager {
    guild: Snowflake<Guild>,
    members: HashMap<Snowflake<User>, Member>,
}

impl MembersManager {
    pub fn new(guild: Snowflake<Guild>) -> Self {
        Self {
            guild,
            members: HashMap::new(),
        }
    }

    pub fn from_payload(guild: Snowflake<Guild>, payload: Vec<MemberPayload>) -> Self {
        let mut manager = Self::new(guild);
        for member in payload {
            match Member::from_payload(member) {
                Some(member) => manager.insert(member),
                None => trace!(%guild, "skipping member without user"),
            }
        }
        manager
    }

    pub fn guild(&self) -> Snowflake<Guild> {
        self.guild
    }

    pub fn insert(&mut self, member: Member) {
        self.members.insert(member.id(), member);
    }

    pub fn get(&self, user: Snowflake<User>) -> Option<&Member> {
        self.members.get(&user)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }
}
