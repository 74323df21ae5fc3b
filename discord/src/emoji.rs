use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{
    resource::Snowflake,
    role::Role,
    user::{User, UserPayload},
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EmojiPayload {
    pub id: Option<Snowflake<Emoji>>,
    pub name: Option<String>,
    #[serde(default)]
    pub roles: Vec<Snowflake<Role>>,
    #[serde(default)]
    pub user: Option<UserPayload>,
    #[serde(default)]
    pub require_colons: Option<bool>,
    #[serde(default)]
    pub managed: Option<bool>,
    #[serde(default)]
    pub animated: Option<bool>,
    #[serde(default)]
    pub available: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Emoji {
    pub id: Option<Snowflake<Emoji>>,
    pub name: Option<String>,
    pub roles: Vec<Snowflake<Role>>,
    pub user: Option<User>,
    pub require_colons: bool,
    pub managed: bool,
    pub animated: bool,
    pub available: bool,
}

impl From<EmojiPayload> for Emoji {
    fn from(payload: EmojiPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            roles: payload.roles,
            user: payload.user.map(User::from),
            require_colons: payload.require_colons.unwrap_or(true),
            managed: payload.managed.unwrap_or(false),
            animated: payload.animated.unwrap_or(false),
            available: payload.available.unwrap_or(true),
        }
    }
}

impl Display for Emoji {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("_");
        match self.id {
            Some(id) if self.animated => write!(f, "<a:{}:{}>", name, id),
            Some(id) => write!(f, "<:{}:{}>", name, id),
            // unicode emoji
            None => f.write_str(name),
        }
    }
}
