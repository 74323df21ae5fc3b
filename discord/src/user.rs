use serde::{Deserialize, Serialize};

use super::resource::Snowflake;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserPayload {
    pub id: Snowflake<User>,
    pub username: String,
    #[serde(default)]
    pub discriminator: Option<String>,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Snowflake<User>,
    pub username: String,
    pub discriminator: Option<String>,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
    pub bot: bool,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        Self {
            id: payload.id,
            username: payload.username,
            discriminator: payload.discriminator,
            global_name: payload.global_name,
            avatar: payload.avatar,
            bot: payload.bot.unwrap_or(false),
        }
    }
}

impl User {
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}

impl Snowflake<User> {
    pub fn mention(self) -> String {
        format!("<@{}>", self)
    }
}
