#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use discord::{
    asset::{AssetError, AssetResolver},
    cache::MemoryCache,
    guild::{Guild, GuildPayload},
    request::{self, Client, RequestError},
    resource::Snowflake,
    GuildManager,
};
use isahc::http::{Method, StatusCode};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub uri: String,
    pub body: Option<Value>,
}

enum Response {
    Body(Value),
    Status(StatusCode),
}

/// Records every request and answers from a queue of canned responses.
#[derive(Clone, Default)]
pub struct MockClient {
    calls: Arc<Mutex<Vec<Call>>>,
    responses: Arc<Mutex<VecDeque<Response>>>,
}

impl MockClient {
    pub fn respond(&self, body: Value) {
        self.responses.lock().unwrap().push_back(Response::Body(body));
    }

    pub fn fail(&self, status: StatusCode) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Response::Status(status));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Client for MockClient {
    async fn execute(
        &self,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> request::Result<String> {
        self.calls.lock().unwrap().push(Call {
            method,
            uri: uri.to_owned(),
            body: body.map(|body| serde_json::from_str(body).unwrap()),
        });

        match self.responses.lock().unwrap().pop_front() {
            Some(Response::Body(body)) => Ok(body.to_string()),
            Some(Response::Status(status)) if status.is_server_error() => {
                Err(RequestError::ServerError(status))
            }
            Some(Response::Status(status)) => Err(RequestError::ClientError(status)),
            None => Ok("null".to_owned()),
        }
    }
}

/// Resolves every reference to a predictable inline string.
#[derive(Clone, Default)]
pub struct MockAssets {
    resolved: Arc<Mutex<Vec<String>>>,
    failing: bool,
}

impl MockAssets {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn inlined(reference: &str) -> String {
        format!("data:image/png;base64,{}", reference.len())
    }

    pub fn resolved(&self) -> Vec<String> {
        self.resolved.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetResolver for MockAssets {
    async fn resolve(&self, reference: &str) -> Result<String, AssetError> {
        self.resolved.lock().unwrap().push(reference.to_owned());
        if self.failing {
            Err(AssetError::Status(StatusCode::NOT_FOUND))
        } else {
            Ok(Self::inlined(reference))
        }
    }
}

pub type Manager = GuildManager<MockClient, MemoryCache<Snowflake<Guild>, GuildPayload>, MockAssets>;

pub fn manager() -> Manager {
    GuildManager::with_parts(MockClient::default(), MemoryCache::new(), MockAssets::default())
}

pub fn guild_json(id: &str) -> Value {
    serde_json::json!({
        "id": id,
        "name": "Mason's Test Server",
        "icon": null,
        "owner_id": "80351110224678912",
        "region": "us-east",
        "afk_channel_id": null,
        "afk_timeout": 300,
        "verification_level": 1,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [{
            "id": id,
            "name": "@everyone",
            "color": 0,
            "hoist": false,
            "position": 0,
            "permissions": "104324673",
            "managed": false,
            "mentionable": false
        }],
        "emojis": [],
        "features": [],
        "mfa_level": 0,
        "premium_tier": 0,
        "preferred_locale": "en-US"
    })
}
