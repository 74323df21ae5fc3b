//! A small Discord REST client centred on guilds.
//!
//! [`manager::GuildManager`] maps the guild endpoints onto typed calls and
//! keeps fetched guilds in a shared [`cache::Cache`]. Transport, caching and
//! image uploads are behind the [`request::Client`], [`cache::Cache`] and
//! [`asset::AssetResolver`] traits so each can be swapped out.

pub mod asset;
pub mod cache;
pub mod manager;
pub mod request;
pub mod resource;

pub mod channel;
pub mod emoji;
pub mod guild;
pub mod member;
pub mod role;
pub mod user;

#[cfg(test)]
mod testing;

pub use manager::{Edited, GuildManager};
pub use request::{Bot, RequestError, Result};
