use tracing::debug;

use super::{
    asset::{AssetResolver, FetchAssets},
    cache::{Cache, MemoryCache},
    guild::{
        create_request, Guild, GuildCreateOptions, GuildCreatePayload, GuildModifyOptions,
        GuildModifyPayload, GuildPayload, GuildPreview, GuildPreviewPayload, GuildResource,
    },
    member::MembersManager,
    request::{Bot, Client, Result},
    resource::Snowflake,
};

pub type GuildCache = MemoryCache<Snowflake<Guild>, GuildPayload>;

/// What [`GuildManager::edit`] hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum Edited {
    Guild(Guild),
    Raw(GuildPayload),
}

impl Edited {
    pub fn into_guild(self) -> Guild {
        match self {
            Edited::Guild(guild) => guild,
            Edited::Raw(payload) => payload.into(),
        }
    }

    pub fn into_raw(self) -> Option<GuildPayload> {
        match self {
            Edited::Guild(_) => None,
            Edited::Raw(payload) => Some(payload),
        }
    }
}

/// Guild endpoints on top of a [`Client`], backed by a shared payload cache.
pub struct GuildManager<C = Bot, S = GuildCache, A = FetchAssets> {
    client: C,
    cache: S,
    assets: A,
}

impl GuildManager {
    pub fn new(client: Bot) -> Self {
        Self::with_parts(client, GuildCache::new(), FetchAssets)
    }
}

impl<C, S, A> GuildManager<C, S, A>
where
    C: Client,
    S: Cache<Snowflake<Guild>, GuildPayload>,
    A: AssetResolver,
{
    pub fn with_parts(client: C, cache: S, assets: A) -> Self {
        Self {
            client,
            cache,
            assets,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn cache(&self) -> &S {
        &self.cache
    }

    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// Looks a guild up in the cache without touching the network.
    pub async fn get(&self, guild: impl GuildResource) -> Option<Guild> {
        self.cache.get(&guild.endpoint()).await.map(Guild::from)
    }

    pub async fn fetch(&self, guild: impl GuildResource) -> Result<Guild> {
        let id = guild.endpoint();
        let mut payload = self.client.request(id.get_request()).await?;
        self.cache.set(id, payload.clone()).await;

        let members = payload.members.take();
        let mut guild = Guild::from(payload);
        if let Some(members) = members {
            guild.members = Some(MembersManager::from_payload(guild.id, members));
        }

        debug!(
            guild = %id,
            members = guild.members.as_ref().map_or(0, MembersManager::len),
            "fetched guild"
        );
        Ok(guild)
    }

    /// Creates a new guild owned by the bot. The result is not cached.
    pub async fn create(&self, mut options: GuildCreateOptions) -> Result<Guild> {
        if let Some(icon) = options.icon.take() {
            options.icon = Some(self.assets.inline(icon).await?);
        }

        let body = GuildCreatePayload::from(options);
        let payload = self.client.request(create_request(&body)?).await?;

        debug!(guild = %payload.id, "created guild");
        Ok(Guild::from(payload))
    }

    pub async fn preview(&self, guild: impl GuildResource) -> Result<GuildPreview> {
        let payload: GuildPreviewPayload = self.client.request(guild.preview_request()).await?;
        Ok(payload.into())
    }

    async fn inline_image(&self, image: Option<Option<String>>) -> Result<Option<Option<String>>> {
        match image {
            Some(Some(reference)) => Ok(Some(Some(self.assets.inline(reference).await?))),
            image => Ok(image),
        }
    }

    async fn patch(
        &self,
        guild: impl GuildResource,
        mut options: GuildModifyOptions,
    ) -> Result<GuildPayload> {
        options.icon = self.inline_image(options.icon.take()).await?;
        options.splash = self.inline_image(options.splash.take()).await?;
        options.banner = self.inline_image(options.banner.take()).await?;

        let id = guild.endpoint();
        let body = GuildModifyPayload::from(options);
        let payload = self.client.request(id.patch_request(&body)?).await?;

        debug!(guild = %id, "edited guild");
        Ok(payload)
    }

    /// Applies `options` to a guild. With `as_raw` the payload is returned as
    /// the api sent it, otherwise it is turned into a [`Guild`]. Neither form
    /// is written to the cache.
    pub async fn edit(
        &self,
        guild: impl GuildResource,
        options: GuildModifyOptions,
        as_raw: bool,
    ) -> Result<Edited> {
        let payload = self.patch(guild, options).await?;
        if as_raw {
            Ok(Edited::Raw(payload))
        } else {
            Ok(Edited::Guild(payload.into()))
        }
    }

    pub async fn edit_guild(
        &self,
        guild: impl GuildResource,
        options: GuildModifyOptions,
    ) -> Result<Guild> {
        self.edit(guild, options, false).await.map(Edited::into_guild)
    }

    pub async fn edit_raw(
        &self,
        guild: impl GuildResource,
        options: GuildModifyOptions,
    ) -> Result<GuildPayload> {
        self.patch(guild, options).await
    }

    /// Deletes a guild owned by the bot and returns what the cache held for it.
    ///
    /// `None` means the guild was not cached, not that the deletion failed.
    /// The cache entry itself is left for the caller (or the gateway) to evict.
    pub async fn delete(&self, guild: impl GuildResource) -> Result<Option<Guild>> {
        let id = guild.endpoint();
        let old = self.get(id).await;

        self.client.request(id.delete_request()).await?;

        debug!(guild = %id, cached = old.is_some(), "deleted guild");
        Ok(old)
    }
}
