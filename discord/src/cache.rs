use std::{collections::HashMap, fmt, hash::Hash, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

/// A keyed store for raw payloads.
#[async_trait]
pub trait Cache<K, V>: Sync
where
    K: Send + Sync + 'static,
    V: Send + 'static,
{
    async fn set(&self, key: K, value: V);
    async fn get(&self, key: &K) -> Option<V>;
    async fn remove(&self, key: &K) -> Option<V>;
}

/// In-memory [`Cache`]. Clones share the same map and every access goes
/// through a single lock.
pub struct MemoryCache<K, V> {
    entries: Arc<Mutex<HashMap<K, V>>>,
}

impl<K, V> Clone for MemoryCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K, V> Default for MemoryCache<K, V> {
    fn default() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<K, V> fmt::Debug for MemoryCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCache").finish_non_exhaustive()
    }
}

impl<K, V> MemoryCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl<K, V> Cache<K, V> for MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn set(&self, key: K, value: V) {
        self.entries.lock().await.insert(key, value);
    }

    async fn get(&self, key: &K) -> Option<V> {
        self.entries.lock().await.get(key).cloned()
    }

    async fn remove(&self, key: &K) -> Option<V> {
        self.entries.lock().await.remove(key)
    }
}
