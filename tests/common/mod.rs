#![allow(dead_code)]

use async_trait::async_trait;
use challenge_store::store::Backend;
use redis::RedisResult;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-memory stand-in for a Redis node that honors write-time TTLs.
///
/// Expired entries are dropped lazily on the next access, which is enough to
/// observe the store's delegated-expiration behavior without a live server.
pub struct FakeBackend {
    entries: Mutex<HashMap<String, Entry>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn live_value(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> RedisResult<()> {
        self.entries.lock().unwrap().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> RedisResult<Option<String>> {
        Ok(self.live_value(key))
    }

    async fn delete(&self, key: &str) -> RedisResult<u64> {
        let removed = self.entries.lock().unwrap().remove(key).is_some();
        Ok(removed as u64)
    }

    async fn exists(&self, key: &str) -> RedisResult<u64> {
        Ok(self.live_value(key).is_some() as u64)
    }
}
