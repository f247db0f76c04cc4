use std::collections::HashMap;
use std::time::{Duration, Instant};

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::Confirmation;

pub const FLASH_COOKIE: &str = "tabarruat_flash";
pub const DEFAULT_FLASH_TTL: Duration = Duration::from_secs(600);

/// One-shot hand-off of a confirmation from the submit redirect to the
/// success page. Each entry can be taken exactly once.
pub struct FlashStore {
    ttl: Duration,
    entries: Mutex<HashMap<Uuid, (Instant, Confirmation)>>,
}

impl FlashStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub async fn put(&self, confirmation: Confirmation) -> Uuid {
        let token = Uuid::new_v4();
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        entries.retain(|_, (stored_at, _)| now.duration_since(*stored_at) < self.ttl);
        entries.insert(token, (now, confirmation));
        token
    }

    pub async fn take(&self, token: Uuid) -> Option<Confirmation> {
        let (stored_at, confirmation) = self.entries.lock().await.remove(&token)?;
        (stored_at.elapsed() < self.ttl).then_some(confirmation)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for FlashStore {
    fn default() -> Self {
        Self::new(DEFAULT_FLASH_TTL)
    }
}

pub fn set_cookie(token: Uuid, ttl: Duration) -> String {
    format!(
        "{FLASH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        ttl.as_secs()
    )
}

pub fn clear_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Reads the flash token from the request cookies, ignoring malformed values.
pub fn token_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}
