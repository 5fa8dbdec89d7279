use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::{
    Res,
    types::{ServiceCredential, TokenResponse},
};

/// Seconds subtracted from the server-declared expiry before storing it.
/// Guards against the window between checking the cache and using the token.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// Performs the service-level credential exchange against the platform's
/// token endpoint. Injected into [`CredentialCache`] so tests can substitute
/// a fake exchange.
#[async_trait]
pub trait CredentialExchanger: Send + Sync {
    async fn exchange(&self) -> Res<TokenResponse>;
}

pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Process-wide cache for the single shared service credential.
///
/// Exactly one instance exists per service process, shared across all
/// concurrent resolution requests. The credential is served from memory while
/// the recorded expiry lies in the future and refreshed through the injected
/// exchanger otherwise.
///
/// Concurrent callers that observe an expired cache may each trigger a
/// refresh; the exchange runs without the lock held and the results overwrite
/// each other idempotently. The token endpoint is side-effect-free from the
/// caller's perspective, so redundant exchanges are tolerated instead of
/// serialized.
pub struct CredentialCache {
    credential: Mutex<Option<ServiceCredential>>,
    exchanger: Box<dyn CredentialExchanger>,
    clock: Clock,
}

impl CredentialCache {
    pub fn new(exchanger: Box<dyn CredentialExchanger>) -> Self {
        Self::with_clock(exchanger, Box::new(Utc::now))
    }

    /// Like [`CredentialCache::new`] but with an injected time source.
    /// Production code uses `Utc::now`; tests pass a controllable clock.
    pub fn with_clock(exchanger: Box<dyn CredentialExchanger>, clock: Clock) -> Self {
        CredentialCache {
            credential: Mutex::new(None),
            exchanger,
            clock,
        }
    }

    /// Returns a valid access token, refreshing the cached credential first
    /// if it is missing or expired.
    ///
    /// Within the cached window this performs no network call. On failure the
    /// error is propagated and no stale or partial value is cached.
    pub async fn get(&self) -> Res<String> {
        {
            let credential = self.credential.lock().await;
            if let Some(credential) = credential.as_ref() {
                if (self.clock)() < credential.expires_at {
                    return Ok(credential.token.clone());
                }
            }
        }

        self.force_refresh().await
    }

    /// Exchanges a fresh credential unconditionally and stores it.
    ///
    /// The expiry instant is recorded [`EXPIRY_MARGIN_SECS`] before the
    /// server-declared one.
    pub async fn force_refresh(&self) -> Res<String> {
        // The lock is not held across the exchange; concurrent refreshes
        // overwrite each other, last writer wins.
        let response = self.exchanger.exchange().await?;

        let expires_at =
            (self.clock)() + Duration::seconds(response.expires_in - EXPIRY_MARGIN_SECS);
        let token = response.access_token;

        let mut credential = self.credential.lock().await;
        *credential = Some(ServiceCredential {
            token: token.clone(),
            expires_at,
        });

        Ok(token)
    }
}
