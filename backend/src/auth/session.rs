use std::collections::HashMap;

use anyhow::{Result, anyhow};
use axum::http::HeaderMap;
use axum_extra::extract::cookie::SignedCookieJar;
use cookie::{Cookie, Key, SameSite};
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use sriyan_core::domain::value_objects::users::UserDto;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::config_model::DotEnvyConfig;

pub const SESSION_COOKIE: &str = "sid";

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSession {
    pub session_id: Uuid,
    pub user: UserDto,
}

struct SessionRecord {
    user: UserDto,
    expires_at: DateTime<Utc>,
}

/// Server-side sessions addressed by a signed `sid` cookie.
pub struct SessionManager {
    key: Key,
    ttl: Duration,
    secure: bool,
    sessions: RwLock<HashMap<Uuid, SessionRecord>>,
}

impl SessionManager {
    pub fn new(key: Key, ttl: Duration, secure: bool) -> Self {
        Self {
            key,
            ttl,
            secure,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &DotEnvyConfig) -> Result<Self> {
        let key = match config.session.secret.as_deref() {
            Some(secret) => Key::try_from(secret.as_bytes())
                .map_err(|err| anyhow!("SESSION_SECRET is unusable: {}", err))?,
            None => {
                warn!("session: SESSION_SECRET not set, sessions will not survive a restart");
                Key::generate()
            }
        };
        let ttl_seconds = i64::try_from(config.session.ttl_seconds)
            .map_err(|_| anyhow!("SESSION_TTL_SECONDS is out of range"))?;

        Ok(Self::new(
            key,
            Duration::seconds(ttl_seconds),
            config.stage.is_production(),
        ))
    }

    /// Opens a session for `user` and returns the jar carrying its cookie.
    /// Expired sessions are swept on the way in.
    pub fn start(&self, user: UserDto) -> SignedCookieJar {
        let session_id = Uuid::new_v4();
        let now = Utc::now();
        let expires_at = now + self.ttl;

        {
            let mut sessions = self.sessions.write();
            let before = sessions.len();
            sessions.retain(|_, record| record.expires_at > now);
            let swept = before - sessions.len();
            if swept > 0 {
                debug!(swept, "session: expired sessions reclaimed");
            }
            sessions.insert(session_id, SessionRecord { user, expires_at });
        }
        debug!(%session_id, "session: started");

        let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build();

        SignedCookieJar::new(self.key.clone()).add(cookie)
    }

    /// Resolves the session named by the request's cookie. Expired sessions are evicted.
    pub fn current(&self, headers: &HeaderMap) -> Option<ActiveSession> {
        let session_id = self.session_id(headers)?;

        {
            let sessions = self.sessions.read();
            let record = sessions.get(&session_id)?;
            if record.expires_at > Utc::now() {
                return Some(ActiveSession {
                    session_id,
                    user: record.user.clone(),
                });
            }
        }

        debug!(%session_id, "session: expired");
        self.sessions.write().remove(&session_id);
        None
    }

    /// Destroys the request's session, if any, and returns a jar that clears the cookie.
    pub fn end(&self, headers: &HeaderMap) -> SignedCookieJar {
        if let Some(session_id) = self.session_id(headers) {
            self.sessions.write().remove(&session_id);
            debug!(%session_id, "session: destroyed");
        }

        SignedCookieJar::from_headers(headers, self.key.clone())
            .remove(Cookie::build(SESSION_COOKIE).path("/"))
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.read().len()
    }

    fn session_id(&self, headers: &HeaderMap) -> Option<Uuid> {
        let jar = SignedCookieJar::from_headers(headers, self.key.clone());
        let cookie = jar.get(SESSION_COOKIE)?;
        Uuid::parse_str(cookie.value()).ok()
    }
}
