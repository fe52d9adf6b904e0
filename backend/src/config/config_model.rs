use super::stage::Stage;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub stage: Stage,
    pub backend_server: BackendServer,
    pub session: Session,
    pub admin: AdminAccount,
}

#[derive(Debug, Clone)]
pub struct BackendServer {
    pub port: u16,
    /// MiB
    pub body_limit: u64,
    /// Seconds
    pub timeout: u64,
}

#[derive(Clone)]
pub struct Session {
    /// Signing key material for the session cookie; a random key is generated when absent.
    pub secret: Option<String>,
    pub ttl_seconds: u64,
}

// Keeps the secret out of logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

/// Account created by the bootstrap loader when missing.
#[derive(Clone)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for DotEnvyConfig {
    fn default() -> Self {
        Self {
            stage: Stage::Local,
            backend_server: BackendServer {
                port: 5000,
                body_limit: 10,
                timeout: 30,
            },
            session: Session {
                secret: None,
                ttl_seconds: 60 * 60 * 24,
            },
            admin: AdminAccount {
                username: "admin".to_string(),
                password: "password".to_string(),
            },
        }
    }
}
