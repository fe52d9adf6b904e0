use anyhow::{Context, Result, bail};
use std::{fmt::Display, str::FromStr};

use super::{
    config_model::{AdminAccount, BackendServer, DotEnvyConfig, Session},
    stage::Stage,
};

/// Minimum signing-key length accepted by `cookie::Key`.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let defaults = DotEnvyConfig::default();

    let backend_server = BackendServer {
        port: parse_or("SERVER_PORT_BACKEND", defaults.backend_server.port)?,
        body_limit: parse_or("SERVER_BODY_LIMIT", defaults.backend_server.body_limit)?,
        timeout: parse_or("SERVER_TIMEOUT", defaults.backend_server.timeout)?,
    };

    let secret = std::env::var("SESSION_SECRET")
        .ok()
        .filter(|secret| !secret.is_empty());
    if let Some(secret) = secret.as_deref() {
        if secret.len() < MIN_SESSION_SECRET_LEN {
            bail!(
                "SESSION_SECRET must be at least {} bytes",
                MIN_SESSION_SECRET_LEN
            );
        }
    }

    let session = Session {
        secret,
        ttl_seconds: parse_or("SESSION_TTL_SECONDS", defaults.session.ttl_seconds)?,
    };

    let admin = AdminAccount {
        username: std::env::var("ADMIN_USERNAME").unwrap_or(defaults.admin.username),
        password: std::env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin.password),
    };

    Ok(DotEnvyConfig {
        stage: get_stage(),
        backend_server,
        session,
        admin,
    })
}

pub fn get_stage() -> Stage {
    dotenvy::dotenv().ok();

    let stage_str = std::env::var("STAGE").unwrap_or("".to_string());
    Stage::try_from(&stage_str).unwrap_or_default()
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|err| anyhow::anyhow!("{}", err))
            .with_context(|| format!("{} is invalid", key)),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_when_unset() {
        let value: u16 = parse_or("SRIYAN_TEST_UNSET_PORT", 5000).unwrap();
        assert_eq!(value, 5000);
    }

    #[test]
    fn parse_or_rejects_garbage() {
        unsafe {
            std::env::set_var("SRIYAN_TEST_BAD_TIMEOUT", "thirty");
        }
        let result: Result<u64> = parse_or("SRIYAN_TEST_BAD_TIMEOUT", 30);
        assert!(result.is_err());
    }

    #[test]
    fn stage_parsing_is_lenient_about_case() {
        assert_eq!(Stage::try_from(&"PROD".to_string()).unwrap(), Stage::Production);
        assert!(Stage::try_from(&"".to_string()).is_err());
    }
}
