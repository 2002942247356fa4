//! Server Settings
//!
//! Read from the process environment (after `.env` is loaded).

use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose;
use std::net::SocketAddr;
use std::time::Duration;
use todos::TodoConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300;

pub struct Settings {
    pub bind_addr: SocketAddr,
    /// How often expired sessions are swept
    pub cleanup_interval: Duration,
    pub todo: TodoConfig,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `development` allows a random session secret and insecure cookies
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address")?;

        let cleanup_interval = Duration::from_secs(
            parse_or("SESSION_CLEANUP_INTERVAL_SECS", &lookup, DEFAULT_CLEANUP_INTERVAL_SECS)?
                .max(1),
        );

        let mut todo = if development {
            TodoConfig::development()
        } else {
            TodoConfig::default()
        };

        match lookup("SESSION_SECRET") {
            Some(secret_b64) => todo.session_secret = decode_secret(&secret_b64)?,
            None if development => {}
            None => bail!("SESSION_SECRET must be set in production"),
        }

        if let Some(pepper) = lookup("PASSWORD_PEPPER").filter(|p| !p.is_empty()) {
            todo.password_pepper = Some(pepper.into_bytes());
        }

        todo.session_ttl = Duration::from_secs(parse_or(
            "SESSION_TTL_SECS",
            &lookup,
            todo.session_ttl.as_secs(),
        )?);

        todo.cookie_secure = parse_or("COOKIE_SECURE", &lookup, todo.cookie_secure)?;

        Ok(Self {
            bind_addr,
            cleanup_interval,
            todo,
        })
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = Engine::decode(&general_purpose::STANDARD, secret_b64.trim())
        .context("SESSION_SECRET must be base64")?;

    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes, got {}", bytes.len()))
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}
