use anyhow::{bail, Context};
use std::str::FromStr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_POOL_SIZE: u32 = 10;
const DEFAULT_STATIC_DIR: &str = "./public";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "Admin@123";

/// Administrator login, checked out of band instead of against the users table.
#[derive(Clone, Debug)]
pub struct AdminCredential {
    pub username: String,
    pub password: String,
}

impl AdminCredential {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for AdminCredential {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
    pub static_dir: String,
    pub admin: AdminCredential,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => url,
            _ => bail!("DATABASE_URL not found"),
        };

        let defaults = AdminCredential::default();
        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            pool_size: parse_var(&lookup, "DB_POOL_SIZE", DEFAULT_POOL_SIZE)?,
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            admin: AdminCredential {
                username: lookup("ADMIN_USERNAME").unwrap_or(defaults.username),
                password: lookup("ADMIN_PASSWORD").unwrap_or(defaults.password),
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("invalid {}: {:?}", key, value)),
        None => Ok(default),
    }
}
