use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3333;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL not set")]
    MissingDatabaseUrl,
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub database_url: String,
    pub pool_max_size: u32,
    /// 为空时允许任意来源
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "HOST",
                value: host.clone(),
            })?;

        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let pool_max_size = match lookup("DB_POOL_MAX_SIZE") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DB_POOL_MAX_SIZE",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_POOL_MAX_SIZE,
        };

        let allowed_origins: Vec<String> = lookup("ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            addr,
            database_url,
            pool_max_size,
            allowed_origins,
        })
    }
}

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info,axum=info";
const DEFAULT_LOG_DIR: &str = "./logs";

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// EnvFilter 指令，来自 RUST_LOG
    pub filter: String,
    /// 为 None 时只输出到控制台
    pub file_dir: Option<String>,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let filter = lookup("RUST_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let to_file = lookup("LOG_TO_FILE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);
        let file_dir = to_file.then(|| {
            lookup("LOG_DIR")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string())
        });

        Self { filter, file_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_to_local_port_3333() {
        let cfg = load(&[("DATABASE_URL", "postgres://localhost/carteira")]).unwrap();
        assert_eq!(cfg.addr, "127.0.0.1:3333".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.pool_max_size, DEFAULT_POOL_MAX_SIZE);
        assert!(cfg.allowed_origins.is_empty());
    }

    #[test]
    fn reads_overrides() {
        let cfg = load(&[
            ("DATABASE_URL", "postgres://db/carteira"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DB_POOL_MAX_SIZE", "4"),
            ("ALLOWED_ORIGINS", "http://localhost:3000, ,http://127.0.0.1:3000"),
        ])
        .unwrap();
        assert_eq!(cfg.addr.port(), 8080);
        assert_eq!(cfg.pool_max_size, 4);
        assert_eq!(
            cfg.allowed_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }

    #[test]
    fn requires_database_url() {
        assert!(matches!(load(&[]), Err(ConfigError::MissingDatabaseUrl)));
    }

    #[test]
    fn rejects_bad_port_and_pool_size() {
        assert!(matches!(
            load(&[("DATABASE_URL", "postgres://x"), ("PORT", "http")]),
            Err(ConfigError::Invalid { name: "PORT", .. })
        ));
        assert!(matches!(
            load(&[("DATABASE_URL", "postgres://x"), ("DB_POOL_MAX_SIZE", "0")]),
            Err(ConfigError::Invalid { name: "DB_POOL_MAX_SIZE", .. })
        ));
    }

    fn load_logging(vars: &[(&str, &str)]) -> LoggingConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LoggingConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn logging_defaults_to_console_only() {
        let cfg = load_logging(&[]);
        assert_eq!(cfg.filter, DEFAULT_LOG_FILTER);
        assert_eq!(cfg.file_dir, None);
    }

    #[test]
    fn logging_file_output_uses_log_dir() {
        let cfg = load_logging(&[("LOG_TO_FILE", "TRUE"), ("LOG_DIR", "/var/log/carteira")]);
        assert_eq!(cfg.file_dir.as_deref(), Some("/var/log/carteira"));

        let cfg = load_logging(&[("LOG_TO_FILE", "1")]);
        assert_eq!(cfg.file_dir.as_deref(), Some(DEFAULT_LOG_DIR));
    }

    #[test]
    fn logging_ignores_log_dir_without_flag() {
        let cfg = load_logging(&[
            ("LOG_TO_FILE", "false"),
            ("LOG_DIR", "/tmp/x"),
            ("RUST_LOG", "debug"),
        ]);
        assert_eq!(cfg.file_dir, None);
        assert_eq!(cfg.filter, "debug");
    }
}
