use std::net::SocketAddr;

use gallery_core::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// サーバープロセスの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// 環境変数 BIND_ADDR から作成する（未設定なら 0.0.0.0:3000）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(std::env::var("BIND_ADDR").ok().as_deref())
    }

    pub fn parse(bind_addr: Option<&str>) -> Result<Self, ConfigError> {
        let raw = bind_addr
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BIND_ADDR);

        let bind_addr = raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw.to_string()))?;

        Ok(Self { bind_addr })
    }
}
