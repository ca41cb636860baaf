use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

const BIND_ADDR_ENV: &str = "STOREFRONT_BIND_ADDR";

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl ApiConfig {
    /// Read `STOREFRONT_BIND_ADDR`; unset or invalid values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = match lookup(BIND_ADDR_ENV) {
            Some(raw) => match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => addr,
                Err(e) => {
                    tracing::warn!(key = BIND_ADDR_ENV, value = %raw, "ignoring invalid bind address: {e}");
                    default_bind_addr()
                }
            },
            None => default_bind_addr(),
        };

        Self { bind_addr }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}
