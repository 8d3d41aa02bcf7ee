use std::env;

use tracing::warn;

/// Listen address, from `HOST`/`PORT`. Defaults to all interfaces on 8000.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::parse(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn parse(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match port {
            None => 8000,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "PORT is not a valid port number, using 8000");
                8000
            }),
        };

        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
