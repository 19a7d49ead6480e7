// WHY: Plain configuration struct so the server can be built from CLI flags or tests alike

use std::net::SocketAddr;

/// Default listen address for `serve`
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Default cap on the `content` string accepted by the HTTP boundary (1 MiB)
pub const DEFAULT_MAX_CONTENT_BYTES: usize = 1024 * 1024;

/// Configuration for the HTTP service
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub bind_addr: SocketAddr,
    /// Largest `content` accepted before the extractor runs
    pub max_content_bytes: usize,
}

impl ServerConfig {
    /// Body size limit for the request layer
    /// WHY: JSON escaping can spend up to six bytes (`\uXXXX`) per input byte
    pub fn max_body_bytes(&self) -> usize {
        self.max_content_bytes.saturating_mul(6).saturating_add(1024)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_content_bytes: DEFAULT_MAX_CONTENT_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_bind_constant() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_content_bytes, DEFAULT_MAX_CONTENT_BYTES);
    }

    #[test]
    fn test_body_limit_never_overflows() {
        let config = ServerConfig {
            max_content_bytes: usize::MAX,
            ..ServerConfig::default()
        };
        assert_eq!(config.max_body_bytes(), usize::MAX);
    }
}
