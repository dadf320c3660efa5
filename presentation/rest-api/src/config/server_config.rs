use super::error::ConfigError;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ip = lookup("SERVICE_IP").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("SERVICE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_read_ip_and_port() {
        let config = ServerConfig::from_lookup(|key| match key {
            "SERVICE_IP" => Some("0.0.0.0".to_string()),
            "SERVICE_PORT" => Some("3000".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn should_reject_non_numeric_port() {
        let result = ServerConfig::from_lookup(|key| {
            (key == "SERVICE_PORT").then(|| "eighty".to_string())
        });

        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }
}
