use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub http_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            backend_url: env::var("CALCULADORA_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            http_timeout_ms: env::var("HTTP_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
        }
    }
}
