// config.rs
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_dir: String,
    pub draft_ttl_hours: i64,
}

impl Config {
    pub fn init() -> Config {
        let storage_dir = std::env::var("STORAGE_DIR")
            .unwrap_or_else(|_| ".studynest".to_string());
        let draft_ttl_hours = std::env::var("DRAFT_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(24);

        Config {
            storage_dir,
            draft_ttl_hours,
        }
    }
}
