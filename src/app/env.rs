use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub storage_path: Option<String>,

    pub replicate_api_url: Option<String>,
    pub replicate_poll_interval_secs: Option<u64>,
    pub replicate_timeout_secs: Option<u64>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(3000)
    }

    /// Where the key store lives on this device.
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(
            self.storage_path
                .as_deref()
                .unwrap_or("data/keys.json"),
        )
    }

    pub fn replicate_api_url(&self) -> &str {
        self.replicate_api_url
            .as_deref()
            .unwrap_or("https://api.replicate.com/v1")
            .trim_end_matches('/')
    }

    pub fn replicate_poll_interval_secs(&self) -> u64 {
        self.replicate_poll_interval_secs.unwrap_or(5)
    }

    pub fn replicate_timeout_secs(&self) -> u64 {
        self.replicate_timeout_secs.unwrap_or(600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let envy: Envy = envy::from_iter(Vec::<(String, String)>::new()).unwrap();

        assert_eq!(envy.app_env, "development");
        assert_eq!(envy.port(), 3000);
        assert_eq!(envy.storage_path(), PathBuf::from("data/keys.json"));
        assert_eq!(envy.replicate_api_url(), "https://api.replicate.com/v1");
        assert_eq!(envy.replicate_poll_interval_secs(), 5);
        assert_eq!(envy.replicate_timeout_secs(), 600);
    }

    #[test]
    fn reads_overrides_from_environment() {
        let envy: Envy = envy::from_iter(vec![
            ("APP_ENV".to_string(), "production".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("STORAGE_PATH".to_string(), "/tmp/reel/keys.json".to_string()),
            (
                "REPLICATE_API_URL".to_string(),
                "http://localhost:9000/v1/".to_string(),
            ),
        ])
        .unwrap();

        assert_eq!(envy.app_env, "production");
        assert_eq!(envy.port(), 8080);
        assert_eq!(envy.storage_path(), PathBuf::from("/tmp/reel/keys.json"));
        assert_eq!(envy.replicate_api_url(), "http://localhost:9000/v1");
    }
}
