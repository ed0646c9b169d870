use serde::{Deserialize, Serialize};

pub const DEFAULT_API_SERVER: &str = "https://10.42.34.79";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub api_server: String,
}

impl Settings {
    #[must_use]
    pub fn url_for(&self, api_path: &str) -> String {
        format!("{}/{}", self.api_server.trim_end_matches('/'), api_path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_server: String::from(DEFAULT_API_SERVER),
        }
    }
}
