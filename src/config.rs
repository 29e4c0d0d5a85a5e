use std::env;
use std::time::Duration;

use crate::ai::completion::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Clone)]
pub struct Config {
    pub completion_api_key: Option<String>,
    pub use_completion: bool,
    pub completion_base_url: String,
    pub completion_model: String,
    pub completion_timeout: Duration,
    pub assistant_name: String,
    pub system_prompt: String,
}

impl Config {
    /// Local rules only, no environment lookup.
    pub fn local_only() -> Self {
        let assistant_name = "Mahad's AI".to_string();
        Self {
            completion_api_key: None,
            use_completion: false,
            completion_base_url: DEFAULT_BASE_URL.to_string(),
            completion_model: DEFAULT_MODEL.to_string(),
            completion_timeout: Duration::from_secs(15),
            system_prompt: default_system_prompt(&assistant_name),
            assistant_name,
        }
    }
}

fn default_system_prompt(assistant_name: &str) -> String {
    format!(
        "You are {}, the virtual assistant on Mahad Khan's portfolio website.\n\
        Mahad is a full-stack developer (React, Node.js, Tailwind) with 5+ years of experience.\n\
        Plans start at $499. Contact: WA +92 314 2253977, email khanmahad768@gmail.com.\n\
        Answer briefly and in a friendly, professional tone.",
        assistant_name
    )
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();

        let completion_api_key = env::var("COMPLETION_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let use_completion = env::var("USE_COMPLETION")
            .unwrap_or_else(|_| "false".to_string())
            .to_lowercase()
            == "true";

        let completion_base_url =
            env::var("COMPLETION_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let completion_model =
            env::var("COMPLETION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let completion_timeout = env::var("COMPLETION_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(15));

        // Remote completion needs both the flag and a key
        let use_completion_final = use_completion && completion_api_key.is_some();

        let local = Self::local_only();
        Self {
            completion_api_key,
            use_completion: use_completion_final,
            completion_base_url,
            completion_model,
            completion_timeout,
            ..local
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_only_disables_completion() {
        let config = Config::local_only();
        assert!(!config.use_completion);
        assert!(config.completion_api_key.is_none());
        assert!(config.system_prompt.contains(&config.assistant_name));
    }
}
