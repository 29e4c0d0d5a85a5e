use crate::ai::local::LocalAI;
use crate::ai::CompletionClient;
use crate::config::Config;

/// Which path produced the last answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    Remote,
    Local,
}

impl ResponseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseSource::Remote => "Remote",
            ResponseSource::Local => "Local",
        }
    }
}

/// Chat widget logic: optional remote completion, local rules as the final answer.
pub struct PortfolioAgent {
    config: Config,
    completion_client: Option<CompletionClient>,
    current_source: ResponseSource,
}

impl PortfolioAgent {
    pub fn new(config: Config) -> Self {
        let completion_client = if config.use_completion {
            config.completion_api_key.as_ref().and_then(|key| {
                if key.is_empty() {
                    None
                } else {
                    Some(
                        CompletionClient::new(
                            key.clone(),
                            Some(config.completion_base_url.clone()),
                            Some(config.completion_model.clone()),
                            Some(config.completion_timeout),
                        )
                        .with_system_prompt(config.system_prompt.clone()),
                    )
                }
            })
        } else {
            None
        };

        match &completion_client {
            Some(client) => log::info!("✓ Remote completion enabled ({})", client.model()),
            None => log::info!("Remote completion disabled, local rules only"),
        }

        Self {
            config,
            completion_client,
            current_source: ResponseSource::Local,
        }
    }

    /// Blank input is rejected with `None`: nothing to render.
    pub async fn get_response(&mut self, user_input: &str) -> Option<String> {
        let text = user_input.trim();
        if text.is_empty() {
            return None;
        }

        Some(self.get_ai_response(text).await)
    }

    async fn get_ai_response(&mut self, user_input: &str) -> String {
        // Remote first, local rules always have the last word
        if let Some(client) = &self.completion_client {
            match client.complete(user_input).await {
                Ok(response) => {
                    self.current_source = ResponseSource::Remote;
                    log::debug!("📡 Answered by remote completion");
                    return response;
                }
                Err(e) => {
                    log::warn!("⚠️ Augmentation unavailable: {}", e);
                }
            }
        }

        self.current_source = ResponseSource::Local;
        log::debug!("📡 Answered by local rules");
        LocalAI::get_response(user_input)
    }

    pub fn current_source(&self) -> ResponseSource {
        self.current_source
    }

    pub fn assistant_name(&self) -> &str {
        &self.config.assistant_name
    }

    pub fn has_remote(&self) -> bool {
        self.completion_client.is_some()
    }
}
