//! Prompt provider that answers without user interaction
//!
//! Useful for automation, testing, or CI environments.

use super::interface::{TextPromptConfig, TextPrompter};
use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// Automatic prompt provider that gives predefined responses
///
/// Prompts without a configured response fall back to the prompt's default,
/// then to an empty string. Every prompt shown is recorded.
#[derive(Debug, Default)]
pub struct AutomaticPrompter {
    text_responses: HashMap<String, String>,
    asked: RefCell<Vec<TextPromptConfig>>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined text response for a specific prompt
    pub fn with_text_response(mut self, prompt: &str, response: &str) -> Self {
        self.text_responses.insert(prompt.to_string(), response.to_string());
        self
    }

    /// Prompts shown so far, in order
    pub fn asked(&self) -> Vec<TextPromptConfig> {
        self.asked.borrow().clone()
    }
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        self.asked.borrow_mut().push(config.clone());
        let response = self
            .text_responses
            .get(&config.prompt)
            .cloned()
            .or_else(|| config.default.clone())
            .unwrap_or_default();
        log::debug!("Automatic response for '{}': '{}'", config.prompt, response);
        Ok(response)
    }
}
