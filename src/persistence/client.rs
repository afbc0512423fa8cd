//! HTTP gateway for the remote character collection
//!
//! `GET` returns `{"body": [Character, ...]}`; `POST` replaces the whole
//! collection with a JSON array. Failures are logged and degrade to a safe
//! default: an empty roster on load, no change on save. Nothing is retried.

use crate::core::config::SheetConfig;
use crate::core::error::{Result, SheetError};
use crate::sheet::Character;
use reqwest::Client;
use serde::Deserialize;

/// Load/save client for one collection endpoint
pub struct CharacterGateway {
    client: Client,
    endpoint: String,
}

impl CharacterGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &SheetConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the collection, surfacing any failure
    ///
    /// A response whose `body` is missing or not an array is an empty
    /// collection rather than an error. Malformed entries are skipped and
    /// negative scores are raised to 0.
    pub async fn try_load(&self) -> Result<Vec<Character>> {
        let response = self.client.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SheetError::Transport(format!(
                "GET {} returned {}: {}",
                self.endpoint, status, error_text
            )));
        }

        let text = response.text().await?;
        let envelope: LoadEnvelope = serde_json::from_str(&text)?;
        tracing::debug!("Fetched data: {}", text);

        match envelope.body {
            serde_json::Value::Array(items) => Ok(parse_characters(items)),
            other => {
                tracing::warn!(
                    "Response body is not an array ({}), using empty roster",
                    kind(&other)
                );
                Ok(Vec::new())
            }
        }
    }

    /// Fetch the collection, falling back to empty on any failure
    pub async fn load(&self) -> Vec<Character> {
        match self.try_load().await {
            Ok(characters) => {
                tracing::info!("Loaded {} characters from {}", characters.len(), self.endpoint);
                characters
            }
            Err(e) => {
                tracing::error!("Error fetching characters: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the remote collection, surfacing any failure
    pub async fn try_save(&self, characters: &[Character]) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(characters)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SheetError::Transport(format!(
                "Failed to save characters: {} {}",
                status, error_text
            )));
        }

        Ok(())
    }

    /// Replace the remote collection; returns whether it was saved
    pub async fn save(&self, characters: &[Character]) -> bool {
        match self.try_save(characters).await {
            Ok(()) => {
                tracing::info!("Saved {} characters", characters.len());
                true
            }
            Err(e) => {
                tracing::error!("Error saving characters: {}", e);
                false
            }
        }
    }
}

#[derive(Deserialize)]
struct LoadEnvelope {
    #[serde(default)]
    body: serde_json::Value,
}

/// Decode each stored entry on its own so one bad record doesn't drop the rest
fn parse_characters(items: Vec<serde_json::Value>) -> Vec<Character> {
    let mut characters = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Character>(item) {
            Ok(mut character) => {
                let clamped = character.attributes.clamp_negative();
                if clamped > 0 {
                    tracing::warn!(
                        "Stored character {}: raised {} negative scores to 0",
                        i + 1,
                        clamped
                    );
                }
                characters.push(character);
            }
            Err(e) => tracing::warn!("Skipping stored character {}: {}", i + 1, e),
        }
    }
    characters
}

fn kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
