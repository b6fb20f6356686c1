use reqwest::{header, Client};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Model used for every voice note
pub const MODEL_ID: &str = "eleven_multilingual_v2";

/// Default ElevenLabs API host
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Errors that can occur when synthesizing speech
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("ElevenLabs API key missing.")]
    MissingCredentials,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error (status {status}): {message}")]
    ApiError { status: u16, message: String },
}

/// Fixed voice tuning sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
    pub style: f64,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.8,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// ElevenLabs text-to-speech client
///
/// Each call is a single POST with no retry. Credentials are checked before
/// anything goes on the wire.
pub struct ElevenLabsClient {
    base_url: String,
    api_key: Option<String>,
    voice_id: Option<String>,
    client: Client,
}

impl ElevenLabsClient {
    /// Create a new ElevenLabs client
    pub fn new(base_url: String, api_key: Option<String>, voice_id: Option<String>) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            voice_id: voice_id.filter(|v| !v.trim().is_empty()),
            client,
        })
    }

    /// Whether both the API key and voice id are configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.voice_id.is_some()
    }

    /// Synthesize `text` and return the MPEG audio bytes
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let (api_key, voice_id) = match (&self.api_key, &self.voice_id) {
            (Some(key), Some(voice)) => (key, voice),
            _ => return Err(SpeechError::MissingCredentials),
        };

        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(voice_id)
        );

        tracing::debug!("Requesting speech for {} characters from: {}", text.chars().count(), url);

        let payload = SpeechRequest {
            text,
            model_id: MODEL_ID,
            voice_settings: VoiceSettings::default(),
        };

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "audio/mpeg")
            .header("xi-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Voice generation failed: {} - {}", status, body);
            return Err(SpeechError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let audio = response.bytes().await?;

        tracing::debug!("Received {} bytes of audio", audio.len());

        Ok(audio.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ElevenLabsClient::new(
            DEFAULT_BASE_URL.to_string(),
            Some("test_key".to_string()),
            Some("voice".to_string()),
        )
        .unwrap();

        assert_eq!(client.base_url, "https://api.elevenlabs.io");
        assert!(client.is_configured());
    }

    #[test]
    fn test_blank_credentials_are_missing() {
        let client = ElevenLabsClient::new(
            DEFAULT_BASE_URL.to_string(),
            Some("   ".to_string()),
            Some("voice".to_string()),
        )
        .unwrap();

        assert!(!client.is_configured());
    }

    #[test]
    fn test_request_body_shape() {
        let payload = SpeechRequest {
            text: "Hello",
            model_id: MODEL_ID,
            voice_settings: VoiceSettings::default(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model_id"], "eleven_multilingual_v2");
        assert_eq!(json["voice_settings"]["stability"], 0.5);
        assert_eq!(json["voice_settings"]["similarity_boost"], 0.8);
        assert_eq!(json["voice_settings"]["use_speaker_boost"], true);
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_before_request() {
        // unroutable host: any network attempt would error differently
        let client = ElevenLabsClient::new("http://127.0.0.1:9".to_string(), None, Some("voice".to_string())).unwrap();

        let err = client.synthesize("Hello").await.unwrap_err();
        assert!(matches!(err, SpeechError::MissingCredentials));
    }
}
