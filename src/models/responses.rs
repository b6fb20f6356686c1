use serde::{Deserialize, Serialize};
use crate::models::domain::{Platform, ScoredProperty, Tone};

/// Response for the generate reply endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateReplyResponse {
    #[serde(rename = "generationId")]
    pub generation_id: String,
    pub reply: String,
    pub matches: Vec<ScoredProperty>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    pub tone: Tone,
    pub platform: Platform,
}

/// Response for the voice script endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceScriptResponse {
    pub script: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "voiceEnabled")]
    pub voice_enabled: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
