// Service exports
pub mod elevenlabs;

pub use elevenlabs::{ElevenLabsClient, SpeechError, VoiceSettings};
