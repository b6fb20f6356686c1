// ElevenLabs client tests against a mock server

use housr_match::services::{ElevenLabsClient, SpeechError};
use mockito::Matcher;

const AUDIO: &[u8] = b"ID3\x03\x00fake-mpeg-frames";

#[tokio::test]
async fn test_synthesize_returns_audio() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/text-to-speech/voice-123")
        .match_header("xi-api-key", "secret")
        .match_header("accept", "audio/mpeg")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "text": "Hey Sam, it's the Housr team here.",
            "model_id": "eleven_multilingual_v2",
            "voice_settings": {
                "stability": 0.5,
                "similarity_boost": 0.8,
                "style": 0.0,
                "use_speaker_boost": true
            }
        })))
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(AUDIO)
        .create_async()
        .await;

    let client = ElevenLabsClient::new(
        server.url(),
        Some("secret".to_string()),
        Some("voice-123".to_string()),
    )
    .unwrap();

    let audio = client.synthesize("Hey Sam, it's the Housr team here.").await.unwrap();

    assert_eq!(audio, AUDIO);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_synthesize_api_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/text-to-speech/voice-123")
        .with_status(401)
        .with_body(r#"{"detail":"invalid api key"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = ElevenLabsClient::new(
        server.url(),
        Some("wrong".to_string()),
        Some("voice-123".to_string()),
    )
    .unwrap();

    let err = client.synthesize("Hello").await.unwrap_err();

    match err {
        SpeechError::ApiError { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("invalid api key"));
        }
        other => panic!("unexpected error: {other}"),
    }
    // single attempt, no retry
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_voice_id_never_calls_out() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = ElevenLabsClient::new(server.url(), Some("secret".to_string()), None).unwrap();

    let err = client.synthesize("Hello").await.unwrap_err();

    assert!(matches!(err, SpeechError::MissingCredentials));
    assert_eq!(err.to_string(), "ElevenLabs API key missing.");
    mock.assert_async().await;
}
