use actix_web::{http::header, web, HttpResponse, Responder};
use crate::models::{ErrorResponse, GenerateReplyResponse, HealthResponse, ProfileError, ProfileForm, StudentProfile, VoiceScriptResponse, VIBE_PRESETS};
use crate::services::{ElevenLabsClient, SpeechError};
use crate::core::Generator;
use std::sync::Arc;
use std::time::Duration;

/// File name offered when a voice note is downloaded
pub const VOICE_NOTE_FILENAME: &str = "housr-student-summary.mp3";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub generator: Generator,
    pub speech: Arc<ElevenLabsClient>,
    pub simulated_latency: Duration,
}

/// Configure all reply-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/properties", web::get().to(list_properties))
        .route("/vibe-presets", web::get().to(list_vibe_presets))
        .route("/replies/generate", web::post().to(generate_reply))
        .route("/replies/voice-script", web::post().to(voice_script))
        .route("/voice/generate", web::post().to(generate_voice));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        voice_enabled: state.speech.is_configured(),
    })
}

/// Property catalog endpoint
///
/// GET /api/v1/properties
async fn list_properties(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.generator.catalog())
}

/// Vibe chips offered by the dashboard
///
/// GET /api/v1/vibe-presets
async fn list_vibe_presets() -> impl Responder {
    HttpResponse::Ok().json(VIBE_PRESETS)
}

/// Collect the submitted form into a profile
fn build_profile(form: ProfileForm) -> Result<StudentProfile, HttpResponse> {
    form.into_profile().map_err(|e| {
        tracing::info!("Refusing generation: {}", e);
        let error = match e {
            ProfileError::MissingBudget => "Missing budget",
            ProfileError::UnknownVibePreset(_) => "Unknown vibe preset",
        };
        HttpResponse::BadRequest().json(ErrorResponse {
            error: error.to_string(),
            message: e.to_string(),
            status_code: 400,
        })
    })
}

/// Generate reply endpoint
///
/// POST /api/v1/replies/generate
///
/// Request body:
/// ```json
/// {
///   "firstName": "Sam",
///   "budgetMin": 150,
///   "budgetMax": 200,
///   "areas": "Fallowfield, City Centre",
///   "vibe": "social, modern",
///   "vibePresets": ["Gym"],
///   "notes": "string",
///   "tone": "Friendly|Professional|Hype|Concise",
///   "platform": "Email|WhatsApp"
/// }
/// ```
async fn generate_reply(
    state: web::Data<AppState>,
    req: web::Json<ProfileForm>,
) -> impl Responder {
    let profile = match build_profile(req.into_inner()) {
        Ok(profile) => profile,
        Err(response) => return response,
    };

    tracing::info!(
        "Generating {} reply for {:?} (budget {}-{})",
        profile.platform,
        profile.display_name(),
        profile.budget_min,
        profile.budget_max
    );

    let generation = state
        .generator
        .generate_delayed(&profile, state.simulated_latency)
        .await;

    HttpResponse::Ok().json(GenerateReplyResponse {
        generation_id: uuid::Uuid::new_v4().to_string(),
        reply: generation.reply,
        matches: generation.matches,
        total_candidates: generation.total_candidates,
        tone: profile.tone,
        platform: profile.platform,
    })
}

/// Voice script endpoint
///
/// POST /api/v1/replies/voice-script
///
/// Returns the text that would be synthesized for this profile.
async fn voice_script(
    state: web::Data<AppState>,
    req: web::Json<ProfileForm>,
) -> impl Responder {
    let profile = match build_profile(req.into_inner()) {
        Ok(profile) => profile,
        Err(response) => return response,
    };

    HttpResponse::Ok().json(VoiceScriptResponse {
        script: state.generator.voice_script(&profile),
    })
}

/// Voice note endpoint
///
/// POST /api/v1/voice/generate
///
/// Same body as `/replies/generate`. Responds with `audio/mpeg` as a download.
async fn generate_voice(
    state: web::Data<AppState>,
    req: web::Json<ProfileForm>,
) -> impl Responder {
    let profile = match build_profile(req.into_inner()) {
        Ok(profile) => profile,
        Err(response) => return response,
    };

    if !state.speech.is_configured() {
        tracing::warn!("Voice note requested without ElevenLabs credentials");
        return HttpResponse::PreconditionFailed().json(ErrorResponse {
            error: "Voice unavailable".to_string(),
            message: SpeechError::MissingCredentials.to_string(),
            status_code: 412,
        });
    }

    let script = state.generator.voice_script(&profile);

    match state.speech.synthesize(&script).await {
        Ok(audio) => {
            tracing::info!("Voice note generated ({} bytes)", audio.len());
            HttpResponse::Ok()
                .content_type("audio/mpeg")
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", VOICE_NOTE_FILENAME),
                ))
                .body(audio)
        }
        Err(SpeechError::MissingCredentials) => HttpResponse::PreconditionFailed().json(ErrorResponse {
            error: "Voice unavailable".to_string(),
            message: SpeechError::MissingCredentials.to_string(),
            status_code: 412,
        }),
        Err(e) => {
            tracing::error!("Failed to generate voice: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Voice generation failed".to_string(),
                message: "Failed to generate voice.".to_string(),
                status_code: 502,
            })
        }
    }
}
