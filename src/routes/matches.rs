use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::Instrument;
use validator::Validate;
use crate::core::Matcher;
use crate::models::{ErrorResponse, HealthResponse, MatchRequest};
use crate::services::SemanticAdapter;

pub const SERVICE_NAME: &str = "resume-match";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub semantic: Arc<SemanticAdapter>,
    pub max_text_chars: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(match_resume));
}

/// Liveness probe
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: SERVICE_NAME.to_string(),
        time: chrono::Utc::now(),
    })
}

/// Score a resume against a job posting
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "resume_text": "string",
///   "job_text": "string"
/// }
/// ```
async fn match_resume(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {}", errors);
        return bad_request(errors.to_string());
    }

    if !req.within_limit(state.max_text_chars) {
        return bad_request(format!(
            "resume_text and job_text must each be at most {} characters",
            state.max_text_chars
        ));
    }

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("match", %request_id);

    async move {
        tracing::info!(
            "Matching resume ({} chars) against job ({} chars)",
            req.resume_text.len(),
            req.job_text.len()
        );

        let resume = req.resume_text.trim();
        let job = req.job_text.trim();

        // The semantic score is only worth computing for a real analysis
        let semantic = if resume.is_empty() || job.is_empty() {
            None
        } else {
            state.semantic.similarity(resume, job).await
        };

        let result = state.matcher.analyze(resume, job, semantic);

        tracing::info!(
            "Returning score {} ({} matched, {} missing)",
            result.score,
            result.matched_keywords.len(),
            result.missing_keywords.len()
        );

        HttpResponse::Ok().json(result)
    }
    .instrument(span)
    .await
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}
