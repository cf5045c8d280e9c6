use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{CandidatePool, Catalog, Matcher};
use crate::models::{
    CandidatesResponse, CreateProfileResponse, ErrorResponse, HealthResponse, NewProfile, PostingFilter,
    PostingsResponse, RecommendationsQuery, RecommendationsResponse,
};
use crate::services::{ProfileError, ProfileService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileService,
    pub catalog: Arc<Catalog>,
    pub candidates: Arc<CandidatePool>,
    pub matcher: Matcher,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/profiles", web::post().to(create_profile))
        .route("/profiles/{id}", web::get().to(get_profile))
        .route("/recommendations", web::get().to(get_recommendations))
        .route("/postings", web::get().to(list_postings))
        .route("/postings/{id}/candidates", web::get().to(rank_candidates));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Submit a profile snapshot
///
/// POST /api/v1/profiles
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "education": "string",
///   "institution": "string",
///   "location": "string",
///   "skills": ["string"],
///   "interests": ["string"]
/// }
/// ```
async fn create_profile(
    state: web::Data<AppState>,
    req: web::Json<NewProfile>,
) -> impl Responder {
    match state.profiles.submit(req.into_inner()).await {
        Ok(profile) => HttpResponse::Created().json(CreateProfileResponse { profile }),
        Err(ProfileError::Validation(errors)) => {
            tracing::info!("Validation failed for profile submission: {:?}", errors);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: errors.to_string(),
                status_code: 400,
            })
        }
        Err(e) => {
            tracing::error!("Failed to store profile: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to store profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Fetch a stored profile snapshot
///
/// GET /api/v1/profiles/{id}
async fn get_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.profiles.get(&id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message: format!("No profile stored under id {}", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to read profile {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to read profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Ranked recommendations for a profile
///
/// GET /api/v1/recommendations?profileId={id}
///
/// Without a resolvable `profileId` the demo profile is used.
async fn get_recommendations(
    state: web::Data<AppState>,
    query: web::Query<RecommendationsQuery>,
) -> impl Responder {
    let resolved = state.profiles.resolve(query.profile_id.as_deref()).await;

    let recommendations = state
        .matcher
        .recommend_for(&resolved.profile, state.catalog.postings());

    tracing::info!(
        "Returning {} recommendations for profile {} ({:?}, from {} postings)",
        recommendations.len(),
        resolved.profile.id,
        resolved.source,
        state.catalog.len()
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        profile: resolved.profile,
        source: resolved.source,
        recommendations,
        total_postings: state.catalog.len(),
    })
}

/// Browse the catalog
///
/// GET /api/v1/postings?search=&location=&kind=&duration=
async fn list_postings(
    state: web::Data<AppState>,
    filter: web::Query<PostingFilter>,
) -> impl Responder {
    let postings = state.catalog.search(&filter);

    tracing::debug!("Posting search {:?} matched {}", filter, postings.len());

    HttpResponse::Ok().json(PostingsResponse {
        total: postings.len(),
        postings,
    })
}

/// Applicants ranked against one posting
///
/// GET /api/v1/postings/{id}/candidates
async fn rank_candidates(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> impl Responder {
    let id = path.into_inner();

    let Some(posting) = state.catalog.get(id) else {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Posting not found".to_string(),
            message: format!("No posting with id {}", id),
            status_code: 404,
        });
    };

    let candidates = state
        .matcher
        .rank_candidates(posting, state.candidates.candidates());

    tracing::info!("Ranked {} candidates for posting {}", candidates.len(), id);

    HttpResponse::Ok().json(CandidatesResponse {
        posting,
        total: candidates.len(),
        candidates,
    })
}
