use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::QueryEngine;
use crate::models::{
    ErrorResponse, HealthResponse, QueryOpportunitiesRequest, QueryOpportunitiesResponse,
    RecordInterestRequest, RecordInterestResponse, TrendingResponse,
};
use crate::services::{CatalogError, CatalogStore, QueryCache};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub cache: Arc<QueryCache>,
    pub engine: QueryEngine,
    /// Default carousel size when the client omits `limit`.
    pub trending_limit: usize,
}

/// Configure all opportunity-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/opportunities/query", web::post().to(query_opportunities))
        .route("/opportunities/trending", web::get().to(get_trending))
        .route("/opportunities/interest", web::post().to(record_interest))
        .route("/opportunities/interest", web::get().to(get_interested));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Query opportunities endpoint
///
/// POST /api/v1/opportunities/query
///
/// Request body:
/// ```json
/// {
///   "searchText": "intern",
///   "branch": "CS",
///   "year": "All",
///   "status": "Open",
///   "sort": "relevance"
/// }
/// ```
async fn query_opportunities(
    state: web::Data<AppState>,
    req: web::Json<QueryOpportunitiesRequest>,
) -> impl Responder {
    let query = req.into_inner().into_query(state.engine.default_sort());
    let total_catalog = state.catalog.len();

    tracing::debug!(
        "Evaluating query: branch={:?}, year={:?}, status={:?}, sort={:?}, search={:?}",
        query.branch,
        query.year,
        query.status,
        query.sort,
        query.search_text
    );

    // Memoized results are invalidated whenever interest toggles land, so a
    // hit is always equivalent to a fresh evaluation.
    if let Some(cached) = state.cache.get(&query) {
        return HttpResponse::Ok().json(QueryOpportunitiesResponse {
            total_results: cached.len(),
            opportunities: cached.as_ref().clone(),
            total_catalog,
        });
    }

    let catalog = state.catalog.snapshot().await;
    let result = state.engine.evaluate(&catalog, &query);

    state.cache.insert(&query, result.opportunities.clone());

    tracing::info!(
        "Returning {} of {} opportunities",
        result.opportunities.len(),
        result.total_catalog
    );

    HttpResponse::Ok().json(QueryOpportunitiesResponse {
        total_results: result.opportunities.len(),
        opportunities: result.opportunities,
        total_catalog: result.total_catalog,
    })
}

/// Trending opportunities endpoint
///
/// GET /api/v1/opportunities/trending?limit=4
async fn get_trending(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let limit = query
        .get("limit")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(state.trending_limit);

    let catalog = state.catalog.snapshot().await;
    let opportunities = state.engine.trending(&catalog, limit);

    HttpResponse::Ok().json(TrendingResponse {
        total_results: opportunities.len(),
        opportunities,
    })
}

/// Toggle interest endpoint
///
/// POST /api/v1/opportunities/interest
///
/// Request body:
/// ```json
/// {
///   "studentId": "string",
///   "opportunityId": "string"
/// }
/// ```
async fn record_interest(
    state: web::Data<AppState>,
    req: web::Json<RecordInterestRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .catalog
        .record_interest(&req.student_id, &req.opportunity_id)
        .await
    {
        Ok((interested, interest_count)) => {
            // Effective counts changed, so cached popularity orderings are stale.
            state.cache.invalidate_all();

            tracing::debug!(
                "Interest toggled: student={}, opportunity={}, interested={}",
                req.student_id,
                req.opportunity_id,
                interested
            );

            HttpResponse::Ok().json(RecordInterestResponse {
                success: true,
                interested,
                interest_count,
                event_id: uuid::Uuid::new_v4().to_string(),
            })
        }
        Err(e @ CatalogError::UnknownOpportunity(_)) => {
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Unknown opportunity".to_string(),
                message: e.to_string(),
                status_code: 404,
            })
        }
        Err(e) => {
            tracing::error!(
                "Failed to record interest for {}: {}",
                req.student_id,
                e
            );
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to record interest".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Get interested opportunities for a student
///
/// GET /api/v1/opportunities/interest?studentId={studentId}
///
/// Returns the opportunity ids the student has toggled interest on, for
/// client-side synchronization.
async fn get_interested(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let student_id = match query.get("studentId") {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing studentId parameter".to_string(),
                message: "studentId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    let interested = state.catalog.interested_ids(student_id).await;

    HttpResponse::Ok().json(serde_json::json!({
        "studentId": student_id,
        "interestedOpportunities": interested,
        "count": interested.len(),
    }))
}
