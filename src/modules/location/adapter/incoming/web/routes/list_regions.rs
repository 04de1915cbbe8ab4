use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::location::application::domain::entities::{Region, RegionScope};
use crate::location::application::use_cases::list_regions::ListRegionsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RegionResponse {
    #[schema(example = "GD")]
    pub code: String,
    #[schema(example = "Guangdong")]
    pub name: String,
}

impl From<Region> for RegionResponse {
    fn from(region: Region) -> Self {
        Self {
            code: region.code,
            name: region.name,
        }
    }
}

async fn respond(data: &AppState, scope: RegionScope) -> HttpResponse {
    match data.list_regions_use_case.execute(scope).await {
        Ok(regions) => ApiResponse::success(
            regions
                .into_iter()
                .map(RegionResponse::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListRegionsError::InvalidCode(msg)) => {
            warn!("Region lookup rejected: {}", msg);
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(ListRegionsError::ServiceUnavailable(e)) => {
            error!(error = %e, "Location store unavailable");
            ApiResponse::service_unavailable()
        }

        Err(ListRegionsError::QueryFailed(e)) => {
            error!(error = %e, "Failed to list regions");
            ApiResponse::internal_error()
        }
    }
}

/// All countries
#[utoipa::path(
    get,
    path = "/api/v1/location/countries",
    tag = "location",
    responses(
        (status = 200, description = "Countries ordered by name", body = inline(SuccessResponse<Vec<RegionResponse>>)),
        (status = 503, description = "Location store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/location/countries")]
pub async fn list_countries_handler(data: web::Data<AppState>) -> impl Responder {
    respond(&data, RegionScope::Countries).await
}

/// States of a country
#[utoipa::path(
    get,
    path = "/api/v1/location/states/{country}",
    tag = "location",
    params(("country" = String, Path, description = "Country code")),
    responses(
        (status = 200, description = "States ordered by name; empty for an unknown country", body = inline(SuccessResponse<Vec<RegionResponse>>)),
        (status = 400, description = "Malformed code", body = ErrorResponse),
        (status = 503, description = "Location store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/location/states/{country}")]
pub async fn list_states_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let country = path.into_inner();
    respond(&data, RegionScope::States { country }).await
}

/// Cities of a state
#[utoipa::path(
    get,
    path = "/api/v1/location/cities/{country}/{state}",
    tag = "location",
    params(
        ("country" = String, Path, description = "Country code"),
        ("state" = String, Path, description = "State code"),
    ),
    responses(
        (status = 200, description = "Cities ordered by name", body = inline(SuccessResponse<Vec<RegionResponse>>)),
        (status = 400, description = "Malformed code", body = ErrorResponse),
        (status = 503, description = "Location store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/location/cities/{country}/{state}")]
pub async fn list_cities_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (country, state) = path.into_inner();
    respond(&data, RegionScope::Cities { country, state }).await
}

/// Districts of a city
#[utoipa::path(
    get,
    path = "/api/v1/location/districts/{country}/{state}/{city}",
    tag = "location",
    params(
        ("country" = String, Path, description = "Country code"),
        ("state" = String, Path, description = "State code"),
        ("city" = String, Path, description = "City code"),
    ),
    responses(
        (status = 200, description = "Districts ordered by name", body = inline(SuccessResponse<Vec<RegionResponse>>)),
        (status = 400, description = "Malformed code", body = ErrorResponse),
        (status = 503, description = "Location store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/location/districts/{country}/{state}/{city}")]
pub async fn list_districts_handler(
    path: web::Path<(String, String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (country, state, city) = path.into_inner();
    respond(&data, RegionScope::Districts { country, state, city }).await
}
