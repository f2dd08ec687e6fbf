use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,

    /// Database reachability: "ok" or "unavailable"
    pub database: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}
