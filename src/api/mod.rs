// API layer - HTTP endpoints
pub mod health;
pub mod items;

pub use health::HealthApi;
pub use items::ItemsApi;

use poem::middleware::Tracing;
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

/// Compose the HTTP application: API under `/api`, Swagger UI under `/swagger`
///
/// `server_url` is the externally visible base URL advertised in the OpenAPI
/// document.
pub fn build_app(app_data: &AppData, server_url: &str) -> impl Endpoint + use<> {
    let health_api = HealthApi::new(app_data.db.clone());
    let items_api = ItemsApi::new(app_data.item_service.clone());

    let api_service = OpenApiService::new(
        (health_api, items_api),
        "Catalog API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .with(Tracing)
}
