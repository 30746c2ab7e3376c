mod health;
mod nfe;

use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health,
        crate::handlers::lookup::consult_nfe,
        crate::handlers::convert::convert_nfe,
    ),
    components(schemas(
        crate::models::lookup::LookupRequest,
        crate::models::lookup::LookupResponse,
        crate::models::convert::ConvertRequest,
        crate::models::convert::ConvertResponse,
        nfe_core::InvoiceRecord,
        nfe_core::InvoiceStatus,
        nfe_core::Issuer,
        nfe_core::Recipient,
    )),
    tags(
        (name = "Health", description = "Health APIs"),
        (name = "NFe", description = "Invoice lookup and conversion APIs")
    ),
)]
struct ApiDoc;

pub fn create_routes(state: AppState) -> Router {
    let cors = CorsLayer::permissive();
    let doc = ApiDoc::openapi();

    Router::new()
        .merge(health::create_router())
        .nest("/api", nfe::create_router())
        .layer(cors)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc))
}
