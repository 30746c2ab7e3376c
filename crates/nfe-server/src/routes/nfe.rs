use axum::{routing::post, Router};

use crate::{
    handlers::{convert::convert_nfe, lookup::consult_nfe},
    state::AppState,
};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/consultar", post(consult_nfe))
        .route("/converter", post(convert_nfe))
}
