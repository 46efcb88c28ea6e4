use axum::Router;

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod reviews;
pub mod screens;
pub mod theatres;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/theatres", theatres::router())
        .nest("/screens", screens::router())
        .nest("/reviews", reviews::router())
}
