use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        reviews::{SubmitReviewRequest, SubmitReviewResponse},
        theatres::TheatreDetail,
    },
    models::{Image, Review, ReviewWithScreen, Screen, ScreenSummary, Theatre, TheatreSummary, User},
    routes::{health, reviews, screens, theatres},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        theatres::list_theatres,
        theatres::get_theatre,
        theatres::delete_theatre,
        screens::list_screens,
        reviews::list_reviews_for_theatre,
        reviews::submit_review,
    ),
    components(
        schemas(
            User,
            Theatre,
            TheatreSummary,
            TheatreDetail,
            Screen,
            ScreenSummary,
            Review,
            ReviewWithScreen,
            Image,
            SubmitReviewRequest,
            SubmitReviewResponse,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Theatres", description = "Theatre endpoints"),
        (name = "Screens", description = "Screen endpoints"),
        (name = "Reviews", description = "Seat review endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
