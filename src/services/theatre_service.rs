use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::theatres::{CreateTheatreRequest, TheatreDetail},
    entity::theatres::{ActiveModel, Column, Entity as Theatres, Model as TheatreModel},
    error::{AppError, AppResult},
    models::{Theatre, TheatreSummary},
    state::AppState,
};
use chrono::Utc;

pub async fn list_theatres(state: &AppState) -> AppResult<Vec<TheatreSummary>> {
    let theatres = Theatres::find()
        .order_by_asc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|t| TheatreSummary {
            id: t.id,
            name: t.name,
            city: t.city,
            state: t.state,
        })
        .collect();

    Ok(theatres)
}

/// Singleton-or-empty lookup; the HTTP contract hands callers an array so a
/// missing theatre is a zero-element response, not an error.
pub async fn get_theatre(state: &AppState, id: Uuid) -> AppResult<Vec<TheatreDetail>> {
    let theatre = Theatres::find_by_id(id).one(&state.orm).await?;

    Ok(theatre
        .into_iter()
        .map(|t| TheatreDetail {
            name: t.name,
            city: t.city,
            state: t.state,
        })
        .collect())
}

pub async fn create_theatre(
    state: &AppState,
    payload: CreateTheatreRequest,
) -> AppResult<Theatre> {
    payload.validate()?;

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name.trim().to_string()),
        address: Set(payload.address),
        city: Set(payload.city),
        state: Set(payload.state),
        country: Set(payload.country),
        created_at: NotSet,
    };
    let theatre = active.insert(&state.orm).await?;

    Ok(theatre_from_entity(theatre))
}

/// The database cascades the delete down to screens, reviews, and review
/// images.
pub async fn delete_theatre(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Theatres::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(theatre_id = %id, "theatre deleted");
    Ok(())
}

fn theatre_from_entity(model: TheatreModel) -> Theatre {
    Theatre {
        id: model.id,
        name: model.name,
        address: model.address,
        city: model.city,
        state: model.state,
        country: model.country,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
