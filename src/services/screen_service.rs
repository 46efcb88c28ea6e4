use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::{
    dto::screens::CreateScreenRequest,
    entity::{
        screens::{ActiveModel, Entity as Screens, Model as ScreenModel},
        theatres::Entity as Theatres,
    },
    error::{AppError, AppResult},
    models::{Screen, ScreenSummary},
    state::AppState,
};

pub async fn list_screens(state: &AppState) -> AppResult<Vec<ScreenSummary>> {
    let screens = Screens::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|s| ScreenSummary {
            name: s.name,
            screen_type: s.screen_type,
        })
        .collect();

    Ok(screens)
}

pub async fn create_screen(
    state: &AppState,
    theatre_id: Uuid,
    payload: CreateScreenRequest,
) -> AppResult<Screen> {
    let theatre = Theatres::find_by_id(theatre_id).one(&state.orm).await?;
    if theatre.is_none() {
        return Err(AppError::ForeignKey("theatre does not exist".into()));
    }

    let screen_type = state
        .config
        .canonical_screen_type(&payload.screen_type)
        .ok_or_else(|| {
            AppError::Validation(format!("unknown screen type '{}'", payload.screen_type.trim()))
        })?
        .to_string();

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        theatre_id: Set(theatre_id),
        name: Set(payload.name.trim().to_string()),
        screen_type: Set(screen_type),
        chain: Set(payload.chain),
    };
    let screen = active.insert(&state.orm).await?;

    Ok(screen_from_entity(screen))
}

fn screen_from_entity(model: ScreenModel) -> Screen {
    Screen {
        id: model.id,
        theatre_id: model.theatre_id,
        name: model.name,
        screen_type: model.screen_type,
        chain: model.chain,
    }
}
