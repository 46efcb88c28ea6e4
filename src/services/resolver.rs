use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::reviews::ValidSubmission,
    error::{AppError, AppResult},
};

/// Canonical theatre/screen ids a validated submission resolves to.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedVenue {
    pub theatre_id: Uuid,
    pub screen_id: Uuid,
}

/// Map the submission's free-text theatre name and auditorium number to
/// canonical rows, creating them on miss.
///
/// Concurrent submissions for the same unseen theatre or screen are settled
/// by the unique constraints on theatres(name) and screens(theatre_id, name):
/// the insert runs as ON CONFLICT DO NOTHING and a lost race falls back to
/// re-fetching the row the winner created. The only way the re-fetch can come
/// up empty is a concurrent delete, surfaced as a retryable Conflict.
pub async fn resolve_theatre_and_screen(
    pool: &DbPool,
    submission: &ValidSubmission,
) -> AppResult<ResolvedVenue> {
    let theatre_id = get_or_create_theatre(pool, &submission.theatre_name).await?;

    let screen_name = format!("Auditorium {}", submission.auditorium_number);
    let screen_id =
        get_or_create_screen(pool, theatre_id, &screen_name, &submission.screen_type).await?;

    Ok(ResolvedVenue {
        theatre_id,
        screen_id,
    })
}

async fn get_or_create_theatre(pool: &DbPool, name: &str) -> AppResult<Uuid> {
    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM theatres WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await?;
    if let Some((id,)) = existing {
        return Ok(id);
    }

    // The submission form does not collect location fields; resolver-created
    // theatres get placeholders until someone fills them in.
    let inserted: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO theatres (id, name, city, state, country)
        VALUES ($1, $2, 'Unknown', 'Unknown', 'Unknown')
        ON CONFLICT (name) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .fetch_optional(pool)
    .await?;

    match inserted {
        Some((id,)) => Ok(id),
        // Lost the race; the winner's row must be there now.
        None => {
            let (id,): (Uuid,) = sqlx::query_as("SELECT id FROM theatres WHERE name = $1")
                .bind(name)
                .fetch_optional(pool)
                .await?
                .ok_or_else(|| {
                    AppError::Conflict("theatre disappeared during get-or-create".into())
                })?;
            Ok(id)
        }
    }
}

async fn get_or_create_screen(
    pool: &DbPool,
    theatre_id: Uuid,
    name: &str,
    screen_type: &str,
) -> AppResult<Uuid> {
    let existing: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM screens WHERE theatre_id = $1 AND name = $2")
            .bind(theatre_id)
            .bind(name)
            .fetch_optional(pool)
            .await?;
    if let Some((id,)) = existing {
        return Ok(id);
    }

    let inserted = sqlx::query_as::<_, (Uuid,)>(
        r#"
        INSERT INTO screens (id, theatre_id, name, screen_type)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (theatre_id, name) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(theatre_id)
    .bind(name)
    .bind(screen_type)
    .fetch_optional(pool)
    .await
    .map_err(|err| match AppError::from(err) {
        // The theatre was deleted between resolution steps.
        AppError::ForeignKey(_) => AppError::Conflict("theatre was removed concurrently".into()),
        other => other,
    })?;

    match inserted {
        Some((id,)) => Ok(id),
        None => {
            let (id,): (Uuid,) =
                sqlx::query_as("SELECT id FROM screens WHERE theatre_id = $1 AND name = $2")
                    .bind(theatre_id)
                    .bind(name)
                    .fetch_optional(pool)
                    .await?
                    .ok_or_else(|| {
                        AppError::Conflict("screen disappeared during get-or-create".into())
                    })?;
            Ok(id)
        }
    }
}
