use good_seat_api::{
    config::AppConfig,
    db::{create_orm_conn, create_pool, run_migrations},
    dto::{reviews::SubmitReviewRequest, screens::CreateScreenRequest, theatres::CreateTheatreRequest},
    entity::users::ActiveModel as UserActive,
    error::AppError,
    middleware::session::Session,
    services::{review_service, screen_service, theatre_service},
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};
use uuid::Uuid;

// Integration flow: get-or-create submission, reuse on resubmit, joined
// listing, validation failures, the concurrent-race guarantee, and cascade
// deletes.
#[tokio::test]
async fn review_submission_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let user_id = create_user(&state, "cinemacritic", "critic@example.com").await?;
    let session = Session { user_id };

    // --- Unseen theatre: submission creates theatre and screen implicitly.
    let first = review_service::submit_review(&state, &session, sample_request()).await?;
    assert_eq!(first.seat_row, "J");
    assert_eq!(first.seat_number, 15);
    assert!(first.recommend);
    assert_eq!(first.user_id, user_id);

    let theatres = theatre_service::list_theatres(&state).await?;
    assert_eq!(theatres.len(), 1);
    assert_eq!(theatres[0].name, "Grand Palace Cinemas");
    assert_eq!(theatres[0].city, "Unknown");

    let screens = screen_service::list_screens(&state).await?;
    assert_eq!(screens.len(), 1);
    assert_eq!(screens[0].name, "Auditorium 1");
    assert_eq!(screens[0].screen_type, "Dolby");

    // --- Resubmitting the same payload reuses both rows.
    let second = review_service::submit_review(&state, &session, sample_request()).await?;
    assert_eq!(second.theatre_id, first.theatre_id);
    assert_eq!(second.screen_id, first.screen_id);
    assert_ne!(second.id, first.id);
    assert_eq!(count(&state, "theatres").await?, 1);
    assert_eq!(count(&state, "screens").await?, 1);

    // --- Listing joins screen fields.
    let listed = review_service::list_reviews_for_theatre(&state, first.theatre_id).await?;
    assert_eq!(listed.len(), 2);
    assert!(
        listed
            .iter()
            .all(|r| r.screen_name.as_deref() == Some("Auditorium 1")
                && r.screen_type.as_deref() == Some("Dolby"))
    );

    // --- A pre-seeded theatre and screen are matched, not duplicated.
    let odeon = theatre_service::create_theatre(
        &state,
        CreateTheatreRequest {
            name: "The Odeon Multiplex".into(),
            address: None,
            city: "Gotham".into(),
            state: "NY".into(),
            country: "USA".into(),
        },
    )
    .await?;
    let odeon_screen = screen_service::create_screen(
        &state,
        odeon.id,
        CreateScreenRequest {
            name: "Auditorium 3".into(),
            screen_type: "imax".into(),
            chain: Some("Regal".into()),
        },
    )
    .await?;
    assert_eq!(odeon_screen.screen_type, "IMAX");

    let mut request = sample_request();
    request.theatre_name = "  The Odeon Multiplex  ".into();
    request.screen_type = "IMAX".into();
    request.auditorium_number = 3;
    let odeon_review = review_service::submit_review(&state, &session, request).await?;
    assert_eq!(odeon_review.theatre_id, odeon.id);
    assert_eq!(odeon_review.screen_id, Some(odeon_screen.id));
    assert_eq!(count(&state, "theatres").await?, 2);
    assert_eq!(count(&state, "screens").await?, 2);

    // --- Invalid submissions fail with ValidationError and write nothing.
    let reviews_before = count(&state, "reviews").await?;
    for request in [
        SubmitReviewRequest {
            seat_number: 0,
            ..sample_request()
        },
        SubmitReviewRequest {
            theatre_name: "   ".into(),
            ..sample_request()
        },
    ] {
        let err = review_service::submit_review(&state, &session, request)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
    assert_eq!(count(&state, "reviews").await?, reviews_before);
    assert_eq!(count(&state, "theatres").await?, 2);

    // --- Lookup of a nonexistent theatre yields an empty array, not an error.
    let missing = theatre_service::get_theatre(&state, Uuid::new_v4()).await?;
    assert!(missing.is_empty());
    let found = theatre_service::get_theatre(&state, odeon.id).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "The Odeon Multiplex");

    // --- Screens cannot be attached to theatres that do not exist.
    let err = screen_service::create_screen(
        &state,
        Uuid::new_v4(),
        CreateScreenRequest {
            name: "Auditorium 9".into(),
            screen_type: "Dolby".into(),
            chain: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ForeignKey(_)));

    // --- Two concurrent submissions for the same unseen theatre produce one row.
    let race_a = SubmitReviewRequest {
        theatre_name: "Starlight Drive Eleven".into(),
        ..sample_request()
    };
    let race_b = SubmitReviewRequest {
        theatre_name: "Starlight Drive Eleven".into(),
        row: "b".into(),
        seat_number: 4,
        ..sample_request()
    };
    let (left, right) = tokio::join!(
        review_service::submit_review(&state, &session, race_a),
        review_service::submit_review(&state, &session, race_b),
    );
    let left = left?;
    let right = right?;
    assert_eq!(left.theatre_id, right.theatre_id);
    assert_eq!(left.screen_id, right.screen_id);
    let (starlight_count,): (i64,) =
        sqlx::query_as("SELECT count(*) FROM theatres WHERE name = $1")
            .bind("Starlight Drive Eleven")
            .fetch_one(&state.pool)
            .await?;
    assert_eq!(starlight_count, 1);

    // --- Deleting a theatre cascades to screens, reviews, and images.
    sqlx::query("INSERT INTO images (id, review_id, url, alt_text) VALUES ($1, $2, $3, $4)")
        .bind(Uuid::new_v4())
        .bind(first.id)
        .bind("https://example.com/j15.jpg")
        .bind("View from J15")
        .execute(&state.pool)
        .await?;

    theatre_service::delete_theatre(&state, first.theatre_id).await?;
    let (orphans,): (i64,) = sqlx::query_as(
        "SELECT count(*) FROM reviews WHERE theatre_id = $1",
    )
    .bind(first.theatre_id)
    .fetch_one(&state.pool)
    .await?;
    assert_eq!(orphans, 0);
    assert_eq!(count(&state, "images").await?, 0);
    let (palace_screens,): (i64,) =
        sqlx::query_as("SELECT count(*) FROM screens WHERE theatre_id = $1")
            .bind(first.theatre_id)
            .fetch_one(&state.pool)
            .await?;
    assert_eq!(palace_screens, 0);

    let err = theatre_service::delete_theatre(&state, first.theatre_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    Ok(())
}

fn sample_request() -> SubmitReviewRequest {
    SubmitReviewRequest {
        theatre_name: "Grand Palace Cinemas".into(),
        screen_type: "dolby".into(),
        auditorium_number: 1,
        row: "j".into(),
        seat_number: 15,
        notes: Some("great view".into()),
        recommend: Some("on".into()),
    }
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url).await?;
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE images, reviews, screens, theatres, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    let config = AppConfig {
        database_url: database_url.to_string(),
        host: "127.0.0.1".into(),
        port: 3000,
        cors_origin: "http://localhost:5173".into(),
        screen_types: ["Standard", "Digital", "Laser", "Dolby", "IMAX", "RPX"]
            .into_iter()
            .map(String::from)
            .collect(),
        session_user_id: Uuid::nil(),
    };

    Ok(AppState { pool, orm, config })
}

async fn create_user(state: &AppState, username: &str, email: &str) -> anyhow::Result<Uuid> {
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password_hash: Set("dummy".into()),
        avatar_url: Set(None),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(user.id)
}

async fn count(state: &AppState, table: &str) -> anyhow::Result<i64> {
    let (total,): (i64,) = sqlx::query_as(&format!("SELECT count(*) FROM {table}"))
        .fetch_one(&state.pool)
        .await?;
    Ok(total)
}
