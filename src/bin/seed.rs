use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use good_seat_api::{config::AppConfig, db::create_pool};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    // The first user doubles as the placeholder session identity reviews are
    // recorded under while there is no real authentication.
    let critic_id = ensure_user(
        &pool,
        config.session_user_id,
        "cinemacritic",
        "critic@example.com",
        "password123",
        Some("https://i.pravatar.cc/150?img=68"),
    )
    .await?;
    let seeker_id = ensure_user(
        &pool,
        Uuid::new_v4(),
        "seatseeker",
        "seeker@example.com",
        "securepass",
        Some("https://i.pravatar.cc/150?img=33"),
    )
    .await?;

    let palace_id = ensure_theatre(&pool, "Grand Palace Cinemas", "Metropolis", "NY", "USA").await?;
    let odeon_id = ensure_theatre(&pool, "The Odeon Multiplex", "Gotham", "NY", "USA").await?;

    let palace_aud1 =
        ensure_screen(&pool, palace_id, "Auditorium 1", "Dolby", Some("AMC")).await?;
    let palace_aud2 =
        ensure_screen(&pool, palace_id, "Auditorium 2", "Digital", Some("Cinemark")).await?;
    let odeon_aud3 = ensure_screen(&pool, odeon_id, "Auditorium 3", "IMAX", Some("Regal")).await?;

    seed_reviews(
        &pool,
        &[
            SampleReview {
                user_id: critic_id,
                theatre_id: palace_id,
                screen_id: palace_aud1,
                seat_row: "J",
                seat_number: 15,
                notes: "Sitting in row J, seat 15, the view was absolutely pristine. Perfectly \
                        centered, no neck strain. The Dolby sound was immersive, and the seats \
                        themselves were plush recliners. Highly recommend this spot for a premium \
                        experience.",
                recommend: true,
                images: &[
                    (
                        "https://images.unsplash.com/photo-1616530940864-16274431b99a?q=80&w=1080",
                        "View from J15 at Grand Palace",
                    ),
                    (
                        "https://images.unsplash.com/photo-1549448332-9c9dc760778c?q=80&w=1080",
                        "Comfortable recliner seat in Dolby",
                    ),
                ],
            },
            SampleReview {
                user_id: seeker_id,
                theatre_id: palace_id,
                screen_id: palace_aud2,
                seat_row: "C",
                seat_number: 7,
                notes: "Row C is definitely too close for this standard screen. Had to look up \
                        constantly. Seats were just okay, not terrible but not great for a long \
                        movie. Sound was decent.",
                recommend: false,
                images: &[],
            },
            SampleReview {
                user_id: critic_id,
                theatre_id: odeon_id,
                screen_id: odeon_aud3,
                seat_row: "F",
                seat_number: 10,
                notes: "Row F, seat 10 in the IMAX was fantastic for the screen size. Perfectly \
                        fills your vision. Sound was powerful. However, my seat's recline function \
                        was broken, which was a shame.",
                recommend: true,
                images: &[(
                    "https://images.unsplash.com/photo-1574211116238-d6103681534b?q=80&w=1080",
                    "IMAX screen view from middle row",
                )],
            },
        ],
    )
    .await?;

    println!("Seed completed. Session user ID: {critic_id}");
    Ok(())
}

async fn ensure_user(
    pool: &sqlx::PgPool,
    id: Uuid,
    username: &str,
    email: &str,
    password: &str,
    avatar_url: Option<&str>,
) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let (user_id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO users (id, username, email, password_hash, avatar_url)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (username) DO UPDATE SET avatar_url = EXCLUDED.avatar_url
        RETURNING id
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(avatar_url)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {username}");
    Ok(user_id)
}

async fn ensure_theatre(
    pool: &sqlx::PgPool,
    name: &str,
    city: &str,
    state: &str,
    country: &str,
) -> anyhow::Result<Uuid> {
    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO theatres (id, name, city, state, country)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (name) DO UPDATE SET city = EXCLUDED.city
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(city)
    .bind(state)
    .bind(country)
    .fetch_one(pool)
    .await?;

    println!("Ensured theatre {name}");
    Ok(id)
}

async fn ensure_screen(
    pool: &sqlx::PgPool,
    theatre_id: Uuid,
    name: &str,
    screen_type: &str,
    chain: Option<&str>,
) -> anyhow::Result<Uuid> {
    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO screens (id, theatre_id, name, screen_type, chain)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (theatre_id, name) DO UPDATE SET screen_type = EXCLUDED.screen_type
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(theatre_id)
    .bind(name)
    .bind(screen_type)
    .bind(chain)
    .fetch_one(pool)
    .await?;

    println!("Ensured screen {name}");
    Ok(id)
}

struct SampleReview<'a> {
    user_id: Uuid,
    theatre_id: Uuid,
    screen_id: Uuid,
    seat_row: &'a str,
    seat_number: i32,
    notes: &'a str,
    recommend: bool,
    images: &'a [(&'a str, &'a str)],
}

async fn seed_reviews(pool: &sqlx::PgPool, samples: &[SampleReview<'_>]) -> anyhow::Result<()> {
    let (existing,): (i64,) = sqlx::query_as("SELECT count(*) FROM reviews")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        println!("Reviews already present, skipping sample reviews");
        return Ok(());
    }

    for sample in samples {
        let review_id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO reviews (id, user_id, theatre_id, screen_id, seat_row, seat_number, notes, recommend)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(review_id)
        .bind(sample.user_id)
        .bind(sample.theatre_id)
        .bind(sample.screen_id)
        .bind(sample.seat_row)
        .bind(sample.seat_number)
        .bind(sample.notes)
        .bind(sample.recommend)
        .execute(pool)
        .await?;

        for (url, alt_text) in sample.images {
            sqlx::query(
                r#"
                INSERT INTO images (id, review_id, url, alt_text)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(review_id)
            .bind(url)
            .bind(alt_text)
            .execute(pool)
            .await?;
        }
    }

    println!("Seeded sample reviews");
    Ok(())
}
