use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use super::ListingStore;
use crate::models::{Listing, ListingDetail};

/// Postgres-backed store over the `posts` and `post_details` tables
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Open a single-connection pool and apply pending migrations
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
            .context("Failed to connect to the database")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;

        info!("Database ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl ListingStore for PgStore {
    async fn upsert_listing(&self, listing: &Listing) -> Result<()> {
        sqlx::query(
            "INSERT INTO posts (
                token,
                title,
                top_description_text,
                middle_description_text,
                bottom_description_text
             )
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (token) DO UPDATE SET
                title = EXCLUDED.title,
                top_description_text = EXCLUDED.top_description_text,
                middle_description_text = EXCLUDED.middle_description_text,
                bottom_description_text = EXCLUDED.bottom_description_text",
        )
        .bind(&listing.token)
        .bind(&listing.title)
        .bind(&listing.top_description_text)
        .bind(&listing.middle_description_text)
        .bind(&listing.bottom_description_text)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to save listing {}", listing.token))?;

        Ok(())
    }

    async fn listings_without_detail(&self) -> Result<Vec<Listing>> {
        sqlx::query_as::<_, Listing>(
            "SELECT post.*
             FROM posts post
             LEFT JOIN post_details detail ON detail.token = post.token
             WHERE detail.token IS NULL
             ORDER BY post.token",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load listings without detail")
    }

    async fn upsert_detail(&self, detail: &ListingDetail) -> Result<()> {
        sqlx::query(
            "INSERT INTO post_details (
                token,
                title,
                region,
                meterage,
                mortgage,
                rent,
                rooms,
                construction_year,
                elevator,
                parking,
                warehouse
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             ON CONFLICT (token) DO UPDATE SET
                title = EXCLUDED.title,
                region = EXCLUDED.region,
                meterage = EXCLUDED.meterage,
                mortgage = EXCLUDED.mortgage,
                rent = EXCLUDED.rent,
                rooms = EXCLUDED.rooms,
                construction_year = EXCLUDED.construction_year,
                elevator = EXCLUDED.elevator,
                parking = EXCLUDED.parking,
                warehouse = EXCLUDED.warehouse",
        )
        .bind(&detail.token)
        .bind(&detail.title)
        .bind(&detail.region)
        .bind(detail.meterage)
        .bind(detail.mortgage)
        .bind(detail.rent)
        .bind(detail.rooms)
        .bind(detail.construction_year)
        .bind(detail.elevator)
        .bind(detail.parking)
        .bind(detail.warehouse)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to save detail for {}", detail.token))?;

        Ok(())
    }

    async fn delete_listing(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM posts WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete listing {}", token))?;

        Ok(())
    }
}
