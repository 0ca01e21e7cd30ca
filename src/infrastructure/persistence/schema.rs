//! Database schema creation.
//!
//! The schema is created at startup with `IF NOT EXISTS` guards, so a fresh
//! SQLite file becomes usable without a separate migration step.

use sqlx::SqlitePool;

/// Creates tables and indexes if they do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS short_links (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            original_url TEXT NOT NULL,
            short_code TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL,
            expires_at TEXT,
            active BOOLEAN NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_short_links_code ON short_links(short_code)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS visits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            link_id INTEGER NOT NULL REFERENCES short_links(id),
            visited_at TEXT NOT NULL,
            referrer TEXT,
            user_agent TEXT,
            client_address TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_visits_link_id ON visits(link_id)")
        .execute(pool)
        .await?;

    Ok(())
}
