//! Persistence of finished quiz results.

use regex::Regex;
use sqlx::PgPool;
use std::sync::LazyLock;

use crate::models::SavedResponse;
use crate::sanitize::escape;
use crate::{theme, Error, Result};

// Theme character set plus the characters escaping introduces, so a theme
// whose only offense was a markup character is storable once escaped.
static SAVABLE_THEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s,.\-&#;]+$").expect("valid stored theme regex"));

/// Store for saved quiz responses, backed by the `responses` table.
#[derive(Clone)]
pub struct ResponseStore {
    pool: PgPool,
}

impl ResponseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Escape and persist one quiz result, returning the generated row id.
    ///
    /// All three fields are escaped before the write; the escaped theme must
    /// still pass the theme character check. Validation failure maps to a
    /// client error, write failure to a server error, and a failed write
    /// leaves no row.
    pub async fn save(
        &self,
        theme_text: &str,
        analysis: &str,
        personality_mode: &str,
    ) -> Result<i32> {
        let theme_text = escape(theme_text);
        let analysis = escape(analysis);
        let personality_mode = escape(personality_mode);

        if !SAVABLE_THEME_RE.is_match(&theme_text) {
            return Err(Error::Validation(theme::INVALID_THEME_MESSAGE.to_string()));
        }

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO responses (theme, analysis, personality_mode)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&theme_text)
        .bind(&analysis)
        .bind(&personality_mode)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Fetch every saved response, most recent first.
    pub async fn list_all(&self) -> Result<Vec<SavedResponse>> {
        let rows = sqlx::query_as::<_, SavedResponse>(
            r#"
            SELECT id, theme, analysis, personality_mode, created_at
            FROM responses
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
