//! PostgreSQL registry. Tables are created at startup if they do not exist.

use super::{check_new_village, missing_village, Registry};
use crate::config::Config;
use crate::error::AppError;
use crate::models::{FraClaim, NewClaim, NewVillage, RegistryStats, Village};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const INSERT_VILLAGE: &str = "INSERT INTO villages (name, state) VALUES ($1, $2) RETURNING id, name, state";
const CLAIM_COLUMNS: &str = "id, claimant_name, claim_type, status, village_id, created_at";

#[derive(Clone)]
pub struct PgRegistry {
    pool: PgPool,
}

impl PgRegistry {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the database if missing, open a pool and ensure the tables exist.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        ensure_database_exists(&config.database_url).await?;
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        ensure_schema(&pool).await?;
        tracing::info!(max_connections = config.max_connections, "connected to postgres");
        Ok(Self::new(pool))
    }
}

/// `villages` and `fra_claims`, with the claim's village enforced by a foreign key.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS villages (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            state TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS fra_claims (
            id BIGSERIAL PRIMARY KEY,
            claimant_name TEXT NOT NULL,
            claim_type TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'Pending',
            village_id BIGINT NOT NULL REFERENCES villages(id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS fra_claims_village_id_idx ON fra_claims (village_id)")
        .execute(pool)
        .await?;
    Ok(())
}

/// Connect to the server's `postgres` database and create the target database when absent.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

/// A foreign-key violation on `fra_claims` means the village row is missing.
fn map_insert_error(e: sqlx::Error, village_id: i64) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_foreign_key_violation() {
            return missing_village(village_id);
        }
    }
    AppError::Db(e)
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[async_trait]
impl Registry for PgRegistry {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_villages(&self) -> Result<Vec<Village>, AppError> {
        let rows = sqlx::query_as::<_, Village>("SELECT id, name, state FROM villages ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn village_exists(&self, id: i64) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM villages WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists.0)
    }

    async fn insert_village(&self, village: &NewVillage) -> Result<Village, AppError> {
        check_new_village(village)?;
        let row = sqlx::query_as::<_, Village>(INSERT_VILLAGE)
            .bind(&village.name)
            .bind(&village.state)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_villages(&self, villages: &[NewVillage]) -> Result<Vec<Village>, AppError> {
        for village in villages {
            check_new_village(village)?;
        }
        let mut tx = self.pool.begin().await?;
        let mut rows = Vec::with_capacity(villages.len());
        for village in villages {
            let row = sqlx::query_as::<_, Village>(INSERT_VILLAGE)
                .bind(&village.name)
                .bind(&village.state)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }
        tx.commit().await?;
        Ok(rows)
    }

    async fn insert_claim(&self, claim: &NewClaim) -> Result<FraClaim, AppError> {
        let sql = format!(
            "INSERT INTO fra_claims (claimant_name, claim_type, status, village_id) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            CLAIM_COLUMNS
        );
        sqlx::query_as::<_, FraClaim>(&sql)
            .bind(&claim.claimant_name)
            .bind(&claim.claim_type)
            .bind(&claim.status)
            .bind(claim.village_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, claim.village_id))
    }

    async fn get_claim(&self, id: i64) -> Result<Option<FraClaim>, AppError> {
        let sql = format!("SELECT {} FROM fra_claims WHERE id = $1", CLAIM_COLUMNS);
        let row = sqlx::query_as::<_, FraClaim>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_claims(&self, village_id: Option<i64>) -> Result<Vec<FraClaim>, AppError> {
        let sql = format!(
            "SELECT {} FROM fra_claims WHERE ($1::BIGINT IS NULL OR village_id = $1) ORDER BY id",
            CLAIM_COLUMNS
        );
        let rows = sqlx::query_as::<_, FraClaim>(&sql)
            .bind(village_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn stats(&self) -> Result<RegistryStats, AppError> {
        let villages: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM villages")
            .fetch_one(&self.pool)
            .await?;
        let by_status: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM fra_claims GROUP BY status")
                .fetch_all(&self.pool)
                .await?;
        let claims = by_status.iter().map(|(_, n)| *n).sum::<i64>();
        Ok(RegistryStats {
            villages: villages.0,
            claims,
            claims_by_status: by_status.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::error::Error as StdError;

    #[derive(Debug, thiserror::Error)]
    #[error("{message}")]
    struct FakeDbError {
        message: String,
        foreign_key: bool,
    }

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            &self.message
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.foreign_key {
                ErrorKind::ForeignKeyViolation
            } else {
                ErrorKind::Other
            }
        }
    }

    fn db_error(foreign_key: bool) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError {
            message: "insert failed".into(),
            foreign_key,
        }))
    }

    #[test]
    fn foreign_key_violation_is_missing_village() {
        let err = map_insert_error(db_error(true), 17);
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "not found: village 17");
    }

    #[test]
    fn other_insert_errors_stay_database_errors() {
        assert!(matches!(
            map_insert_error(db_error(false), 17),
            AppError::Db(sqlx::Error::Database(_))
        ));
        assert!(matches!(
            map_insert_error(sqlx::Error::PoolTimedOut, 17),
            AppError::Db(sqlx::Error::PoolTimedOut)
        ));
    }

    #[test]
    fn splits_admin_url_and_database_name() {
        let (admin, name) =
            parse_db_name_from_url("postgres://u:p@localhost:5432/fra_atlas?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "fra_atlas");
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("fra_atlas"), "\"fra_atlas\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}
