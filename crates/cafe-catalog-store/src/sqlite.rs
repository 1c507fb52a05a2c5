//! SQLite-backed implementation of the [`Store`] trait.

use std::path::Path;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use cafe_catalog_core::{Cafe, NewCafe};

use crate::error::{Result, StoreError};
use crate::schema::{CAFE_COLUMNS, CREATE_CAFES_TABLE};
use crate::Store;

/// Maximum pooled connections for an on-disk database.
const MAX_CONNECTIONS: u32 = 5;

/// Catalog storage over an embedded SQLite database.
///
/// The pool is safe for concurrent use across simultaneous requests; each
/// operation is a single auto-committed statement, so concurrent writes to
/// the same row resolve last-write-wins.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database file at `path` and ensure the schema
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be created.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Opening SQLite catalog");

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Self::init(pool).await
    }

    /// Open a fresh in-memory database. Primarily for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new().in_memory(true);

        // A single connection: each in-memory connection is its own database,
        // so a larger pool would hand out empty catalogs.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Self::init(pool).await
    }

    async fn init(pool: SqlitePool) -> Result<Self> {
        sqlx::query(CREATE_CAFES_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Cafe>> {
        let sql = format!("SELECT {CAFE_COLUMNS} FROM cafes WHERE id = ?1");
        let row: Option<CafeRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Cafe::from))
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn list_all(&self) -> Result<Vec<Cafe>> {
        let sql = format!("SELECT {CAFE_COLUMNS} FROM cafes");
        let rows: Vec<CafeRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(Cafe::from).collect())
    }

    async fn get_random(&self) -> Result<Cafe> {
        let cafes = self.list_all().await?;

        cafes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(StoreError::EmptyCatalog)
    }

    async fn find_by_location(&self, location: &str) -> Result<Vec<Cafe>> {
        let sql = format!("SELECT {CAFE_COLUMNS} FROM cafes WHERE location = ?1");
        let rows: Vec<CafeRow> = sqlx::query_as(&sql)
            .bind(location)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Cafe::from).collect())
    }

    async fn insert(&self, cafe: &NewCafe) -> Result<Cafe> {
        let result = sqlx::query(
            r"
            INSERT INTO cafes (name, map_url, img_url, location, seats,
                               has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ",
        )
        .bind(&cafe.name)
        .bind(&cafe.map_url)
        .bind(&cafe.img_url)
        .bind(&cafe.location)
        .bind(&cafe.seats)
        .bind(cafe.has_toilet)
        .bind(cafe.has_wifi)
        .bind(cafe.has_sockets)
        .bind(cafe.can_take_calls)
        .bind(&cafe.coffee_price)
        .execute(&self.pool)
        .await;

        let done = match result {
            Ok(done) => done,
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                return Err(StoreError::NameTaken {
                    name: cafe.name.clone(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        let id = done.last_insert_rowid();
        tracing::info!(id, name = %cafe.name, "Cafe inserted");

        self.fetch_by_id(id)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn update_price(&self, id: i64, new_price: &str) -> Result<Cafe> {
        let done = sqlx::query("UPDATE cafes SET coffee_price = ?1 WHERE id = ?2")
            .bind(new_price)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if done.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }

        tracing::info!(id, new_price, "Coffee price updated");

        self.fetch_by_id(id)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let done = sqlx::query("DELETE FROM cafes WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if done.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }

        tracing::info!(id, "Cafe deleted");

        Ok(())
    }
}

/// Row shape for sqlx decoding; converted into the storage-agnostic [`Cafe`].
#[derive(sqlx::FromRow)]
struct CafeRow {
    id: i64,
    name: String,
    map_url: String,
    img_url: String,
    location: String,
    seats: String,
    has_toilet: bool,
    has_wifi: bool,
    has_sockets: bool,
    can_take_calls: bool,
    coffee_price: Option<String>,
}

impl From<CafeRow> for Cafe {
    fn from(row: CafeRow) -> Self {
        Cafe {
            id: row.id,
            name: row.name,
            map_url: row.map_url,
            img_url: row.img_url,
            location: row.location,
            seats: row.seats,
            has_toilet: row.has_toilet,
            has_wifi: row.has_wifi,
            has_sockets: row.has_sockets,
            can_take_calls: row.can_take_calls,
            coffee_price: row.coffee_price,
        }
    }
}
