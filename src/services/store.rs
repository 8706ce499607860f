use crate::config::Settings;
use crate::models::product::{Product, ProductFields};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqlitePool, Transaction};
use std::str::FromStr;
use std::time::Duration;

const CREATE_PRODUCTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS products (
    product_id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_name TEXT NOT NULL,
    product_price REAL NOT NULL,
    description TEXT NOT NULL,
    stock INTEGER NOT NULL
)";

const CREATE_PRODUCT_NAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS ix_products_product_name ON products (product_name)";

const IN_MEMORY_URL: &str = "sqlite::memory:";

// A write statement matching no rows; running it first takes the RESERVED lock.
const CLAIM_WRITE_LOCK: &str = "UPDATE products SET stock = stock WHERE 0";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const PRODUCT_COLUMNS: &str = "product_id, product_name, product_price, description, stock";

/// Ordering applied by [`Session::filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    Ascending,
    Descending,
}

/// Creates one [`Session`] per request over a shared connection pool.
#[derive(Debug, Clone)]
pub struct SessionFactory {
    pool: SqlitePool,
}

impl SessionFactory {
    /// Connects to `settings.database_url` and makes sure the `products` table exists.
    pub async fn connect(settings: &Settings) -> Result<Self, sqlx::Error> {
        if is_in_memory(&settings.database_url) {
            return Self::in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(&settings.database_url)?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);
        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// A private in-memory database, dropped together with the factory.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        // The database lives only as long as a connection to it, so keep exactly one alive.
        let options = SqliteConnectOptions::from_str(IN_MEMORY_URL)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(CREATE_PRODUCTS_TABLE).execute(&pool).await?;
        sqlx::query(CREATE_PRODUCT_NAME_INDEX).execute(&pool).await?;
        Ok(SessionFactory { pool })
    }

    /// Opens a session bound to one pooled connection.
    ///
    /// The session is released when dropped; uncommitted writes are rolled back.
    pub async fn open_session(&self) -> Result<Session, sqlx::Error> {
        let tx = self.pool.begin().await?;
        Ok(Session { tx })
    }

    /// Opens a session that holds the database write lock from its first statement.
    ///
    /// Sessions that read a row and then write it must start here. A deferred
    /// transaction that already holds a read lock cannot wait for the write lock,
    /// so two overlapping read-then-write sessions would fail with `SQLITE_BUSY`.
    /// Taking the lock up front makes the second writer wait on the busy timeout
    /// and then run on top of the first one's commit.
    pub async fn open_write_session(&self) -> Result<Session, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(CLAIM_WRITE_LOCK).execute(&mut *tx).await?;
        Ok(Session { tx })
    }
}

/// `true` for URLs naming an in-memory database, e.g. `sqlite::memory:`,
/// `sqlite://:memory:` or any URL with `mode=memory`.
fn is_in_memory(url: &str) -> bool {
    let rest = url.trim_start_matches("sqlite:").trim_start_matches("//");
    let (database, params) = match rest.split_once('?') {
        Some((database, params)) => (database, params),
        None => (rest, ""),
    };

    database == ":memory:" || params.split('&').any(|param| param == "mode=memory")
}

/// A transaction scoped to a single request.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    pub async fn insert(&mut self, fields: &ProductFields) -> Result<Product, sqlx::Error> {
        let sql = format!(
            "INSERT INTO products (product_name, product_price, description, stock) \
             VALUES (?, ?, ?, ?) RETURNING {}",
            PRODUCT_COLUMNS
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(&fields.product_name)
            .bind(fields.product_price)
            .bind(&fields.description)
            .bind(fields.stock)
            .fetch_one(&mut *self.tx)
            .await
    }

    /// Rows in whatever order the store returns them.
    pub async fn list(&mut self, skip: u32, limit: u32) -> Result<Vec<Product>, sqlx::Error> {
        let sql = format!("SELECT {} FROM products LIMIT ? OFFSET ?", PRODUCT_COLUMNS);

        sqlx::query_as::<_, Product>(&sql)
            .bind(i64::from(limit))
            .bind(i64::from(skip))
            .fetch_all(&mut *self.tx)
            .await
    }

    pub async fn find(&mut self, product_id: i64) -> Result<Option<Product>, sqlx::Error> {
        let sql = format!("SELECT {} FROM products WHERE product_id = ?", PRODUCT_COLUMNS);

        sqlx::query_as::<_, Product>(&sql)
            .bind(product_id)
            .fetch_optional(&mut *self.tx)
            .await
    }

    /// Writes every mutable column of `product`.
    pub async fn update(&mut self, product: &Product) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE products \
             SET product_name = ?, product_price = ?, description = ?, stock = ? \
             WHERE product_id = ?",
        )
        .bind(&product.product_name)
        .bind(product.product_price)
        .bind(&product.description)
        .bind(product.stock)
        .bind(product.product_id)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    pub async fn delete(&mut self, product_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM products WHERE product_id = ?")
            .bind(product_id)
            .execute(&mut *self.tx)
            .await?;

        Ok(())
    }

    /// Products whose `description` equals `category`, optionally ordered by price.
    pub async fn filter(
        &mut self,
        category: Option<&str>,
        order: Option<PriceOrder>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let mut query =
            QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM products", PRODUCT_COLUMNS));

        if let Some(category) = category {
            query.push(" WHERE description = ").push_bind(category);
        }

        match order {
            Some(PriceOrder::Ascending) => {
                query.push(" ORDER BY product_price ASC");
            }
            Some(PriceOrder::Descending) => {
                query.push(" ORDER BY product_price DESC");
            }
            None => {}
        }

        query
            .build_query_as::<Product>()
            .fetch_all(&mut *self.tx)
            .await
    }

    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }
}
