//! SQLite-backed rate store.

use crate::repository::{RateStore, Result, StoreError, Stored};
use chrono::Utc;
use directories::ProjectDirs;
use eurofx_types::{DatedRateSet, Quote};
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::debug;

const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS rate_sets (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    date       TEXT    NOT NULL UNIQUE,
    created_at TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS quotes (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    rate_set_id INTEGER NOT NULL REFERENCES rate_sets(id) ON DELETE CASCADE,
    symbol      TEXT    NOT NULL,
    value       TEXT    NOT NULL,
    UNIQUE (rate_set_id, symbol)
);

CREATE INDEX IF NOT EXISTS idx_quotes_rate_set ON quotes(rate_set_id);
";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Rate store persisted in a SQLite database.
///
/// Each set is one row in `rate_sets` with its quotes in `quotes`. Values are
/// stored as decimal text so they read back exactly as published.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path`, creating parent
    /// directories and the schema as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the database
    /// cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(&path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(SCHEMA)?;
        debug!(path = %path.display(), "opened rate database");

        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path),
        })
    }

    /// Opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Returns the default database location.
    ///
    /// - Linux: `~/.local/share/eurofx/rates.db`
    /// - macOS: `~/Library/Application Support/eurofx/rates.db`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\eurofx\rates.db`
    ///
    /// Falls back to `~/.eurofx/rates.db` if the platform location cannot be
    /// determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "eurofx")
            .map_or_else(dirs_fallback, |proj_dirs| proj_dirs.data_dir().to_path_buf())
            .join("rates.db")
    }

    /// Returns the database path, or `None` for an in-memory store.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".eurofx")
}

fn load_quotes(conn: &Connection, id: i64, date: &str) -> Result<Vec<Quote>> {
    let mut stmt =
        conn.prepare_cached("SELECT symbol, value FROM quotes WHERE rate_set_id = ?1 ORDER BY id")?;
    let rows = stmt.query_map(params![id], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut quotes = Vec::new();
    for row in rows {
        let (symbol, value) = row?;
        let value = Decimal::from_str(&value).map_err(|e| StoreError::Corrupt {
            date: date.to_string(),
            reason: format!("{symbol} value '{value}': {e}"),
        })?;
        quotes.push(Quote::new(symbol, value));
    }
    Ok(quotes)
}

fn load_set(conn: &Connection, id: i64, date: String) -> Result<DatedRateSet> {
    let quotes = load_quotes(conn, id, &date)?;
    Ok(DatedRateSet::with_quotes(date, quotes))
}

fn find_header(conn: &Connection, sql: &str, param: Option<&str>) -> Result<Option<(i64, String)>> {
    let map = |row: &rusqlite::Row<'_>| -> rusqlite::Result<(i64, String)> {
        Ok((row.get(0)?, row.get(1)?))
    };
    let header = match param {
        Some(p) => conn.query_row(sql, params![p], map).optional()?,
        None => conn.query_row(sql, [], map).optional()?,
    };
    Ok(header)
}

impl RateStore for SqliteStore {
    fn find_by_date(&self, date: &str) -> Result<Option<DatedRateSet>> {
        let conn = self.lock()?;
        find_header(&conn, "SELECT id, date FROM rate_sets WHERE date = ?1", Some(date))?
            .map(|(id, date)| load_set(&conn, id, date))
            .transpose()
    }

    fn find_latest(&self) -> Result<Option<DatedRateSet>> {
        let conn = self.lock()?;
        find_header(&conn, "SELECT id, date FROM rate_sets ORDER BY id DESC LIMIT 1", None)?
            .map(|(id, date)| load_set(&conn, id, date))
            .transpose()
    }

    fn find_in_range(&self, start: &str, end: &str) -> Result<Vec<DatedRateSet>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(
            "SELECT id, date FROM rate_sets WHERE date BETWEEN ?1 AND ?2 ORDER BY date",
        )?;
        let headers = stmt
            .query_map(params![start, end], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        drop(stmt);

        headers
            .into_iter()
            .map(|(id, date)| load_set(&conn, id, date))
            .collect()
    }

    fn find_or_create(&self, set: DatedRateSet) -> Result<Stored> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let inserted = tx.execute(
            "INSERT OR IGNORE INTO rate_sets (date, created_at) VALUES (?1, ?2)",
            params![set.date, Utc::now().to_rfc3339()],
        )?;

        if inserted == 0 {
            let id: i64 = tx.query_row(
                "SELECT id FROM rate_sets WHERE date = ?1",
                params![set.date],
                |row| row.get(0),
            )?;
            let existing = load_set(&tx, id, set.date)?;
            tx.commit()?;
            debug!(date = %existing.date, "rate set already stored");
            return Ok(Stored::existing(existing));
        }

        let id = tx.last_insert_rowid();
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO quotes (rate_set_id, symbol, value) VALUES (?1, ?2, ?3)",
            )?;
            for quote in &set.quotes {
                stmt.execute(params![id, quote.symbol, quote.value.to_string()])?;
            }
        }
        tx.commit()?;
        debug!(date = %set.date, quotes = set.len(), "rate set stored");

        Ok(Stored::created(set))
    }

    fn exists_with_date(&self, date: &str) -> Result<bool> {
        let conn = self.lock()?;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM rate_sets WHERE date = ?1)",
            params![date],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn count(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM rate_sets", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn clear(&self) -> Result<()> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute_batch(
            "DELETE FROM quotes;
             DELETE FROM rate_sets;
             DELETE FROM sqlite_sequence WHERE name IN ('quotes', 'rate_sets');",
        )?;
        tx.commit()?;
        debug!("rate database cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn sample(date: &str) -> DatedRateSet {
        DatedRateSet::with_quotes(
            date,
            vec![
                Quote::new("USD", dec!(1.1413)),
                Quote::new("JPY", dec!(122.76)),
                Quote::new("BRL", dec!(4.4000)),
            ],
        )
        .with_base_quote()
    }

    #[test]
    fn test_round_trip_preserves_order_and_values() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.find_or_create(sample("2019-01-04")).unwrap();

        let loaded = store.find_by_date("2019-01-04").unwrap().unwrap();
        assert_eq!(loaded, sample("2019-01-04"));
        assert_eq!(loaded.symbols().collect::<Vec<_>>(), ["USD", "JPY", "BRL", "EUR"]);
        assert_eq!(loaded.quote("BRL").unwrap().value.to_string(), "4.4000");
    }

    #[test]
    fn test_find_or_create_keeps_first_write() {
        let store = SqliteStore::open_in_memory().unwrap();

        let first = store.find_or_create(sample("2019-01-04")).unwrap();
        let replacement =
            DatedRateSet::with_quotes("2019-01-04", vec![Quote::new("USD", dec!(2))]);
        let second = store.find_or_create(replacement).unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(second.set, sample("2019-01-04"));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_find_latest_is_last_inserted() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.find_latest().unwrap(), None);

        store.find_or_create(sample("2019-01-01")).unwrap();
        store.find_or_create(sample("2018-01-01")).unwrap();

        assert_eq!(store.find_latest().unwrap().unwrap().date, "2018-01-01");
    }

    #[test]
    fn test_find_in_range() {
        let store = SqliteStore::open_in_memory().unwrap();
        for date in ["2019-01-10", "2019-01-04", "2019-01-09", "2019-01-08", "2019-01-07"] {
            store.find_or_create(sample(date)).unwrap();
        }

        let found = store.find_in_range("2019-01-09", "2019-01-10").unwrap();
        let dates: Vec<_> = found.iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, ["2019-01-09", "2019-01-10"]);
        assert!(found.iter().all(|s| s.len() == 4));

        assert!(store.find_in_range("2020-01-01", "2020-12-31").unwrap().is_empty());
    }

    #[test]
    fn test_exists_with_date() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(!store.exists_with_date("1999-01-04").unwrap());
        store.find_or_create(sample("1999-01-04")).unwrap();
        assert!(store.exists_with_date("1999-01-04").unwrap());
    }

    #[test]
    fn test_clear_resets_store() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.find_or_create(sample("2019-01-04")).unwrap();
        store.find_or_create(sample("2019-01-07")).unwrap();

        store.clear().unwrap();

        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(store.find_latest().unwrap(), None);
        store.find_or_create(sample("2019-01-08")).unwrap();
        assert_eq!(store.find_latest().unwrap().unwrap().date, "2019-01-08");
    }

    #[test]
    fn test_open_creates_directories_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("rates.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            assert_eq!(store.path(), Some(path.as_path()));
            store.find_or_create(sample("2019-01-04")).unwrap();
        }

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.count().unwrap(), 1);
        assert_eq!(
            reopened.find_by_date("2019-01-04").unwrap().unwrap(),
            sample("2019-01-04")
        );
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.find_or_create(sample("2019-01-04")).unwrap();
        store
            .lock()
            .unwrap()
            .execute("UPDATE quotes SET value = 'abc' WHERE symbol = 'USD'", [])
            .unwrap();

        let err = store.find_by_date("2019-01-04").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref date, .. } if date == "2019-01-04"));
    }

    #[test]
    fn test_default_path() {
        let path = SqliteStore::default_path();
        assert!(path.ends_with("rates.db"));
        assert!(path.to_string_lossy().contains("eurofx"));
    }
}
