//! `SQLite` backend for the diary store.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::{
    CompletedMilestone, CompletedVaccination, DiaryEntry, Mood, StoredPhoto, UserProfile,
};

use super::{migrations, DiaryStore, StorageStats};

const MEMORY_PATH: &str = ":memory:";

const ENTRY_COLUMNS: &str = "date, id, content, images, mood, skills, height, weight";

const PHOTO_COLUMNS: &str = "id, entry_date, blob, mime, width, height, created_at";

/// Diary store backed by an `SQLite` database file.
///
/// The connection is shared behind a mutex. Every trait call runs on the
/// blocking thread pool and holds the lock for one statement or transaction.
#[derive(Debug)]
pub struct SqliteStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open or create a database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist,
    /// and brings the schema up to date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        migrations::initialize_schema(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self {
            path,
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an in-memory database, mostly for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(MEMORY_PATH),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(MEMORY_PATH),
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get database statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn stats(&self) -> Result<StorageStats> {
        let (has_profile, entries, vaccinations, milestones, photos, photo_bytes) =
            {
                let conn = lock(&self.conn)?;
                (
                    count(&conn, "profile")? > 0,
                    count(&conn, "entries")?,
                    count(&conn, "vaccinations")?,
                    count(&conn, "milestones")?,
                    count(&conn, "photos")?,
                    conn.query_row(
                        "SELECT COALESCE(SUM(LENGTH(blob)), 0) FROM photos",
                        [],
                        |row| row.get::<_, i64>(0),
                    )?,
                )
            };

        let db_size_bytes = if self.path.to_string_lossy() == MEMORY_PATH {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(StorageStats {
            has_profile,
            entries,
            vaccinations,
            milestones,
            photos,
            photo_bytes,
            db_size_bytes,
        })
    }

    async fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        run_blocking(move || {
            let conn = lock(&conn)?;
            Ok(f(&conn)?)
        })
        .await
    }

    async fn write<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        run_blocking(move || {
            let mut conn = lock(&conn)?;
            f(&mut conn).map_err(write_error)
        })
        .await
    }
}

fn lock(conn: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|_| Error::internal("database connection lock poisoned"))
}

async fn run_blocking<T: Send + 'static>(
    f: impl FnOnce() -> Result<T> + Send + 'static,
) -> Result<T> {
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::internal(format!("storage task failed: {e}")))?
}

/// Classify a failed write: a full or read-only medium is reported as
/// unavailable storage, anything else as a failed query.
fn write_error(err: rusqlite::Error) -> Error {
    match err.sqlite_error_code() {
        Some(ErrorCode::DiskFull | ErrorCode::ReadOnly | ErrorCode::CannotOpen) => {
            Error::storage_unavailable(err.to_string())
        }
        _ => Error::DatabaseQuery(err),
    }
}

fn count(conn: &Connection, table: &str) -> rusqlite::Result<i64> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> rusqlite::Result<String> {
    serde_json::to_string(value).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

fn json_column<T: DeserializeOwned>(row: &Row, idx: usize) -> rusqlite::Result<T> {
    let text: String = row.get(idx)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn row_to_entry(row: &Row) -> rusqlite::Result<DiaryEntry> {
    let mood: String = row.get(4)?;
    let mood = mood.parse().unwrap_or_else(|_| {
        warn!("Unknown mood in database: {}, defaulting to GOOD", mood);
        Mood::Good
    });

    Ok(DiaryEntry {
        date: row.get(0)?,
        id: row.get(1)?,
        content: row.get(2)?,
        images: json_column(row, 3)?,
        mood,
        skills: json_column(row, 5)?,
        height: row.get(6)?,
        weight: row.get(7)?,
    })
}

fn row_to_photo(row: &Row) -> rusqlite::Result<StoredPhoto> {
    Ok(StoredPhoto {
        id: row.get(0)?,
        entry_date: row.get(1)?,
        blob: row.get(2)?,
        mime: row.get(3)?,
        width: row.get(4)?,
        height: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn insert_entry(conn: &Connection, entry: &DiaryEntry) -> rusqlite::Result<()> {
    conn.execute(
        &format!("INSERT OR REPLACE INTO entries ({ENTRY_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
        params![
            entry.date,
            entry.id,
            entry.content,
            to_json(&entry.images)?,
            entry.mood.as_str(),
            to_json(&entry.skills)?,
            entry.height,
            entry.weight,
        ],
    )?;
    Ok(())
}

fn insert_vaccination(conn: &Connection, record: &CompletedVaccination) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO vaccinations (id, date) VALUES (?1, ?2)",
        params![record.id, record.date],
    )?;
    Ok(())
}

fn insert_milestone(conn: &Connection, record: &CompletedMilestone) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO milestones (id, date) VALUES (?1, ?2)",
        params![record.id, record.date],
    )?;
    Ok(())
}

/// Run `insert` for every row inside one transaction, optionally clearing
/// `table` first.
fn write_all<T>(
    conn: &mut Connection,
    clear: Option<&str>,
    rows: &[T],
    insert: fn(&Connection, &T) -> rusqlite::Result<()>,
) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    if let Some(table) = clear {
        tx.execute(&format!("DELETE FROM {table}"), [])?;
    }
    for row in rows {
        insert(&tx, row)?;
    }
    tx.commit()
}

fn get_value(conn: &Connection, table: &str, key: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row(
        &format!("SELECT value FROM {table} WHERE key = ?1"),
        [key],
        |row| row.get(0),
    )
    .optional()
}

fn put_value(conn: &Connection, table: &str, key: &str, value: &Value) -> rusqlite::Result<()> {
    conn.execute(
        &format!("INSERT OR REPLACE INTO {table} (key, value) VALUES (?1, ?2)"),
        params![key, to_json(value)?],
    )?;
    Ok(())
}

impl SqliteStore {
    async fn get_json(&self, table: &'static str, key: &str) -> Result<Option<Value>> {
        let key = key.to_string();
        let raw = self.read(move |conn| get_value(conn, table, &key)).await?;
        raw.map(|text| serde_json::from_str(&text).map_err(Error::from))
            .transpose()
    }
}

#[async_trait]
impl DiaryStore for SqliteStore {
    async fn profile(&self) -> Result<Option<UserProfile>> {
        self.read(|conn| {
            conn.query_row(
                "SELECT name, birth_date, notification_time FROM profile WHERE key = 1",
                [],
                |row| {
                    Ok(UserProfile {
                        name: row.get(0)?,
                        birth_date: row.get(1)?,
                        notification_time: row.get(2)?,
                    })
                },
            )
            .optional()
        })
        .await
    }

    async fn put_profile(&self, profile: &UserProfile) -> Result<()> {
        let profile = profile.clone();
        self.write(move |conn| {
            conn.execute(
                r"
                INSERT OR REPLACE INTO profile (key, name, birth_date, notification_time)
                VALUES (1, ?1, ?2, ?3)
                ",
                params![profile.name, profile.birth_date, profile.notification_time],
            )
            .map(|_| ())
        })
        .await
    }

    async fn delete_profile(&self) -> Result<()> {
        self.write(|conn| conn.execute("DELETE FROM profile", []).map(|_| ()))
            .await
    }

    async fn entries(&self) -> Result<Vec<DiaryEntry>> {
        self.read(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {ENTRY_COLUMNS} FROM entries ORDER BY date"))?;
            let entries = stmt
                .query_map([], row_to_entry)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
        .await
    }

    async fn entry(&self, date: NaiveDate) -> Result<Option<DiaryEntry>> {
        self.read(move |conn| {
            conn.query_row(
                &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE date = ?1"),
                [date],
                row_to_entry,
            )
            .optional()
        })
        .await
    }

    async fn put_entries(&self, entries: &[DiaryEntry]) -> Result<()> {
        let entries = entries.to_vec();
        self.write(move |conn| write_all(conn, None, &entries, insert_entry))
            .await
    }

    async fn replace_entries(&self, entries: &[DiaryEntry]) -> Result<()> {
        debug!("Replacing all entries with {} rows", entries.len());
        let entries = entries.to_vec();
        self.write(move |conn| write_all(conn, Some("entries"), &entries, insert_entry))
            .await
    }

    async fn vaccinations(&self) -> Result<Vec<CompletedVaccination>> {
        self.read(|conn| {
            let mut stmt = conn.prepare("SELECT id, date FROM vaccinations ORDER BY rowid")?;
            let records = stmt
                .query_map([], |row| {
                    Ok(CompletedVaccination {
                        id: row.get(0)?,
                        date: row.get(1)?,
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })
        .await
    }

    async fn put_vaccinations(&self, records: &[CompletedVaccination]) -> Result<()> {
        let records = records.to_vec();
        self.write(move |conn| write_all(conn, None, &records, insert_vaccination))
            .await
    }

    async fn replace_vaccinations(&self, records: &[CompletedVaccination]) -> Result<()> {
        let records = records.to_vec();
        self.write(move |conn| write_all(conn, Some("vaccinations"), &records, insert_vaccination))
            .await
    }

    async fn milestones(&self) -> Result<Vec<CompletedMilestone>> {
        self.read(|conn| {
            let mut stmt = conn.prepare("SELECT id, date FROM milestones ORDER BY rowid")?;
            let records = stmt
                .query_map([], |row| {
                    Ok(CompletedMilestone {
                        id: row.get(0)?,
                        date: row.get(1)?,
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })
        .await
    }

    async fn put_milestones(&self, records: &[CompletedMilestone]) -> Result<()> {
        let records = records.to_vec();
        self.write(move |conn| write_all(conn, None, &records, insert_milestone))
            .await
    }

    async fn replace_milestones(&self, records: &[CompletedMilestone]) -> Result<()> {
        let records = records.to_vec();
        self.write(move |conn| write_all(conn, Some("milestones"), &records, insert_milestone))
            .await
    }

    async fn put_photo(&self, photo: &StoredPhoto) -> Result<()> {
        let photo = photo.clone();
        self.write(move |conn| {
            conn.execute(
                &format!(
                    "INSERT OR REPLACE INTO photos ({PHOTO_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
                ),
                params![
                    photo.id,
                    photo.entry_date,
                    photo.blob,
                    photo.mime,
                    photo.width,
                    photo.height,
                    photo.created_at,
                ],
            )
            .map(|_| ())
        })
        .await
    }

    async fn photo(&self, id: &str) -> Result<Option<StoredPhoto>> {
        let id = id.to_string();
        self.read(move |conn| {
            conn.query_row(
                &format!("SELECT {PHOTO_COLUMNS} FROM photos WHERE id = ?1"),
                [&id],
                row_to_photo,
            )
            .optional()
        })
        .await
    }

    async fn photos_for(&self, date: NaiveDate) -> Result<Vec<StoredPhoto>> {
        self.read(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {PHOTO_COLUMNS} FROM photos WHERE entry_date = ?1 ORDER BY created_at, rowid"
            ))?;
            let photos = stmt
                .query_map([date], row_to_photo)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(photos)
        })
        .await
    }

    async fn delete_photo(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        let affected = self
            .write(move |conn| conn.execute("DELETE FROM photos WHERE id = ?1", [&id]))
            .await?;
        Ok(affected > 0)
    }

    async fn photo_count(&self) -> Result<usize> {
        let n = self.read(|conn| count(conn, "photos")).await?;
        Ok(usize::try_from(n).unwrap_or_default())
    }

    async fn setting(&self, key: &str) -> Result<Option<Value>> {
        self.get_json("settings", key).await
    }

    async fn put_setting(&self, key: &str, value: &Value) -> Result<()> {
        let (key, value) = (key.to_string(), value.clone());
        self.write(move |conn| put_value(conn, "settings", &key, &value))
            .await
    }

    async fn meta(&self, key: &str) -> Result<Option<Value>> {
        self.get_json("meta", key).await
    }

    async fn put_meta(&self, key: &str, value: &Value) -> Result<()> {
        let (key, value) = (key.to_string(), value.clone());
        self.write(move |conn| put_value(conn, "meta", &key, &value))
            .await
    }
}
