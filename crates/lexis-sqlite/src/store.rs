//! SQLite storage backend implementing the StringStore trait

use lexis_core::{
    analysis::{StringProperties, StringRecord},
    storage::{QueryStore, RecordFilter, StoreError, StringStore},
};
use rusqlite::{types::Value, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::error::{is_constraint_violation, Result, SqliteError};
use crate::json::{
    datetime_to_sql, deserialize_frequency_map, serialize_frequency_map, sql_to_datetime,
};

type StoreResult<T> = std::result::Result<T, StoreError>;

const SELECT_COLUMNS: &str = "SELECT id, value, length, is_palindrome, unique_characters, \
     word_count, sha256_hash, character_frequency_map, created_at FROM strings";

/// SQLite-backed string store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SQLite store from a connection
    ///
    /// The connection should already have migrations applied.
    /// Use [`crate::migrate::migrate`] to initialize a fresh database.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Create a new in-memory SQLite store (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        crate::migrate::migrate(&conn)?;
        Ok(Self::new(conn))
    }

    /// Create a new file-backed SQLite store
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        crate::migrate::migrate(&conn)?;
        Ok(Self::new(conn))
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn insert_record(&self, record: &StringRecord) -> Result<()> {
        let props = &record.properties;
        let frequency_json = serialize_frequency_map(&props.character_frequency_map)?;

        // The UNIQUE constraint on value makes this an atomic insert-if-absent.
        let result = self.conn.execute(
            "INSERT INTO strings (id, value, length, is_palindrome, unique_characters,
                                  word_count, sha256_hash, character_frequency_map, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                record.id,
                record.value,
                props.length as i64,
                props.is_palindrome,
                props.unique_characters as i64,
                props.word_count as i64,
                props.sha256_hash,
                frequency_json,
                datetime_to_sql(&record.created_at),
            ],
        );

        match result {
            Ok(_) => {
                debug!(id = %record.id, length = props.length, "stored string");
                Ok(())
            }
            Err(e) if is_constraint_violation(&e) => {
                Err(SqliteError::AlreadyExists(record.value.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn fetch_by_value(&self, value: &str) -> Result<Option<StringRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE value = ?", SELECT_COLUMNS))?;

        let raw = stmt.query_row([value], RawRow::from_row).optional()?;
        raw.map(RawRow::into_record).transpose()
    }

    fn fetch_where(&self, filter: &RecordFilter) -> Result<Vec<StringRecord>> {
        let (clause, params) = where_clause(filter);
        let sql = format!("{}{} ORDER BY rowid", SELECT_COLUMNS, clause);

        let mut stmt = self.conn.prepare(&sql)?;
        let raws = stmt
            .query_map(rusqlite::params_from_iter(params.iter()), RawRow::from_row)?
            .collect::<std::result::Result<Vec<RawRow>, rusqlite::Error>>()?;

        raws.into_iter().map(RawRow::into_record).collect()
    }
}

impl StringStore for SqliteStore {
    fn insert(&mut self, record: StringRecord) -> StoreResult<()> {
        Ok(self.insert_record(&record)?)
    }

    fn get_by_value(&self, value: &str) -> StoreResult<Option<StringRecord>> {
        Ok(self.fetch_by_value(value)?)
    }

    fn exists(&self, value: &str) -> StoreResult<bool> {
        let exists = self
            .conn
            .prepare("SELECT 1 FROM strings WHERE value = ?")
            .and_then(|mut stmt| stmt.exists([value]))
            .map_err(SqliteError::from)?;
        Ok(exists)
    }

    fn delete(&mut self, value: &str) -> StoreResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM strings WHERE value = ?", [value])
            .map_err(SqliteError::from)?;

        debug!(deleted = rows_affected > 0, "delete string");
        Ok(rows_affected > 0)
    }

    fn all(&self) -> StoreResult<Vec<StringRecord>> {
        Ok(self.fetch_where(&RecordFilter::default())?)
    }

    fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM strings", [], |row| row.get(0))
            .map_err(SqliteError::from)?;
        Ok(count as usize)
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM strings", [])
            .map_err(SqliteError::from)?;

        Ok(())
    }
}

impl QueryStore for SqliteStore {
    fn query(&self, filter: &RecordFilter) -> StoreResult<Vec<StringRecord>> {
        Ok(self.fetch_where(filter)?)
    }
}

/// Build the WHERE clause and its positional parameters for `filter`.
fn where_clause(filter: &RecordFilter) -> (String, Vec<Value>) {
    let mut conditions: Vec<&str> = Vec::new();
    let mut params: Vec<Value> = Vec::new();

    if let Some(is_palindrome) = filter.is_palindrome {
        conditions.push("is_palindrome = ?");
        params.push(Value::Integer(is_palindrome as i64));
    }
    if let Some(min) = filter.min_length {
        conditions.push("length >= ?");
        params.push(Value::Integer(saturating_i64(min)));
    }
    if let Some(max) = filter.max_length {
        conditions.push("length <= ?");
        params.push(Value::Integer(saturating_i64(max)));
    }
    if let Some(words) = filter.word_count {
        conditions.push("word_count = ?");
        params.push(Value::Integer(saturating_i64(words)));
    }
    if let Some(needle) = &filter.contains_character {
        // instr() is case-sensitive, unlike LIKE
        conditions.push("instr(value, ?) > 0");
        params.push(Value::Text(needle.clone()));
    }

    if conditions.is_empty() {
        (String::new(), params)
    } else {
        (format!(" WHERE {}", conditions.join(" AND ")), params)
    }
}

fn saturating_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Column values as read from a row, before decoding.
struct RawRow {
    id: String,
    value: String,
    length: i64,
    is_palindrome: bool,
    unique_characters: i64,
    word_count: i64,
    sha256_hash: String,
    frequency_json: String,
    created_at: String,
}

impl RawRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            value: row.get(1)?,
            length: row.get(2)?,
            is_palindrome: row.get(3)?,
            unique_characters: row.get(4)?,
            word_count: row.get(5)?,
            sha256_hash: row.get(6)?,
            frequency_json: row.get(7)?,
            created_at: row.get(8)?,
        })
    }

    fn into_record(self) -> Result<StringRecord> {
        Ok(StringRecord {
            id: self.id,
            value: self.value,
            properties: StringProperties {
                length: self.length as usize,
                is_palindrome: self.is_palindrome,
                unique_characters: self.unique_characters as usize,
                word_count: self.word_count as usize,
                sha256_hash: self.sha256_hash,
                character_frequency_map: deserialize_frequency_map(&self.frequency_json)?,
            },
            created_at: sql_to_datetime(&self.created_at)?,
        })
    }
}
