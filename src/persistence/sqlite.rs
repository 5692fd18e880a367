use super::{AttendanceStore, PersistenceResult};
use crate::attendance::AttendanceRecord;
use crate::event::Event;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

/// SQLite-backed store for the override calendar and for each student's
/// attended-class set. Override rows are keyed by event identity; attendance
/// rows by roll number.
pub struct SqliteAttendanceStore {
    connection: Mutex<Connection>,
}

impl SqliteAttendanceStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS override_events (
                identity TEXT PRIMARY KEY,
                event_json TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS attendance (
                roll_no INTEGER PRIMARY KEY,
                attended_json TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }

    pub fn save_overrides(&self, events: &[Event]) -> PersistenceResult<()> {
        super::validate_events(events)?;
        let mut conn = self.connection.lock().expect("sqlite mutex poisoned");
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM override_events", [])?;
        {
            let mut stmt =
                tx.prepare("INSERT OR REPLACE INTO override_events (identity, event_json) VALUES (?1, ?2)")?;
            for event in events {
                let json = serde_json::to_string(event)?;
                stmt.execute(params![event.identity(), json])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    pub fn load_overrides(&self) -> PersistenceResult<Vec<Event>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt =
            conn.prepare("SELECT event_json FROM override_events ORDER BY identity ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut events = Vec::new();
        for json in rows {
            let json = json?;
            let event: Event = serde_json::from_str(&json)?;
            events.push(event);
        }
        super::validate_events(&events)?;
        Ok(events)
    }
}

impl AttendanceStore for SqliteAttendanceStore {
    fn save_attendance(&self, roll_no: u32, record: &AttendanceRecord) -> PersistenceResult<()> {
        let json = serde_json::to_string(record)?;
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        conn.execute(
            "INSERT OR REPLACE INTO attendance (roll_no, attended_json) VALUES (?1, ?2)",
            params![roll_no, json],
        )?;
        Ok(())
    }

    fn load_attendance(&self, roll_no: u32) -> PersistenceResult<Option<AttendanceRecord>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt = conn.prepare("SELECT attended_json FROM attendance WHERE roll_no = ?1")?;
        let json_opt: Option<String> = stmt
            .query_row(params![roll_no], |row| row.get(0))
            .optional()?;

        let Some(json) = json_opt else {
            return Ok(None);
        };
        let record: AttendanceRecord = serde_json::from_str(&json)?;
        Ok(Some(record))
    }
}
