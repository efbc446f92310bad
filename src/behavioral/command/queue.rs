//! A small persistent job queue backed by one SQLite table.
//!
//! Rows live in `commands(id, command, status)`. The command column holds the
//! JSON form of the queued value and the status column one of [`Status`].
//! The worker takes the lowest pending id, runs it, and marks the row
//! completed or failed, so each row runs at most once.

use std::marker::PhantomData;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending = 0,
    Completed = 1,
    Failed = 2,
}

impl TryFrom<i64> for Status {
    type Error = PatternError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Status::Pending),
            1 => Ok(Status::Completed),
            2 => Ok(Status::Failed),
            other => Err(PatternError::UnknownStatus(other)),
        }
    }
}

/// Something the queue can store and later run.
///
/// `execute` receives the queue itself so a command can enqueue follow-up
/// work, plus whatever context the command family needs (a fetcher, say).
pub trait QueuedCommand: Serialize + DeserializeOwned + Sized {
    type Context: ?Sized;

    fn execute(&self, queue: &Queue<Self>, context: &Self::Context) -> Result<Vec<String>>;
}

/// A decoded pending row.
#[derive(Debug, Clone, PartialEq)]
pub struct Job<C> {
    pub id: i64,
    pub command: C,
}

/// What one `work` pass did.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkReport {
    pub completed: usize,
    pub failed: usize,
    pub output: Vec<String>,
}

pub struct Queue<C> {
    conn: Connection,
    _command: PhantomData<C>,
}

impl<C: QueuedCommand> Queue<C> {
    /// Opens (or creates) the database file and makes sure the table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening command queue");
        Self::with_connection(Connection::open(path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS commands (
                id INTEGER PRIMARY KEY NOT NULL,
                command TEXT,
                status INTEGER
            )",
            [],
        )?;
        Ok(Self {
            conn,
            _command: PhantomData,
        })
    }

    /// Stores the command as pending and returns its row id.
    pub fn add(&self, command: &C) -> Result<i64> {
        let encoded = serde_json::to_string(command)?;
        self.conn.execute(
            "INSERT INTO commands (command, status) VALUES (?1, ?2)",
            params![encoded, Status::Pending as i64],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// True when no row is pending; completed and failed rows don't count.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.pending_count()? == 0)
    }

    pub fn pending_count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(id) FROM commands WHERE status = ?1",
            params![Status::Pending as i64],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    pub fn next_pending(&self) -> Result<Option<Job<C>>> {
        match self.next_pending_row()? {
            Some((id, encoded)) => Ok(Some(Job {
                id,
                command: serde_json::from_str(&encoded)?,
            })),
            None => Ok(None),
        }
    }

    fn next_pending_row(&self) -> Result<Option<(i64, String)>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, command FROM commands WHERE status = ?1 ORDER BY id LIMIT 1",
                params![Status::Pending as i64],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, Option<String>>(1)?)),
            )
            .optional()?;
        Ok(row.map(|(id, command)| (id, command.unwrap_or_default())))
    }

    pub fn complete(&self, id: i64) -> Result<()> {
        self.set_status(id, Status::Completed)
    }

    pub fn fail(&self, id: i64) -> Result<()> {
        self.set_status(id, Status::Failed)
    }

    fn set_status(&self, id: i64, status: Status) -> Result<()> {
        self.conn.execute(
            "UPDATE commands SET status = ?1 WHERE id = ?2",
            params![status as i64, id],
        )?;
        Ok(())
    }

    /// Status of one row, `None` if the id was never queued.
    pub fn status(&self, id: i64) -> Result<Option<Status>> {
        let raw: Option<i64> = self
            .conn
            .query_row(
                "SELECT status FROM commands WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        raw.map(Status::try_from).transpose()
    }

    /// Runs pending commands until none are left, including any that the
    /// running commands add along the way.
    ///
    /// A command that errors (or a row that no longer decodes) is marked
    /// failed and logged; the loop carries on. Database errors stop it.
    pub fn work(&self, context: &C::Context) -> Result<WorkReport> {
        let mut report = WorkReport::default();

        while let Some((id, encoded)) = self.next_pending_row()? {
            let outcome = serde_json::from_str::<C>(&encoded)
                .map_err(PatternError::from)
                .and_then(|command| command.execute(self, context));

            match outcome {
                Ok(lines) => {
                    self.complete(id)?;
                    report.completed += 1;
                    report.output.extend(lines);
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, "command failed");
                    self.fail(id)?;
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            completed = report.completed,
            failed = report.failed,
            "queue drained"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(tag = "type")]
    enum Countdown {
        Tick { remaining: u32 },
        Boom,
    }

    impl QueuedCommand for Countdown {
        type Context = ();

        fn execute(&self, queue: &Queue<Self>, _context: &()) -> Result<Vec<String>> {
            match self {
                Countdown::Tick { remaining: 0 } => Ok(vec!["liftoff".to_string()]),
                Countdown::Tick { remaining } => {
                    queue.add(&Countdown::Tick {
                        remaining: remaining - 1,
                    })?;
                    Ok(vec![format!("tick {remaining}")])
                }
                Countdown::Boom => Err(PatternError::invalid_query("boom")),
            }
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::try_from(0_i64).unwrap(), Status::Pending);
        assert_eq!(Status::try_from(2_i64).unwrap(), Status::Failed);
        assert!(matches!(
            Status::try_from(7_i64),
            Err(PatternError::UnknownStatus(7))
        ));
    }

    #[test]
    fn test_next_pending_is_lowest_id() {
        let queue = Queue::<Countdown>::in_memory().unwrap();
        assert!(queue.is_empty().unwrap());
        assert!(queue.next_pending().unwrap().is_none());

        let first = queue.add(&Countdown::Boom).unwrap();
        queue.add(&Countdown::Tick { remaining: 1 }).unwrap();

        let job = queue.next_pending().unwrap().unwrap();
        assert_eq!(job.id, first);
        assert_eq!(job.command, Countdown::Boom);

        queue.complete(first).unwrap();
        let job = queue.next_pending().unwrap().unwrap();
        assert_eq!(job.command, Countdown::Tick { remaining: 1 });
    }

    #[test]
    fn test_work_follows_enqueued_commands() {
        let queue = Queue::<Countdown>::in_memory().unwrap();
        queue.add(&Countdown::Tick { remaining: 2 }).unwrap();

        let report = queue.work(&()).unwrap();
        assert_eq!(report.output, vec!["tick 2", "tick 1", "liftoff"]);
        assert_eq!(report.completed, 3);
        assert!(queue.is_empty().unwrap());
    }

    #[test]
    fn test_failed_command_is_not_retried() {
        let queue = Queue::<Countdown>::in_memory().unwrap();
        let boom = queue.add(&Countdown::Boom).unwrap();
        let tick = queue.add(&Countdown::Tick { remaining: 0 }).unwrap();

        let report = queue.work(&()).unwrap();
        assert_eq!(report.failed, 1);
        assert_eq!(report.completed, 1);
        assert_eq!(queue.status(boom).unwrap(), Some(Status::Failed));
        assert_eq!(queue.status(tick).unwrap(), Some(Status::Completed));

        let again = queue.work(&()).unwrap();
        assert_eq!(again, WorkReport::default());
    }

    #[test]
    fn test_undecodable_row_is_failed() {
        let queue = Queue::<Countdown>::in_memory().unwrap();
        queue
            .conn
            .execute(
                "INSERT INTO commands (command, status) VALUES ('not json', 0)",
                [],
            )
            .unwrap();

        let report = queue.work(&()).unwrap();
        assert_eq!(report.failed, 1);
        assert_eq!(queue.status(1).unwrap(), Some(Status::Failed));
    }
}
