//! Append-only log of finished quiz attempts, one JSON object per line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::i18n::Language;
use crate::session::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub id: Uuid,
    pub session_id: Uuid,
    pub score: u32,
    pub accuracy: u32,
    pub correct: usize,
    pub total: usize,
    pub language: Language,
    /// Subject the quiz was limited to; unset for a mixed quiz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub finished_at: DateTime<Utc>,
}

impl AttemptRecord {
    pub fn new(
        session_id: Uuid,
        outcome: &Outcome,
        language: Language,
        subject: Option<String>,
        badge: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id,
            score: outcome.score,
            accuracy: outcome.accuracy,
            correct: outcome.correct,
            total: outcome.total,
            language,
            subject,
            badge,
            finished_at: Utc::now(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AttemptLogError {
    #[error("attempt log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode attempt: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read every attempt in the log.
///
/// A missing file is an empty history. Lines that do not parse are skipped.
pub fn read_attempts<P: AsRef<Path>>(path: P) -> Result<Vec<AttemptRecord>, AttemptLogError> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(AttemptLogError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut records = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<AttemptRecord>(line) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(path = %path.display(), line = line_no + 1, error = %err, "skipping malformed attempt");
            }
        }
    }
    Ok(records)
}

async fn append_attempt(path: &Path, record: &AttemptRecord) -> Result<(), AttemptLogError> {
    let mut line = serde_json::to_string(record)?;
    line.push('\n');

    let io_err = |source| AttemptLogError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(io_err)?;
    file.write_all(line.as_bytes()).await.map_err(io_err)?;
    file.flush().await.map_err(io_err)?;
    Ok(())
}

/// Spawn the task that appends attempts sent on the returned channel.
///
/// The task ends once every sender is dropped. Write failures are logged and
/// do not stop the task.
pub fn spawn_writer(path: PathBuf) -> (mpsc::UnboundedSender<AttemptRecord>, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<AttemptRecord>();

    let handle = tokio::spawn(async move {
        while let Some(record) = rx.recv().await {
            match append_attempt(&path, &record).await {
                Ok(()) => tracing::debug!(attempt = %record.id, "attempt saved"),
                Err(err) => tracing::warn!(attempt = %record.id, error = %err, "failed to save attempt"),
            }
        }
    });

    (tx, handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(score_correct: usize) -> AttemptRecord {
        AttemptRecord::new(
            Uuid::new_v4(),
            &Outcome::from_counts(score_correct, 10),
            Language::Ta,
            None,
            None,
        )
    }

    #[test]
    fn missing_log_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let records = read_attempts(dir.path().join("attempts.jsonl")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attempts.jsonl");
        let good = serde_json::to_string(&record(6)).unwrap();
        fs::write(&path, format!("{good}\nnot json\n\n{good}\n")).unwrap();

        let records = read_attempts(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].score, 600);
        assert_eq!(records[0].language, Language::Ta);
    }

    #[test]
    fn records_without_subject_still_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attempts.jsonl");
        let line = r#"{"id":"6f1d8a6e-3b4c-4d5e-8f90-1a2b3c4d5e6f","session_id":"0e4b7c2a-9d8f-4a1b-b2c3-d4e5f6a7b8c9","score":300,"accuracy":33,"correct":3,"total":9,"language":"en","finished_at":"2024-03-01T10:00:00Z"}"#;
        fs::write(&path, format!("{line}\n")).unwrap();

        let records = read_attempts(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].subject.is_none());
        assert!(records[0].badge.is_none());
    }

    #[tokio::test]
    async fn writer_appends_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attempts.jsonl");

        let (tx, handle) = spawn_writer(path.clone());
        let first = record(3);
        let mut second = record(10);
        second.badge = Some("Perfect Score".to_string());
        second.subject = Some("Science".to_string());
        tx.send(first.clone()).unwrap();
        tx.send(second.clone()).unwrap();
        drop(tx);
        handle.await.unwrap();

        let records = read_attempts(&path).unwrap();
        assert_eq!(records, vec![first, second]);
    }
}
