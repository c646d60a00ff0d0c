use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{NUM_OPTIONS, QuizItem};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid question {id}: {reason}")]
    InvalidItem { id: u32, reason: String },
}

/// Load quiz items from a JSON array of item records.
///
/// An empty array is valid and yields an empty quiz.
pub fn load_items_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuizItem>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items: Vec<QuizItem> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    validate_items(&items)?;
    tracing::info!(path = %path.display(), count = items.len(), "loaded questions");
    Ok(items)
}

/// Check the item invariants that the typed model does not already enforce.
pub fn validate_items(items: &[QuizItem]) -> Result<(), LoadError> {
    for item in items {
        if item.correct_index >= NUM_OPTIONS {
            return Err(LoadError::InvalidItem {
                id: item.id,
                reason: format!(
                    "correct_index {} is out of range for {} options",
                    item.correct_index, NUM_OPTIONS
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::Difficulty;

    fn write_json(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_items_with_overrides() {
        let file = write_json(
            r#"[{
                "id": 7,
                "prompt": "What is the derivative of x²?",
                "options": ["x", "2x", "x²", "2x²"],
                "correct_index": 1,
                "difficulty": "hard",
                "subject": "Mathematics",
                "localized": {
                    "hi": { "prompt": "x² का अवकलन क्या है?", "options": ["x", "2x", "x²", "2x²"] }
                }
            }]"#,
        );

        let items = load_items_from_json(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].difficulty, Difficulty::Hard);
        assert!(items[0].localized.contains_key("hi"));
    }

    #[test]
    fn localized_map_is_optional() {
        let file = write_json(
            r#"[{"id": 1, "prompt": "2 + 2?", "options": ["3","4","5","6"],
                 "correct_index": 1, "difficulty": "easy", "subject": "Mathematics"}]"#,
        );
        let items = load_items_from_json(file.path()).unwrap();
        assert!(items[0].localized.is_empty());
    }

    #[test]
    fn empty_array_is_allowed() {
        let file = write_json("[]");
        assert!(load_items_from_json(file.path()).unwrap().is_empty());
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let file = write_json(
            r#"[{"id": 3, "prompt": "?", "options": ["a","b","c","d"],
                 "correct_index": 4, "difficulty": "easy", "subject": "x"}]"#,
        );
        let err = load_items_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidItem { id: 3, .. }));
    }

    #[test]
    fn rejects_wrong_option_count() {
        let file = write_json(
            r#"[{"id": 3, "prompt": "?", "options": ["a","b","c"],
                 "correct_index": 0, "difficulty": "easy", "subject": "x"}]"#,
        );
        assert!(matches!(
            load_items_from_json(file.path()),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_items_from_json("/nonexistent/questions.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/questions.json"));
    }
}
