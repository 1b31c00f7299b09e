//! Read-only queries over a written cleaning log.
//!
//! These never fail: a missing or unreadable log is reported as an
//! `{"error": ...}` payload so callers can print it as is.

use std::path::Path;

use serde_json::{Value, json};

fn error_payload(message: String) -> Value {
    json!({ "error": message })
}

/// Returns the full log document at `path`, or an error payload.
pub fn read_cleaning_log(path: &Path) -> Value {
    if !path.exists() {
        return error_payload(format!("Log file not found: {}", path.display()));
    }
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => {
            return error_payload(format!("Failed to read log file {}: {error}", path.display()));
        }
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(value) if value.is_object() => value,
        Ok(_) => error_payload("Invalid log file: expected a JSON object".to_string()),
        Err(error) => error_payload(format!("Invalid log file: {error}")),
    }
}

/// Returns the `operations` array of the log at `path`, or an error payload.
///
/// A log without an `operations` key has no operations.
pub fn read_log_operations(path: &Path) -> Value {
    let mut document = read_cleaning_log(path);
    if document.get("error").is_some() {
        return document;
    }
    match document.get_mut("operations").map(Value::take) {
        None => Value::Array(Vec::new()),
        Some(operations @ Value::Array(_)) => operations,
        Some(_) => error_payload("Invalid log file: operations is not an array".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_log_reports_not_found() {
        let value = read_log_operations(Path::new("does/not/exist.json"));
        let message = value["error"].as_str().unwrap();
        assert!(message.contains("not found"));
    }

    #[test]
    fn operations_are_extracted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        std::fs::write(
            &path,
            r#"{"timestamp": "2024-01-01T00:00:00.000000", "operations": [{"operation": "load_file"}]}"#,
        )
        .unwrap();
        let operations = read_log_operations(&path);
        assert_eq!(operations, json!([{"operation": "load_file"}]));
    }

    #[test]
    fn log_without_operations_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        std::fs::write(&path, r#"{"timestamp": "2024-01-01T00:00:00.000000"}"#).unwrap();
        assert_eq!(read_log_operations(&path), json!([]));

        std::fs::write(&path, r#"{"operations": 3}"#).unwrap();
        let value = read_log_operations(&path);
        assert!(value["error"].as_str().unwrap().contains("not an array"));
    }

    #[test]
    fn garbage_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        std::fs::write(&path, "not json").unwrap();
        let value = read_cleaning_log(&path);
        assert!(value["error"].as_str().unwrap().starts_with("Invalid log file"));
    }
}
