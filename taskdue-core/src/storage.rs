use std::fs;
use std::path::Path;

use crate::task::Task;
use crate::Result;

/// Loads the persisted collection; a missing store file is an empty one
pub fn load(path: &Path) -> Result<Vec<Task>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Replaces the store file with the full collection
pub fn save(path: &Path, tasks: &[Task]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let data = serde_json::to_string_pretty(tasks)?;
    fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEADLINE_FORMAT;
    use crate::task::Priority;
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    fn task(name: &str, priority: Priority) -> Task {
        Task::new(
            name.to_string(),
            priority,
            NaiveDateTime::parse_from_str("2026-08-10 09:30", DEADLINE_FORMAT).unwrap(),
        )
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let tasks = load(&dir.path().join("tasks.json")).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");

        let tasks = vec![task("a", Priority::Critical), task("b\nsecond", Priority::Low)];
        save(&path, &tasks).unwrap();

        assert_eq!(load(&path).unwrap(), tasks);
    }

    #[test]
    fn test_wire_keys_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");

        save(&path, &[task("a", Priority::High)]).unwrap();
        let data = fs::read_to_string(&path).unwrap();

        assert!(data.contains("\"name\""));
        assert!(data.contains("\"priority\": \"H\""));
        assert!(data.contains("\"deadlineDateTime\": \"2026-08-10 09:30\""));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");

        save(&path, &[task("a", Priority::Normal)]).unwrap();
        save(&path, &[]).unwrap();

        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("tasks.json");

        save(&path, &[]).unwrap();
        assert!(path.exists());
    }
}
