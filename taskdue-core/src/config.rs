use std::env;
use std::path::PathBuf;

/// Configuration for the taskdue application
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted task store
    pub store_file: PathBuf,
}

impl Config {
    /// Creates a new Config from environment variables
    pub fn new() -> Self {
        let store_file = env::var("TASKDUE_FILE").map(PathBuf::from).unwrap_or_else(|_| {
            let home = home::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .expect("Could not determine home directory");
            home.join(".taskdue").join("tasks.json")
        });

        Config { store_file }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
