use crate::errors::{AppError, AppResult};
use crate::models::preferences::{CompletedStyle, NotificationPrefs, Theme};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub notifications: NotificationPrefs,
    #[serde(default)]
    pub completed_style: CompletedStyle,
    #[serde(default = "default_month_preview")]
    pub month_preview: usize,
    #[serde(default = "default_due_time")]
    pub default_due_time: String,
}

fn default_month_preview() -> usize {
    2
}
fn default_due_time() -> String {
    "23:59".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            theme: Theme::default(),
            notifications: NotificationPrefs::default(),
            completed_style: CompletedStyle::default(),
            month_preview: default_month_preview(),
            default_due_time: default_due_time(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rplanner")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rplanner")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rplanner.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rplanner.sqlite")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Write the configuration as YAML, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files.
    ///
    /// `custom_db` may be absolute or relative to the config directory.
    /// Returns the database path that ended up in the configuration.
    pub fn init_all(config_path: &Path, custom_db: Option<&str>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("rplanner.sqlite"),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Keep preferences of an existing file, only repoint the database
        let mut config = Self::load(config_path)?;
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            config.save(config_path)?;
            println!("✅ Config file: {:?}", config_path);
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config.database)
    }
}
