use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Optional "lat,long" pair used when no live coordinates are supplied.
    #[serde(default)]
    pub default_location: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::store_file().to_string_lossy().to_string(),
            default_location: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("pontolog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".pontolog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pontolog.conf")
    }

    /// Return the full path of the SQLite store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("pontolog.sqlite")
    }

    /// Load configuration from file, or return defaults if missing or
    /// unreadable. A broken config never blocks an operation.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Unreadable config file {:?} ({}), using defaults.",
                        path, e
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Could not read config file {:?} ({}), using defaults.",
                    path, e
                ));
                Self::default()
            }
        }
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        // Store path: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            database: store_path.to_string_lossy().to_string(),
            default_location: None,
        };

        // Write config file (skipped in test mode)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {}", e)))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty store file if not exists
        if !store_path.exists() {
            fs::File::create(&store_path)?;
        }

        println!("✅ Store:       {:?}", store_path);

        Ok(())
    }

    /// Report config keys missing from the YAML file (used by `config --check`).
    pub fn missing_fields() -> io::Result<Vec<&'static str>> {
        let path = Self::config_file();
        let content = fs::read_to_string(&path)?;

        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| io::Error::other(format!("parse config: {}", e)))?;

        let mut missing = Vec::new();
        if let Some(map) = yaml.as_mapping() {
            for field in ["database", "default_location"] {
                if !map.contains_key(&serde_yaml::Value::String(field.to_string())) {
                    missing.push(field);
                }
            }
        }

        Ok(missing)
    }
}
