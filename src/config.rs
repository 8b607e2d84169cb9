use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
    #[serde(default)]
    pub verbose: bool,
}

fn default_buffer_capacity() -> usize {
    16 * 1024 * 1024
}

fn default_show_progress() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
            show_progress: default_show_progress(),
            verbose: false,
        }
    }
}

impl Config {
    /// Reads `config.toml` from the user config directory, falling back to
    /// defaults when it is absent or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::path() {
            if config_path.exists() {
                if let Ok(content) = fs::read_to_string(config_path) {
                    if let Ok(config) = Self::from_toml_str(&content) {
                        return config;
                    }
                }
            }
        }
        Config::default()
    }

    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("org", "fastq-extract", "fastq-extract")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
