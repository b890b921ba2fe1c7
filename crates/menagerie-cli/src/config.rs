//! Locating and reading the CLI configuration file.
//!
//! An explicit `--config` path always wins and must exist. Without one the
//! first existing file among [`search_paths`] is read, and when none exists
//! the built-in defaults apply.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use menagerie::{MenagerieError, config::AppConfig};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Failures while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file {0} does not exist")]
    NotFound(PathBuf),

    #[error("cannot read configuration file {path}: {source}")]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("configuration file {path} is not valid TOML: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

impl From<ConfigError> for MenagerieError {
    fn from(err: ConfigError) -> Self {
        MenagerieError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Explicit,
    WorkingDirectory,
    UserConfigDir,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Explicit => "explicit",
            Self::WorkingDirectory => "working directory",
            Self::UserConfigDir => "user config directory",
        })
    }
}

/// Implicit configuration locations, most specific first.
fn search_paths() -> Vec<(Origin, PathBuf)> {
    let local = Path::new("menagerie").join(CONFIG_FILE_NAME);
    let mut paths = vec![(Origin::WorkingDirectory, local)];

    if let Some(dirs) = ProjectDirs::from("com", "menagerie", "menagerie") {
        let user = dirs.config_dir().join(CONFIG_FILE_NAME);
        paths.push((Origin::UserConfigDir, user));
    } else {
        debug!("No user config directory on this platform");
    }

    paths
}

/// Loads the application configuration.
///
/// # Errors
///
/// Returns [`MenagerieError::Config`] when `explicit_path` names a missing
/// file or when the selected file is not valid TOML.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, MenagerieError> {
    let selected = match explicit_path {
        Some(path) => Some((Origin::Explicit, path.as_ref().to_path_buf())),
        None => first_existing(search_paths()),
    };

    let Some((origin, path)) = selected else {
        debug!("No configuration file found, using defaults");
        return Ok(AppConfig::default());
    };

    info!(origin:% = origin, path:? = path; "Loading configuration");
    Ok(read_config(&path)?)
}

fn first_existing(paths: Vec<(Origin, PathBuf)>) -> Option<(Origin, PathBuf)> {
    paths.into_iter().find(|(origin, path)| {
        let exists = path.is_file();
        if !exists {
            debug!(origin:% = origin, path:? = path; "No configuration file");
        }
        exists
    })
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.into()),
        _ => ConfigError::Unreadable {
            path: path.into(),
            source,
        },
    })?;

    toml::from_str(&content).map_err(|err| ConfigError::Malformed {
        path: path.into(),
        reason: err.message().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use menagerie::export::OutputFormat;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_explicit_config_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nformat = \"json\"\nindent = 0\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.output().format(), OutputFormat::Json);
        assert_eq!(config.output().indent(), 0);
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, MenagerieError::Config(msg) if msg.contains("absent.toml")));
    }

    #[test]
    fn test_invalid_toml_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[output\nformat = ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, MenagerieError::Config(msg) if msg.contains("not valid TOML")));
    }

    #[test]
    fn test_first_existing_skips_missing_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let present = dir.path().join("present.toml");
        let later = dir.path().join("later.toml");
        fs::write(&present, "").unwrap();
        fs::write(&later, "").unwrap();

        let found = first_existing(vec![
            (Origin::WorkingDirectory, missing),
            (Origin::UserConfigDir, present.clone()),
            (Origin::UserConfigDir, later),
        ]);

        assert_eq!(found, Some((Origin::UserConfigDir, present)));
    }

    #[test]
    fn test_directories_do_not_count_as_config_files() {
        let dir = tempdir().unwrap();

        let found = first_existing(vec![(Origin::WorkingDirectory, dir.path().to_path_buf())]);

        assert_eq!(found, None);
    }

    #[test]
    fn test_working_directory_is_searched_first() {
        let paths = search_paths();

        assert_eq!(paths[0].0, Origin::WorkingDirectory);
        assert!(paths[0].1.ends_with("menagerie/config.toml"));
    }
}
