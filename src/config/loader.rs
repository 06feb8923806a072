use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::UsermgrConfig;
use crate::core::{Error, Result};

/// Name of the configuration file searched for in the directory hierarchy.
pub const CONFIG_FILE_NAME: &str = ".usermgr.toml";

/// Environment variable that overrides `[admin] credential`.
pub const ADMIN_CREDENTIAL_ENV: &str = "USERMGR_ADMIN_CREDENTIAL";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<UsermgrConfig, String> {
    let mut config = toml::from_str::<UsermgrConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    // An empty credential in the file means "not configured here"
    if let Some(admin) = config.admin.as_mut() {
        if admin.credential.as_deref().is_some_and(str::is_empty) {
            log::warn!("Ignoring empty admin credential in {}", CONFIG_FILE_NAME);
            admin.credential = None;
        }
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<UsermgrConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_from(start: PathBuf) -> UsermgrConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            UsermgrConfig::default()
        })
}

/// Load configuration from the current directory hierarchy, then apply
/// environment overrides.
pub fn load_config() -> UsermgrConfig {
    let config = match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            UsermgrConfig::default()
        }
    };

    apply_env_overrides(config, std::env::var(ADMIN_CREDENTIAL_ENV).ok())
}

/// Load an explicitly requested config file. Unlike the directory search,
/// every failure here is reported to the caller.
pub fn load_config_file(path: &Path) -> Result<UsermgrConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::configuration_at(format!("cannot read {}: {}", path.display(), e), path)
    })?;
    let config = parse_and_validate_config(&contents)
        .map_err(|message| Error::configuration_at(message, path))?;

    Ok(apply_env_overrides(
        config,
        std::env::var(ADMIN_CREDENTIAL_ENV).ok(),
    ))
}

/// Pure function applying an environment-provided credential over the file value.
pub fn apply_env_overrides(config: UsermgrConfig, credential: Option<String>) -> UsermgrConfig {
    match credential.filter(|c| !c.is_empty()) {
        Some(credential) => {
            log::debug!("Using admin credential from {}", ADMIN_CREDENTIAL_ENV);
            config.with_admin_credential(credential)
        }
        None => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [admin]
            credential = "from-file"

            [thresholds]
            senior_age = 70
        "#})
        .unwrap();

        assert_eq!(config.admin_credential(), Some("from-file"));
        assert_eq!(config.senior_age(), 70);
    }

    #[test]
    fn test_parse_empty_credential_is_unset() {
        let config = parse_and_validate_config(indoc! {r#"
            [admin]
            credential = ""
        "#})
        .unwrap();
        assert_eq!(config.admin_credential(), None);
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        let err = parse_and_validate_config("[thresholds]\nsenior_age = \"old\"\n").unwrap_err();
        assert!(err.starts_with("Failed to parse .usermgr.toml"));
    }

    #[test]
    fn test_env_override_wins() {
        let config = UsermgrConfig::default().with_admin_credential("from-file");
        let config = apply_env_overrides(config, Some("from-env".to_string()));
        assert_eq!(config.admin_credential(), Some("from-env"));
    }

    #[test]
    fn test_empty_env_override_is_ignored() {
        let config = UsermgrConfig::default().with_admin_credential("from-file");
        let config = apply_env_overrides(config, Some(String::new()));
        assert_eq!(config.admin_credential(), Some("from-file"));
    }

    #[test]
    fn test_directory_ancestors_depth_limit() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
            ]
        );
    }

    #[test]
    fn test_load_config_from_finds_parent_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[thresholds]\nsenior_age = 80\n",
        )
        .unwrap();
        let nested = temp.path().join("nested").join("deeper");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.senior_age(), 80);
    }

    #[test]
    fn test_load_config_from_invalid_file_falls_back() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = load_config_from(temp.path().to_path_buf());
        assert_eq!(config, UsermgrConfig::default());
    }

    #[test]
    fn test_load_config_file_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Configuration { path: Some(_), .. }));
    }
}
