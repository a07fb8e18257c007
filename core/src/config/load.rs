use std::path::{Path, PathBuf};

use super::types::AppConfig;

pub const ENV_DATA_FILE: &str = "TUTORBOOK_DATA_FILE";
pub const ENV_LOG_LEVEL: &str = "TUTORBOOK_LOG_LEVEL";

/// Get the default tutorbook data directory: ~/.tutorbook
pub fn get_tutorbook_data_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".tutorbook"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    let data_dir = get_tutorbook_data_dir()?;
    load_from(&data_dir, Path::new("config.toml"), |key| std::env::var(key).ok())
}

/// Resolves configuration rooted at `data_dir`.
///
/// Priority: environment (via `env`), then `data_dir/config.toml`, then
/// `local_config`, then defaults.
pub fn load_from(
    data_dir: &Path,
    local_config: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<AppConfig> {
    let home_config = data_dir.join("config.toml");

    let mut cfg: AppConfig = if home_config.exists() {
        let s = std::fs::read_to_string(&home_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else if local_config.exists() {
        let s = std::fs::read_to_string(local_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else {
        AppConfig::default()
    };

    if cfg.storage.data_file.trim().is_empty() {
        cfg.storage.data_file = data_dir
            .join("data")
            .join("tutorbook.json")
            .to_string_lossy()
            .to_string();
    }

    if cfg
        .logging
        .directory
        .as_ref()
        .map(|s| s.trim().is_empty())
        .unwrap_or(true)
    {
        cfg.logging.directory = Some(data_dir.join("logs").to_string_lossy().to_string());
    }

    if let Some(v) = env(ENV_DATA_FILE) {
        if !v.trim().is_empty() {
            cfg.storage.data_file = v;
        }
    }
    if let Some(v) = env(ENV_LOG_LEVEL) {
        if !v.trim().is_empty() {
            cfg.logging.level = v;
        }
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_live_under_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_from(dir.path(), &dir.path().join("absent.toml"), no_env).unwrap();
        assert_eq!(
            PathBuf::from(&cfg.storage.data_file),
            dir.path().join("data").join("tutorbook.json")
        );
        assert_eq!(cfg.logging.level, "warn");
        assert!(!cfg.logging.file);
    }

    #[test]
    fn home_config_wins_over_local() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[storage]\ndata_file = \"/tmp/home.json\"\n",
        )
        .unwrap();
        let local = dir.path().join("local.toml");
        std::fs::write(&local, "[storage]\ndata_file = \"/tmp/local.json\"\n").unwrap();
        let cfg = load_from(dir.path(), &local, no_env).unwrap();
        assert_eq!(cfg.storage.data_file, "/tmp/home.json");
    }

    #[test]
    fn env_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("local.toml");
        std::fs::write(&local, "[logging]\nlevel = \"info\"\nfile = true\n").unwrap();
        let cfg = load_from(dir.path(), &local, |key| match key {
            ENV_LOG_LEVEL => Some("debug".to_string()),
            ENV_DATA_FILE => Some("  ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert!(cfg.logging.file);
        assert!(cfg.storage.data_file.ends_with("tutorbook.json"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("local.toml");
        std::fs::write(&local, "[logging\n").unwrap();
        assert!(load_from(dir.path(), &local, no_env).is_err());
    }
}
