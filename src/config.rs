//! Host generator configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The two directories the hook needs from the generator's configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Documentation source root
    pub docs_dir: PathBuf,

    /// Generated site output root
    pub site_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            site_dir: PathBuf::from("site"),
        }
    }
}

/// On-disk shape of the generator's YAML config. Only the fields the hook
/// reads are modelled; every other key is ignored.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default = "default_docs_dir")]
    docs_dir: String,
    #[serde(default = "default_site_dir")]
    site_dir: String,
}

fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_site_dir() -> String {
    "site".to_string()
}

/// Errors that can occur while loading the generator's config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

impl SiteConfig {
    /// Load `docs_dir` and `site_dir` from the generator's config file.
    ///
    /// Relative directories resolve against the directory containing the
    /// config file, matching the generator's own resolution rule.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

        let file: ConfigFile = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;

        let base = path.parent().unwrap_or(Path::new(""));

        Ok(Self {
            docs_dir: resolve(base, &file.docs_dir),
            site_dir: resolve(base, &file.site_dir),
        })
    }
}

/// Join `dir` onto `base` unless it is already absolute.
fn resolve(base: &Path, dir: &str) -> PathBuf {
    let path = PathBuf::from(dir);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_defaults_when_keys_absent() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("mkdocs.yml");
        fs::write(&config_path, "site_name: Cosimulation\n").unwrap();

        let config = SiteConfig::load(&config_path).unwrap();

        assert_eq!(config.docs_dir, temp.path().join("docs"));
        assert_eq!(config.site_dir, temp.path().join("site"));
    }

    #[test]
    fn resolves_relative_dirs_against_config_location() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("mkdocs.yml");
        fs::write(
            &config_path,
            "docs_dir: source\nsite_dir: public\nsite_name: Cosimulation\n",
        )
        .unwrap();

        let config = SiteConfig::load(&config_path).unwrap();

        assert_eq!(config.docs_dir, temp.path().join("source"));
        assert_eq!(config.site_dir, temp.path().join("public"));
    }

    #[test]
    fn keeps_absolute_dirs_untouched() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("mkdocs.yml");
        fs::write(&config_path, "docs_dir: /srv/docs\nsite_dir: /srv/site\n").unwrap();

        let config = SiteConfig::load(&config_path).unwrap();

        assert_eq!(config.docs_dir, PathBuf::from("/srv/docs"));
        assert_eq!(config.site_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn reports_missing_config_file() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("mkdocs.yml");

        let err = SiteConfig::load(&config_path).unwrap_err();

        assert!(matches!(err, ConfigError::Read(_)));
    }

    #[test]
    fn reports_malformed_yaml() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("mkdocs.yml");
        fs::write(&config_path, "docs_dir: [unclosed\n").unwrap();

        let err = SiteConfig::load(&config_path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
