use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where a site's inputs live, where output goes, and the URL prefix it is
/// served under. Every field is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Copied verbatim into the output directory.
    pub static_dir: PathBuf,
    /// Markdown sources; the tree is mirrored into the output directory.
    pub content_dir: PathBuf,
    /// Deleted and rebuilt on every run.
    pub output_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: PathBuf,
    /// Prefix substituted for root-relative `href="/` and `src="/` URLs.
    pub basepath: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("./static"),
            content_dir: PathBuf::from("./content"),
            output_dir: PathBuf::from("./public"),
            template: PathBuf::from("./template.html"),
            basepath: "/".to_string(),
        }
    }
}

impl SiteConfig {
    pub const FILE_NAME: &'static str = "sitegen.toml";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: SiteConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.static_dir = Self::expand_path(&config.static_dir).unwrap_or(config.static_dir);
        config.content_dir = Self::expand_path(&config.content_dir).unwrap_or(config.content_dir);
        config.output_dir = Self::expand_path(&config.output_dir).unwrap_or(config.output_dir);
        config.template = Self::expand_path(&config.template).unwrap_or(config.template);

        Ok(Some(config))
    }

    /// Loads the file if present, otherwise falls back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(config_path)?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Default config location: `sitegen.toml` in the working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(Self::FILE_NAME)
    }

    /// The basepath with exactly one leading and one trailing `/`.
    pub fn normalized_basepath(&self) -> String {
        normalize_basepath(&self.basepath)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Forces a leading and trailing `/`, so `repo` and `/repo` both become `/repo/`.
pub fn normalize_basepath(basepath: &str) -> String {
    let trimmed = basepath.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        assert_eq!(SiteConfig::config_path(), PathBuf::from("sitegen.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.static_dir, PathBuf::from("./static"));
        assert_eq!(config.content_dir, PathBuf::from("./content"));
        assert_eq!(config.output_dir, PathBuf::from("./public"));
        assert_eq!(config.template, PathBuf::from("./template.html"));
        assert_eq!(config.basepath, "/");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = SiteConfig {
            output_dir: PathBuf::from("/tmp/test-public"),
            basepath: "/repo/".to_string(),
            ..SiteConfig::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: SiteConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SiteConfig = toml::from_str(r#"basepath = "/docs/""#).unwrap();
        assert_eq!(config.basepath, "/docs/");
        assert_eq!(config.content_dir, PathBuf::from("./content"));
    }

    #[test]
    fn test_normalize_basepath() {
        assert_eq!(normalize_basepath(""), "/");
        assert_eq!(normalize_basepath("/"), "/");
        assert_eq!(normalize_basepath("repo"), "/repo/");
        assert_eq!(normalize_basepath("/repo"), "/repo/");
        assert_eq!(normalize_basepath("/repo/"), "/repo/");
        assert_eq!(normalize_basepath("/a/b"), "/a/b/");
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = SiteConfig::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("SITEGEN_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$SITEGEN_TEST_VAR/subdir");
        let expanded = SiteConfig::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("SITEGEN_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = SiteConfig::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = SiteConfig::load_from_path(&non_existent_config).unwrap();
        assert!(result.is_none());

        let fallback = SiteConfig::load_or_default(&non_existent_config).unwrap();
        assert_eq!(fallback, SiteConfig::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("sitegen.toml");
        std::fs::write(&config_file, "basepath = [not toml").unwrap();

        let result = SiteConfig::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/sitegen.toml");
        let test_config = SiteConfig {
            content_dir: PathBuf::from("/tmp/test-content"),
            basepath: "/site/".to_string(),
            ..SiteConfig::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = SiteConfig::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("SITEGEN_ROOT", "/custom/site");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("sitegen.toml");
        std::fs::write(&config_file, "content_dir = \"$SITEGEN_ROOT/content\"\n").unwrap();

        let config = SiteConfig::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.content_dir, PathBuf::from("/custom/site/content"));

        unsafe {
            env::remove_var("SITEGEN_ROOT");
        }
    }
}
