use std::fs;
use std::path::Path;

use lexiscope_config::Config;
use serde::{Deserialize, Serialize};

/// Represents a named configuration profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Profile files hold either a named profile or a bare config
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileFile {
    Named(Profile),
    Bare(Config),
}

/// Load the config from a profile file, or from the environment without one
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No profile given, reading config from environment");
        return Ok(Config::new());
    };

    let data = fs::read_to_string(path)?;
    match serde_json::from_str(&data)? {
        ProfileFile::Named(profile) => {
            tracing::info!("Loaded profile '{}' from {}", profile.name, path.display());
            Ok(profile.value)
        }
        ProfileFile::Bare(config) => {
            tracing::info!("Loaded config from {}", path.display());
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lexiscope-{}-{}.json", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_named_profile() {
        let path = write_temp(
            "named",
            r#"{ "name": "work", "value": { "analysis": { "max_words": 3 } } }"#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.analysis.max_words, 3);
        assert_eq!(config.analysis.display_language, "ru");

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn loads_bare_config() {
        let path = write_temp("bare", r#"{ "app": { "default_kinds": ["synonyms"] } }"#);

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.app.default_kinds, vec!["synonyms".to_string()]);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_profile_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/profile.json"))).is_err());
    }
}
