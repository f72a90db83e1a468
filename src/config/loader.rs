//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::NormalizerConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse configuration from TOML text.
///
/// Unrecognized convention names are accepted and logged; they act as
/// identifier coercion with no case rewrite.
pub fn parse_config(content: &str) -> Result<NormalizerConfig, ConfigError> {
    let config: NormalizerConfig = toml::from_str(content)?;

    for path in config.unrecognized_conventions() {
        tracing::warn!(field = %path, "Unrecognized casing convention, keys will not be rewritten");
    }

    Ok(config)
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<NormalizerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casing::CasingConvention;
    use std::io::Write;

    #[test]
    fn test_partial_sections_use_defaults() {
        let config = parse_config(
            r#"
            [request]
            from = "snake_case"

            [response]
            to = "PascalCase"
            "#,
        )
        .unwrap();

        let request = config.request.request_casing();
        assert_eq!(request.from, CasingConvention::Snake);
        assert_eq!(request.to, CasingConvention::Kebab);
        assert_eq!(config.response.response_casing().to, CasingConvention::Pascal);
        assert_eq!(config.document.document_casing().to, CasingConvention::Camel);
    }

    #[test]
    fn test_unknown_names_load() {
        let config = parse_config("[request]\nto = \"Train-Case\"\n").unwrap();
        assert_eq!(config.request.to, Some(CasingConvention::Unrecognized));
    }

    #[test]
    fn test_malformed_toml() {
        let err = parse_config("[request\nfrom = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[document]\nto = \"snake\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.document.to, Some(CasingConvention::Snake));

        let missing = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }
}
