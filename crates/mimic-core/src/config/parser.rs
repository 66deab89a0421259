//! Configuration file parsing (YAML/JSON/JSONC).

use crate::config::error::ConfigError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Config file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    Yaml,
    Json,
    Jsonc,
    Unknown,
}

/// Get config file format from path extension
pub fn get_file_type(path: &str) -> ConfigFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => ConfigFileType::Yaml,
        "json" => ConfigFileType::Json,
        "jsonc" => ConfigFileType::Jsonc,
        _ => ConfigFileType::Unknown,
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Code,
    Str { escaped: bool },
    LineComment,
    BlockComment,
}

/// Strip `//` and `/* */` comments from JSONC content.
///
/// Comment markers inside string literals are kept. Line breaks ending a
/// line comment are kept so error positions stay meaningful.
pub fn strip_json_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut state = Scan::Code;

    while let Some(c) = chars.next() {
        state = match state {
            Scan::Code => match (c, chars.peek()) {
                ('/', Some('/')) => {
                    chars.next();
                    Scan::LineComment
                }
                ('/', Some('*')) => {
                    chars.next();
                    Scan::BlockComment
                }
                ('"', _) => {
                    out.push(c);
                    Scan::Str { escaped: false }
                }
                _ => {
                    out.push(c);
                    Scan::Code
                }
            },
            Scan::Str { escaped } => {
                out.push(c);
                match c {
                    '"' if !escaped => Scan::Code,
                    '\\' => Scan::Str { escaped: !escaped },
                    _ => Scan::Str { escaped: false },
                }
            }
            Scan::LineComment => {
                if c == '\n' || c == '\r' {
                    out.push(c);
                    Scan::Code
                } else {
                    Scan::LineComment
                }
            }
            Scan::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    Scan::Code
                } else {
                    Scan::BlockComment
                }
            }
        };
    }

    out
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse JSONC content (JSON with comments)
pub fn parse_jsonc<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    parse_json(&strip_json_comments(content))
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Parse config content, picking the format from `path`
pub fn parse_config<T: DeserializeOwned>(content: &str, path: &str) -> Result<T, ConfigError> {
    match get_file_type(path) {
        ConfigFileType::Yaml => parse_yaml(content),
        ConfigFileType::Json => parse_json(content),
        ConfigFileType::Jsonc => parse_jsonc(content),
        ConfigFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

/// Read and parse a config file
pub async fn load_config<T: DeserializeOwned>(path: &str) -> Result<T, ConfigError> {
    if get_file_type(path) == ConfigFileType::Unknown {
        return Err(ConfigError::UnknownFileType(path.to_string()));
    }
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
    parse_config(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::SidebarConfig;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    #[case("sidebar.yaml", ConfigFileType::Yaml)]
    #[case("sidebar.YML", ConfigFileType::Yaml)]
    #[case("mocks.json", ConfigFileType::Json)]
    #[case("mocks.JSONC", ConfigFileType::Jsonc)]
    #[case("dir.json/mocks", ConfigFileType::Unknown)]
    #[case("mocks.toml", ConfigFileType::Unknown)]
    #[case("", ConfigFileType::Unknown)]
    fn test_get_file_type(#[case] path: &str, #[case] expected: ConfigFileType) {
        assert_eq!(get_file_type(path), expected);
    }

    #[rstest]
    #[case("{\"a\": 1} // trailing", "{\"a\": 1} ")]
    #[case("{/* inline */\"a\": 1}", "{\"a\": 1}")]
    #[case("// header\n{\"a\": 1}", "\n{\"a\": 1}")]
    #[case("{\"url\": \"http://x/*y*/\"}", "{\"url\": \"http://x/*y*/\"}")]
    #[case("{\"q\": \"say \\\"//hi\\\"\"}", "{\"q\": \"say \\\"//hi\\\"\"}")]
    #[case("{\"p\": \"c:\\\\\"} // tail", "{\"p\": \"c:\\\\\"} ")]
    fn test_strip_json_comments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_json_comments(input), expected);
    }

    #[rstest]
    fn test_parse_config_jsonc_sidebar() {
        let content = r#"{
            // grouping
            "defaultGroupName": "Batch", /* px */ "sidebarWidth": 300
        }"#;
        let config: SidebarConfig = parse_config(content, "sidebar.jsonc").expect("Should parse");
        assert_eq!(config.default_group_name, "Batch");
        assert_eq!(config.sidebar_width, 300);
    }

    #[rstest]
    fn test_parse_config_yaml_sidebar() {
        let config: SidebarConfig =
            parse_config("defaultGroupName: Team\n", "sidebar.yml").expect("Should parse");
        assert_eq!(config.default_group_name, "Team");
        assert_eq!(config.sidebar_width, SidebarConfig::default().sidebar_width);
    }

    #[rstest]
    #[case("{", "a.json")]
    #[case("a: [", "a.yaml")]
    fn test_parse_config_invalid(#[case] content: &str, #[case] path: &str) {
        let result: Result<serde_json::Value, _> = parse_config(content, path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::Json(_) | ConfigError::Yaml(_)
        ));
    }

    #[rstest]
    fn test_parse_config_unknown_file_type() {
        let result: Result<serde_json::Value, _> = parse_config("{}", "a.ini");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnknownFileType(_)
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_config_reads_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("Should create temp file");
        writeln!(file, "sidebarWidth: 420").expect("Should write");
        let path = file.path().to_string_lossy().to_string();

        let config: SidebarConfig = load_config(&path).await.expect("Should load");
        assert_eq!(config.sidebar_width, 420);
    }

    #[rstest]
    #[tokio::test]
    async fn test_load_config_missing_file() {
        let result: Result<SidebarConfig, _> = load_config("/nonexistent/mimic.yaml").await;
        assert!(matches!(result.unwrap_err(), ConfigError::Io { .. }));
    }
}
