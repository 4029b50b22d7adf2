//! Reading cell values, configuration and plugin definitions.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use cellout::{parse_plugins_json, parse_plugins_yaml, PluginDefinition, RenderConfig, Value};

use crate::cli::Format;

/// Abstraction over stdin so tests can feed input without piping.
pub trait StdinReader {
    /// Returns `true` when stdin is interactive rather than piped.
    fn is_terminal(&self) -> bool;

    fn read_to_string(&self) -> io::Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_to_string(&self) -> io::Result<String> {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

/// Stdin stand-in for tests.
#[derive(Debug, Clone)]
pub struct MockStdin {
    content: Option<String>,
}

impl MockStdin {
    /// Simulates an interactive terminal with nothing piped.
    pub fn terminal() -> Self {
        Self { content: None }
    }

    pub fn piped(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.content.is_none()
    }

    fn read_to_string(&self) -> io::Result<String> {
        Ok(self.content.clone().unwrap_or_default())
    }
}

/// Reads the cell value source from a file, or from stdin when no file (or
/// `-`) is given.
pub fn read_source(path: Option<&Path>, stdin: &dyn StdinReader) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            if stdin.is_terminal() {
                bail!("no input: pass a FILE or pipe a value on stdin");
            }
            stdin.read_to_string().context("failed to read stdin")
        }
    }
}

/// Picks the input format: explicit flag, then file extension, then JSON.
pub fn detect_format(explicit: Option<Format>, path: Option<&Path>) -> Format {
    explicit
        .or_else(|| path.and_then(Format::from_path))
        .unwrap_or(Format::Json)
}

/// Parses a cell value. `$date` and `$undefined` tags are honored.
pub fn parse_value(source: &str, format: Format) -> Result<Value> {
    let json: serde_json::Value = match format {
        Format::Json => serde_json::from_str(source).context("invalid JSON input")?,
        Format::Yaml => serde_yaml::from_str(source).context("invalid YAML input")?,
    };
    Ok(Value::try_from_json(json)?)
}

/// Loads a render configuration file (YAML unless it ends in `.json`).
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = match Format::from_path(path) {
        Some(Format::Json) => RenderConfig::from_json(&source),
        _ => RenderConfig::from_yaml(&source),
    };
    config.with_context(|| format!("invalid config {}", path.display()))
}

/// Loads the plugin definitions in one file (YAML unless it ends in `.json`).
pub fn load_plugins(path: &Path) -> Result<Vec<PluginDefinition>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read plugin {}", path.display()))?;
    let defs = match Format::from_path(path) {
        Some(Format::Json) => parse_plugins_json(&source),
        _ => parse_plugins_yaml(&source),
    };
    defs.with_context(|| format!("invalid plugin {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdin_used_without_file() {
        let text = read_source(None, &MockStdin::piped("[1]")).unwrap();
        assert_eq!(text, "[1]");
        let dash = read_source(Some(Path::new("-")), &MockStdin::piped("2")).unwrap();
        assert_eq!(dash, "2");
    }

    #[test]
    fn terminal_without_file_is_an_error() {
        let err = read_source(None, &MockStdin::terminal()).unwrap_err();
        assert!(err.to_string().contains("no input"));
    }

    #[test]
    fn format_detection_order() {
        let yaml = Path::new("cell.yml");
        assert_eq!(detect_format(None, Some(yaml)), Format::Yaml);
        assert_eq!(detect_format(Some(Format::Json), Some(yaml)), Format::Json);
        assert_eq!(detect_format(None, None), Format::Json);
    }

    #[test]
    fn yaml_values_parse() {
        let value = parse_value("- 1\n- two\n", Format::Yaml).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn bad_tags_are_rejected() {
        let err = parse_value(r#"{"$date": "yesterday"}"#, Format::Json).unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }
}
