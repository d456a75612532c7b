//! 阈值配置文件加载（TOML）
use serde::Deserialize;
use std::path::Path;

use crate::error::{LitscanError, Result};
use crate::scoring::{ScoringConfig, Thresholds};

/// 单个类别的阈值条目（字段缺省时回退到内置值）
#[derive(Debug, Clone, Default, Deserialize)]
struct ThresholdEntry {
    #[serde(default)]
    optimisable: Option<i64>,
    #[serde(default)]
    existing_var: Option<i64>,
}

impl ThresholdEntry {
    fn resolve(self, fallback: Thresholds) -> Thresholds {
        Thresholds {
            optimisable: self.optimisable.unwrap_or(fallback.optimisable),
            existing_var: self.existing_var.unwrap_or(fallback.existing_var),
        }
    }
}

/// 顶层配置文件结构
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    string: ThresholdEntry,
    #[serde(default)]
    numeric: ThresholdEntry,
}

/// 从 TOML 文本解析阈值配置
pub fn parse_scoring_config(txt: &str) -> std::result::Result<ScoringConfig, toml::de::Error> {
    let parsed: ConfigFile = toml::from_str(txt)?;
    let defaults = ScoringConfig::default();
    Ok(ScoringConfig {
        string: parsed.string.resolve(defaults.string),
        numeric: parsed.numeric.resolve(defaults.numeric),
    })
}

/// 从 TOML 文件加载阈值配置
pub fn load_scoring_config(path: &Path) -> Result<ScoringConfig> {
    let config_err = |message: String| LitscanError::Config { path: path.to_path_buf(), message };
    let txt = std::fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
    parse_scoring_config(&txt).map_err(|e| config_err(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_file_keeps_defaults() {
        assert_eq!(parse_scoring_config("").unwrap(), ScoringConfig::default());
    }

    #[test]
    fn partial_override() {
        let cfg = parse_scoring_config("[numeric]\noptimisable = 20\n").unwrap();
        assert_eq!(cfg.string, Thresholds::STRING);
        assert_eq!(cfg.numeric, Thresholds { optimisable: 20, existing_var: 3 });
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[string]\noptimisable = 12\nexisting_var = 8\n").unwrap();
        let cfg = load_scoring_config(file.path()).unwrap();
        assert_eq!(cfg.string, Thresholds { optimisable: 12, existing_var: 8 });
        assert_eq!(cfg.numeric, Thresholds::NUMERIC);
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[string\noptimisable = ").unwrap();
        match load_scoring_config(file.path()) {
            Err(LitscanError::Config { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load_scoring_config(Path::new("/nonexistent/litscan.toml")).unwrap_err();
        assert!(matches!(err, LitscanError::Config { .. }));
    }
}
