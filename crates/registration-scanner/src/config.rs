//! 扫描目标配置

use std::path::Path;

use registration_common::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scanner::{ScanTarget, DEFAULT_SCAN_DEPTH};

fn default_depth() -> usize {
    DEFAULT_SCAN_DEPTH
}

/// 单个扫描目标的配置条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// 模块路径前缀
    pub module: String,
    /// 前缀之下允许的最大模块段数，缺省为 1
    #[serde(default = "default_depth")]
    pub depth: usize,
}

/// 扫描配置
///
/// 支持从 TOML 或 JSON 文件加载，配置条目的顺序即扫描目标的
/// 顺序。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// 扫描目标列表
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

impl ScanConfig {
    /// 从 TOML 文本解析扫描配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })
    }

    /// 从 JSON 文本解析扫描配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })
    }

    /// 从 TOML 文件加载扫描配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = read_config_file(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// 从 JSON 文件加载扫描配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = read_config_file(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// 转换为扫描目标列表，保持配置顺序
    pub fn scan_targets(&self) -> Vec<ScanTarget> {
        self.targets
            .iter()
            .map(|t| ScanTarget::module(t.module.clone()).with_depth(t.depth))
            .collect()
    }
}

fn read_config_file(path: &Path) -> ConfigResult<String> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    debug!("加载扫描配置文件: {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}
