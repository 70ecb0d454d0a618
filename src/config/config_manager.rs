// ==========================================
// 包配置器 - 配置管理器
// ==========================================
// 职责: 配置加载、默认值、环境变量覆写
// 存储: JSON 文件（不存在时使用默认值）
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::domain::types::VatRate;
use crate::export::ExportFormat;
use crate::importer::PRICE_KEYWORDS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ==========================================
// 配置键（环境变量）
// ==========================================
pub mod config_keys {
    /// 配置文件路径
    pub const CONFIG_PATH: &str = "PAKET_KONFIGURATOR_CONFIG";
    /// 目录文件路径
    pub const CATALOG_PATH: &str = "PAKET_KONFIGURATOR_CATALOG";
    /// 导出目录
    pub const EXPORT_DIR: &str = "PAKET_KONFIGURATOR_EXPORT_DIR";
    /// 界面语言
    pub const LOCALE: &str = "PAKET_KONFIGURATOR_LOCALE";
}

/// 默认目录文件名
pub const DEFAULT_CATALOG_FILE: &str = "Miete.xlsx";
/// 上传替换文件名
pub const DEFAULT_UPLOADED_FILE: &str = "Miete_uploaded.xlsx";
/// 默认界面语言
pub const DEFAULT_LOCALE: &str = "de";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Konfiguration konnte nicht gelesen werden ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("Konfiguration ist fehlerhaft ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("Konfiguration konnte nicht gespeichert werden ({path}): {message}")]
    WriteError { path: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 目录文件（默认 Miete.xlsx）
    pub catalog_path: PathBuf,
    /// 上传替换文件（存在时重启后优先使用）
    pub uploaded_catalog_path: PathBuf,
    /// 导出目录
    pub export_dir: PathBuf,
    /// 默认增值税率
    pub default_vat: VatRate,
    /// 默认表格导出格式
    pub export_format: ExportFormat,
    /// 价格列关键字
    pub price_keywords: Vec<String>,
    /// 界面语言（de / en）
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
            uploaded_catalog_path: PathBuf::from(DEFAULT_UPLOADED_FILE),
            export_dir: PathBuf::from("."),
            default_vat: VatRate::Standard,
            export_format: ExportFormat::Xlsx,
            price_keywords: PRICE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl AppConfig {
    /// 启动时实际使用的目录文件
    ///
    /// 上传的替换文件存在时优先（重启生效），否则使用默认目录文件。
    pub fn active_catalog_path(&self) -> &Path {
        if self.uploaded_catalog_path.is_file() {
            &self.uploaded_catalog_path
        } else {
            &self.catalog_path
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 默认配置文件路径
    ///
    /// 允许通过环境变量显式指定（便于调试/测试）。
    pub fn default_config_path() -> PathBuf {
        if let Ok(path) = std::env::var(config_keys::CONFIG_PATH) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        match dirs::config_dir() {
            Some(dir) => dir.join("paket-konfigurator").join("config.json"),
            None => PathBuf::from("./paket-konfigurator.json"),
        }
    }

    /// 从文件加载配置（文件不存在时返回默认值），再应用环境变量覆写
    pub fn load(path: &Path) -> ConfigResult<AppConfig> {
        let config = if path.is_file() {
            let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            tracing::debug!(path = %path.display(), "配置文件不存在，使用默认配置");
            AppConfig::default()
        };

        Ok(Self::apply_env_overrides(config))
    }

    /// 保存配置（格式化 JSON）
    pub fn save(path: &Path, config: &AppConfig) -> ConfigResult<()> {
        let write_err = |e: String| ConfigError::WriteError {
            path: path.display().to_string(),
            message: e,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
            }
        }
        let json = serde_json::to_string_pretty(config).map_err(|e| write_err(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| write_err(e.to_string()))
    }

    fn apply_env_overrides(mut config: AppConfig) -> AppConfig {
        if let Some(v) = env_value(config_keys::CATALOG_PATH) {
            config.catalog_path = PathBuf::from(v);
        }
        if let Some(v) = env_value(config_keys::EXPORT_DIR) {
            config.export_dir = PathBuf::from(v);
        }
        if let Some(v) = env_value(config_keys::LOCALE) {
            config.locale = v;
        }
        config
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
