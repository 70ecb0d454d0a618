// ==========================================
// 包配置器 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换下层错误为用户可读的错误消息
// 约定: code() 为稳定错误代码，命令行日志中输出
// 约定: 仅两类失败可恢复: 目录加载失败 / 上传处理失败
// ==========================================

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 目录相关
    // ==========================================
    /// 目录文件缺失/不可读/无工作表（已替换为空目录）
    #[error("Artikelliste konnte nicht geladen werden: {0}")]
    CatalogLoadFailure(String),

    /// 目录为空，后续选择流程停止
    #[error("Keine Daten gefunden: {0}")]
    CatalogUnavailable(String),

    /// 上传文件无法解析（当前目录保持不变）
    #[error("Fehler beim Verarbeiten: {0}")]
    UploadProcessingFailure(String),

    // ==========================================
    // 输入校验错误
    // ==========================================
    #[error("Ungültige Eingabe: {0}")]
    InvalidInput(String),

    #[error("Artikel nicht gefunden: {0}")]
    NotFound(String),

    #[error("Artikel mehrfach ausgewählt: {0}")]
    DuplicateArticle(String),

    // ==========================================
    // 导出错误
    // ==========================================
    #[error("Keine Positionen mit Menge > 0 im Paket")]
    EmptyPackage,

    #[error("Export fehlgeschlagen: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("Konfigurationsfehler: {0}")]
    ConfigError(String),

    #[error("Interner Fehler: {0}")]
    InternalError(String),
}

impl ApiError {
    /// 稳定错误代码（供前端/脚本识别）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::CatalogLoadFailure(_) => "CATALOG_LOAD_FAILURE",
            ApiError::CatalogUnavailable(_) => "CATALOG_UNAVAILABLE",
            ApiError::UploadProcessingFailure(_) => "UPLOAD_PROCESSING_FAILURE",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::DuplicateArticle(_) => "DUPLICATE_ARTICLE",
            ApiError::EmptyPackage => "EMPTY_PACKAGE",
            ApiError::ExportError(_) => "EXPORT_ERROR",
            ApiError::ConfigError(_) => "CONFIG_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

// ==========================================
// 从下层错误转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::CatalogLoadFailure(err.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::EmptyPackage => ApiError::EmptyPackage,
            other => ApiError::ExportError(other.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
