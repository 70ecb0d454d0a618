// ==========================================
// 包配置器 - 导出模块错误类型
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Keine Positionen mit Menge > 0 im Paket")]
    EmptyPackage,

    #[error("Excel-Export fehlgeschlagen: {0}")]
    XlsxWriteError(String),

    #[error("CSV-Export fehlgeschlagen: {0}")]
    CsvWriteError(String),

    #[error("Datei konnte nicht geschrieben werden: {0}")]
    FileWriteError(String),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::XlsxWriteError(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvWriteError(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::FileWriteError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
