// ==========================================
// 包配置器 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 注意: 价格单元格解析失败不是错误（按 0 处理）
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("Datei nicht gefunden: {0}")]
    FileNotFound(String),

    #[error("Dateiformat nicht unterstützt: {0} (nur .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("Datei konnte nicht gelesen werden: {0}")]
    FileReadError(String),

    #[error("Excel-Datei konnte nicht verarbeitet werden: {0}")]
    ExcelParseError(String),

    #[error("CSV-Datei konnte nicht verarbeitet werden: {0}")]
    CsvParseError(String),

    // ===== 表结构错误 =====
    #[error("Die Excel-Datei enthält keine Tabelle")]
    NoWorksheet,

    #[error("Die Tabelle hat keine Kopfzeile")]
    NoHeaderRow,

    #[error("Die Tabelle hat keine Spalten")]
    NoColumns,
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
