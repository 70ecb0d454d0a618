// ==========================================
// 包配置器 - 导入层
// ==========================================
// 职责: 外部表格 → 只读商品目录
// 支持: Excel (.xlsx/.xls), CSV
// ==========================================

// 模块声明
pub mod catalog_importer_trait;
pub mod catalog_loader;
pub mod column_detector;
pub mod error;
pub mod file_parser;
pub mod number_parser;

// 重导出核心类型
pub use catalog_importer_trait::{FileParser, RawCell, RawTable};
pub use catalog_loader::CatalogLoader;
pub use column_detector::{ColumnDetector, ColumnRule, PRICE_KEYWORDS};
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use number_parser::{parse_number_or_default, parse_price, DEFAULT_PRICE};
