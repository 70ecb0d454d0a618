// ==========================================
// 包配置器 - 导出层
// ==========================================
// 职责: 包汇总 → 表格文件 + 报价文本
// 红线: 每次请求重新生成，不缓存
// ==========================================

pub mod bundle;
pub mod csv_exporter;
pub mod error;
pub mod offer_text;
pub mod rows;
pub mod xlsx_exporter;

// 重导出
pub use bundle::{export_file_name, ExportBundle, ExportFormat};
pub use csv_exporter::CsvExporter;
pub use error::{ExportError, ExportResult};
pub use offer_text::{OfferTextFormatter, OFFER_TITLE};
pub use rows::{build_rows, ExportRow, EXPORT_HEADERS};
pub use xlsx_exporter::{XlsxExporter, SHEET_NAME};
