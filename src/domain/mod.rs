// ==========================================
// 包配置器 - 领域模型层
// ==========================================
// 职责: 定义目录、选择、行项目、汇总等领域类型
// 红线: 不含文件读写逻辑,不含计算逻辑
// ==========================================

pub mod catalog;
pub mod package;
pub mod types;

// 重导出核心类型
pub use catalog::{Catalog, CatalogEntry, ColumnLayout};
pub use package::{LineItem, PackageSummary, Selection};
pub use types::{DiscountPct, VatRate};
