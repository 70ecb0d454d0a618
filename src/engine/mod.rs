// ==========================================
// 包配置器 - 引擎层
// ==========================================
// 职责: 目录筛选与包汇总计算
// 红线: 引擎不读写文件，不做输入校验（由 API 层负责）
// ==========================================

pub mod calculator;
pub mod filter;

// 重导出核心引擎
pub use calculator::PackageCalculator;
pub use filter::filter_catalog;
