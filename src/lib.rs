// ==========================================
// 包配置器 (Paket-Konfigurator) - 核心库
// ==========================================
// 职责: 从 Excel 租赁价目表组装设备包，计算折扣/增值税，
//       导出表格与报价文本
// 流程: 目录加载 → 用户选择 → 包计算 → 导出
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "de");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 目录加载
pub mod importer;

// 引擎层 - 筛选与计算
pub mod engine;

// 导出层 - 表格与报价文本
pub mod export;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态组装
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    Catalog, CatalogEntry, ColumnLayout, DiscountPct, LineItem, PackageSummary, Selection,
    VatRate,
};

// 导入 / 引擎 / 导出
pub use engine::{filter_catalog, PackageCalculator};
pub use export::{ExportBundle, ExportFormat};
pub use importer::{parse_number_or_default, CatalogLoader, ColumnDetector};

// API
pub use api::{ApiError, ApiResult, PackageApi, UploadApi};
pub use app::AppState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Paket-Konfigurator — Institut für Holztechnologie";
