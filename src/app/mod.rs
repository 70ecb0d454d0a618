// ==========================================
// 包配置器 - 应用层
// ==========================================
// 职责: 组装配置、目录快照与 API
// ==========================================

pub mod state;

// 重导出
pub use state::{get_default_config_path, AppState};
