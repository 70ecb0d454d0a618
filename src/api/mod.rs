// ==========================================
// 包配置器 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供命令行前端调用
// ==========================================

pub mod error;
pub mod package_api;
pub mod upload_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use package_api::PackageApi;
pub use upload_api::{UploadApi, UploadReceipt};
