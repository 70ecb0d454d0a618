// ==========================================
// 包配置器 - 目录上传API
// ==========================================
// 职责: 校验并保存替换目录文件
// 红线: 当前目录快照不变，新文件在重启后生效
// 流程: 暂存 → 解析校验 → 原子重命名到目标路径
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::importer::CatalogLoader;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// 允许上传的扩展名
pub const UPLOAD_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// 上传结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// 保存路径
    pub stored_path: PathBuf,
    /// 新文件中的商品数
    pub entries: usize,
    /// 识别到的价格列
    pub price_column: Option<String>,
    /// 是否需要重启才能生效（始终为 true）
    pub requires_restart: bool,
}

/// 目录上传API
pub struct UploadApi {
    target_path: PathBuf,
    loader: CatalogLoader,
}

impl UploadApi {
    /// 创建新的UploadApi实例
    pub fn new(target_path: PathBuf, loader: CatalogLoader) -> Self {
        Self {
            target_path,
            loader,
        }
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// 上传本地文件
    pub fn upload(&self, source: &Path) -> ApiResult<UploadReceipt> {
        let file_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                ApiError::UploadProcessingFailure(format!("Ungültiger Dateiname: {}", source.display()))
            })?;
        let bytes = std::fs::read(source)
            .map_err(|e| ApiError::UploadProcessingFailure(format!("{}: {}", source.display(), e)))?;

        self.upload_bytes(file_name, &bytes)
    }

    /// 上传文件内容（file_name 仅用于判断格式）
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub fn upload_bytes(&self, file_name: &str, bytes: &[u8]) -> ApiResult<UploadReceipt> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if !UPLOAD_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ApiError::UploadProcessingFailure(format!(
                "Dateiformat nicht unterstützt: {} (nur .xlsx/.xls)",
                file_name
            )));
        }

        let staging = self.staging_path(&ext);
        self.stage(&staging, bytes)?;

        // 解析失败时删除暂存文件，目标文件保持不变
        let catalog = match self.loader.load(&staging) {
            Ok(catalog) => catalog,
            Err(e) => {
                let _ = std::fs::remove_file(&staging);
                tracing::warn!(error = %e, file = file_name, "上传文件解析失败");
                return Err(ApiError::UploadProcessingFailure(e.to_string()));
            }
        };

        if catalog.is_empty() {
            let _ = std::fs::remove_file(&staging);
            return Err(ApiError::UploadProcessingFailure(format!(
                "{} enthält keine Artikel",
                file_name
            )));
        }

        std::fs::rename(&staging, &self.target_path).map_err(|e| {
            let _ = std::fs::remove_file(&staging);
            ApiError::UploadProcessingFailure(format!("{}: {}", self.target_path.display(), e))
        })?;

        tracing::info!(
            target = %self.target_path.display(),
            entries = catalog.len(),
            "替换目录已保存，重启后生效"
        );

        Ok(UploadReceipt {
            stored_path: self.target_path.clone(),
            entries: catalog.len(),
            price_column: catalog.layout().and_then(|l| l.price_column.clone()),
            requires_restart: true,
        })
    }

    fn staging_path(&self, ext: &str) -> PathBuf {
        let stem = self
            .target_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("upload");
        self.target_path
            .with_file_name(format!("{}.staging.{}", stem, ext))
    }

    fn stage(&self, staging: &Path, bytes: &[u8]) -> ApiResult<()> {
        if let Some(parent) = staging.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ApiError::UploadProcessingFailure(e.to_string()))?;
            }
        }
        std::fs::write(staging, bytes)
            .map_err(|e| ApiError::UploadProcessingFailure(format!("{}: {}", staging.display(), e)))
    }
}
