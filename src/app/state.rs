// ==========================================
// 包配置器 - 应用状态
// ==========================================
// 职责: 启动时加载一次目录快照，组装 API 实例
// 红线: 目录快照只读；替换目录需重新构建 AppState（即重启）
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{ApiError, ApiResult, PackageApi, UploadApi};
use crate::config::{AppConfig, ConfigManager};
use crate::domain::catalog::Catalog;
use crate::importer::{CatalogLoader, ColumnDetector};

/// 应用状态
///
/// 包含目录快照与所有API实例
pub struct AppState {
    /// 当前配置
    pub config: AppConfig,

    /// 本次启动实际加载的目录文件
    pub catalog_path: PathBuf,

    /// 目录快照（只读）
    pub catalog: Arc<Catalog>,

    /// 目录加载失败原因（已替换为空目录）
    pub load_warning: Option<String>,

    /// 包配置API
    pub package_api: Arc<PackageApi>,

    /// 目录上传API
    pub upload_api: Arc<UploadApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// 该方法会：
    /// 1. 选择目录文件（上传的替换文件优先）
    /// 2. 容错加载目录（失败时使用空目录并记录原因）
    /// 3. 创建所有API实例
    pub fn new(config: AppConfig) -> Self {
        let catalog_path = config.active_catalog_path().to_path_buf();
        Self::with_catalog(config, catalog_path)
    }

    /// 使用显式指定的目录文件创建AppState（忽略上传的替换文件）
    pub fn with_catalog(config: AppConfig, catalog_path: PathBuf) -> Self {
        tracing::info!("初始化AppState，目录文件: {}", catalog_path.display());

        let detector = ColumnDetector::with_keywords(config.price_keywords.clone());
        let (catalog, error) = CatalogLoader::new(detector.clone()).load_or_empty(&catalog_path);
        let load_warning = error.map(|e| e.to_string());

        if catalog.is_empty() && load_warning.is_none() {
            tracing::warn!("目录文件中没有任何商品: {}", catalog_path.display());
        }

        let catalog = Arc::new(catalog);
        let package_api = Arc::new(PackageApi::new(catalog.clone()));
        let upload_api = Arc::new(UploadApi::new(
            config.uploaded_catalog_path.clone(),
            CatalogLoader::new(detector),
        ));

        Self {
            config,
            catalog_path,
            catalog,
            load_warning,
            package_api,
            upload_api,
        }
    }

    /// 目录是否可用（不可用时调用方应提示并停止后续流程）
    pub fn ensure_catalog_ready(&self) -> ApiResult<()> {
        if let Some(reason) = &self.load_warning {
            return Err(ApiError::CatalogLoadFailure(reason.clone()));
        }
        if self.catalog.is_empty() {
            return Err(ApiError::CatalogUnavailable(
                self.catalog_path.display().to_string(),
            ));
        }
        Ok(())
    }
}

/// 获取默认配置文件路径
pub fn get_default_config_path() -> PathBuf {
    ConfigManager::default_config_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_catalog_gives_warning_and_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            catalog_path: dir.path().join("Miete.xlsx"),
            uploaded_catalog_path: dir.path().join("Miete_uploaded.xlsx"),
            ..AppConfig::default()
        };

        let state = AppState::new(config);

        assert!(state.catalog.is_empty());
        assert!(state.load_warning.is_some());
        assert!(matches!(
            state.ensure_catalog_ready(),
            Err(ApiError::CatalogLoadFailure(_))
        ));
    }

    #[test]
    fn test_csv_catalog_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Miete.csv");
        std::fs::write(&path, "Artikel,Preis pro Tag\nTisch,10\nStuhl,5\n").unwrap();
        let config = AppConfig {
            catalog_path: path,
            uploaded_catalog_path: dir.path().join("Miete_uploaded.xlsx"),
            ..AppConfig::default()
        };

        let state = AppState::new(config);

        assert!(state.ensure_catalog_ready().is_ok());
        assert_eq!(state.catalog.len(), 2);
        assert_eq!(state.package_api.article_names().unwrap(), vec!["Tisch", "Stuhl"]);
    }
}
