// ==========================================
// 包配置器 - 目录上传集成测试
// ==========================================
// 覆盖: 上传落盘 / 运行中目录不变 / 重启后生效 / 非法文件
// ==========================================


use paket_konfigurator::api::ApiError;
use paket_konfigurator::app::AppState;
use paket_konfigurator::config::AppConfig;
use tempfile::TempDir;
use test_helpers::{standard_catalog, write_catalog_xlsx, Cell};

fn config_for(dir: &TempDir) -> AppConfig {
    AppConfig {
        catalog_path: standard_catalog(dir).unwrap(),
        uploaded_catalog_path: dir.path().join("Miete_uploaded.xlsx"),
        ..AppConfig::default()
    }
}

fn new_catalog(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("neu.xlsx");
    write_catalog_xlsx(
        &path,
        &["Artikel", "Preis pro Set"],
        &[
            vec![Cell::Text("Zelt"), Cell::Num(80.0)],
            vec![Cell::Text("Bierbank"), Cell::Num(12.5)],
            vec![Cell::Text("Heizpilz"), Cell::Num(25.0)],
        ],
    )
    .unwrap();
    path
}

#[test]
fn test_upload_takes_effect_after_restart() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let state = AppState::new(config.clone());

    let receipt = state.upload_api.upload(&new_catalog(&dir)).unwrap();

    assert_eq!(receipt.entries, 3);
    assert_eq!(receipt.price_column.as_deref(), Some("Preis pro Set"));
    assert!(receipt.requires_restart);
    assert!(config.uploaded_catalog_path.is_file());

    // 运行中的目录快照不变
    assert!(state.catalog.get("Tisch").is_some());
    assert!(state.catalog.get("Zelt").is_none());

    // 重启后使用上传的文件
    let restarted = AppState::new(config.clone());
    assert_eq!(restarted.catalog_path, config.uploaded_catalog_path);
    assert_eq!(restarted.catalog.len(), 3);
    assert_eq!(restarted.catalog.get("Bierbank").unwrap().unit_price, 12.5);
}

#[test]
fn test_invalid_upload_keeps_previous_file() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let state = AppState::new(config.clone());
    state.upload_api.upload(&new_catalog(&dir)).unwrap();

    let broken = dir.path().join("kaputt.xlsx");
    std::fs::write(&broken, b"kein excel").unwrap();
    let result = state.upload_api.upload(&broken);

    assert!(matches!(result, Err(ApiError::UploadProcessingFailure(_))));
    let restarted = AppState::new(config);
    assert!(restarted.catalog.get("Zelt").is_some());

    // 暂存文件已清理
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains(".staging."))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_upload_rejects_other_formats() {
    let dir = TempDir::new().unwrap();
    let state = AppState::new(config_for(&dir));

    let csv = dir.path().join("liste.csv");
    std::fs::write(&csv, "Artikel,Preis\nZelt,80\n").unwrap();

    assert!(matches!(
        state.upload_api.upload(&csv),
        Err(ApiError::UploadProcessingFailure(_))
    ));
    assert!(!dir.path().join("Miete_uploaded.xlsx").exists());
}

#[test]
fn test_upload_possible_while_catalog_missing() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        catalog_path: dir.path().join("fehlt.xlsx"),
        uploaded_catalog_path: dir.path().join("Miete_uploaded.xlsx"),
        ..AppConfig::default()
    };
    let state = AppState::new(config.clone());
    assert!(state.ensure_catalog_ready().is_err());

    state.upload_api.upload(&new_catalog(&dir)).unwrap();

    let restarted = AppState::new(config);
    assert!(restarted.ensure_catalog_ready().is_ok());
}
