// ==========================================
// 包配置器 - 目录加载器
// ==========================================
// 流程:
//   1. 文件读取与解析（第一个工作表，第一行为表头）
//   2. 表头 TRIM
//   3. 列识别（名称列 = 第一列，价格列 = 关键字/最后一列）
//   4. 价格容错解析（失败按 0）
//   5. 构建只读目录快照
// 失败策略: load_or_empty 返回空目录 + 错误，由调用方提示并停止后续流程
// ==========================================

use crate::domain::catalog::{Catalog, CatalogEntry};
use crate::importer::catalog_importer_trait::{RawCell, RawTable};
use crate::importer::column_detector::ColumnDetector;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::number_parser::parse_price;
use std::path::{Path, PathBuf};
use tracing::instrument;

// ==========================================
// CatalogLoader - 目录加载器
// ==========================================
pub struct CatalogLoader {
    detector: ColumnDetector,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new(ColumnDetector::default())
    }
}

impl CatalogLoader {
    pub fn new(detector: ColumnDetector) -> Self {
        Self { detector }
    }

    /// 从文件加载目录
    ///
    /// # 返回
    /// - Ok(Catalog): 目录快照（可能为空，例如只有表头）
    /// - Err(ImportError): 文件缺失/不可读/无工作表
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ImportResult<Catalog> {
        let path = path.as_ref();
        let table = UniversalFileParser.parse(path)?;
        let catalog = self.build(&table, Some(path.to_path_buf()))?;

        tracing::info!(
            entries = catalog.len(),
            price_column = ?catalog.layout().and_then(|l| l.price_column.as_deref()),
            "目录加载完成"
        );
        Ok(catalog)
    }

    /// 容错加载：失败时返回空目录与错误
    pub fn load_or_empty<P: AsRef<Path>>(&self, path: P) -> (Catalog, Option<ImportError>) {
        match self.load(path) {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                tracing::warn!(error = %e, "目录加载失败，使用空目录");
                (Catalog::empty(), Some(e))
            }
        }
    }

    /// 由原始表格构建目录（纯函数，便于单测）
    pub fn build_catalog(&self, table: &RawTable) -> ImportResult<Catalog> {
        self.build(table, None)
    }

    fn build(&self, table: &RawTable, source: Option<PathBuf>) -> ImportResult<Catalog> {
        let (name_idx, price_idx, layout) = self
            .detector
            .detect(&table.headers)
            .ok_or(ImportError::NoColumns)?;

        let mut entries = Vec::with_capacity(table.rows.len());
        let mut coerced = 0usize;

        for row in &table.rows {
            let name = match row.get(name_idx) {
                Some(cell) if !cell.is_blank() => cell.as_label(),
                // 名称为空的行无法被选择，直接跳过
                _ => continue,
            };

            let unit_price = match price_idx.and_then(|i| row.get(i)) {
                Some(cell) => {
                    let price = parse_price(cell);
                    if price == 0.0 && !matches!(cell, RawCell::Number(_)) {
                        coerced += 1;
                    }
                    price
                }
                None => 0.0,
            };

            entries.push(CatalogEntry::new(name, unit_price));
        }

        if coerced > 0 {
            tracing::debug!(coerced, "部分价格单元格无法解析，已按 0 处理");
        }

        Ok(Catalog::from_entries(entries, Some(layout), source))
    }
}
