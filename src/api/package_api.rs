// ==========================================
// 包配置器 - 包配置API
// ==========================================
// 职责: 目录浏览、包计算、导出
// 红线: 目录为空时拒绝所有后续操作（选择界面不展示）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator;
use crate::domain::catalog::{Catalog, CatalogEntry};
use crate::domain::package::{PackageSummary, Selection};
use crate::domain::types::{DiscountPct, VatRate};
use crate::engine::{filter_catalog, PackageCalculator};
use crate::export::{ExportBundle, ExportFormat};
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::instrument;

/// 包配置API
pub struct PackageApi {
    catalog: Arc<Catalog>,
    calculator: PackageCalculator,
}

impl PackageApi {
    /// 创建新的PackageApi实例（目录快照只读共享）
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            calculator: PackageCalculator::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn ensure_catalog(&self) -> ApiResult<&Catalog> {
        if self.catalog.is_empty() {
            let source = self
                .catalog
                .source()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "Artikelliste".to_string());
            return Err(ApiError::CatalogUnavailable(source));
        }
        Ok(&self.catalog)
    }

    /// 浏览目录（名称子串筛选，不区分大小写）
    pub fn list_articles(&self, query: &str) -> ApiResult<Vec<CatalogEntry>> {
        let catalog = self.ensure_catalog()?;
        Ok(filter_catalog(catalog, query).into_iter().cloned().collect())
    }

    /// 可选商品名称（表格顺序）
    pub fn article_names(&self) -> ApiResult<Vec<String>> {
        let catalog = self.ensure_catalog()?;
        Ok(catalog.names().map(str::to_string).collect())
    }

    /// 配置包（原始输入，边界校验后计算）
    ///
    /// # 参数
    /// - items: (商品, 数量) 按选择顺序
    /// - discount_pct: 折扣百分比 [0, 100]
    /// - vat_pct: 增值税率 {0, 7, 19}
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub fn configure(
        &self,
        items: Vec<(String, u32)>,
        discount_pct: f64,
        vat_pct: u8,
    ) -> ApiResult<PackageSummary> {
        let catalog = self.ensure_catalog()?;
        let discount = validator::validate_discount(discount_pct)?;
        let vat = validator::validate_vat(vat_pct)?;
        let selection = validator::validate_selection(catalog, items)?;

        self.configure_selection(&selection, discount, vat)
    }

    /// 配置包（已校验输入）
    pub fn configure_selection(
        &self,
        selection: &Selection,
        discount: DiscountPct,
        vat: VatRate,
    ) -> ApiResult<PackageSummary> {
        let catalog = self.ensure_catalog()?;
        let summary = self
            .calculator
            .compute_selection(catalog, selection, discount, vat);

        tracing::info!(
            lines = summary.line_items.len(),
            gross_total = summary.gross_total,
            "包配置完成"
        );
        Ok(summary)
    }

    /// 导出包（表格 + 报价文本）
    pub fn export(
        &self,
        summary: &PackageSummary,
        generated_at: NaiveDateTime,
        format: ExportFormat,
    ) -> ApiResult<ExportBundle> {
        Ok(ExportBundle::build(summary, generated_at, format)?)
    }
}
