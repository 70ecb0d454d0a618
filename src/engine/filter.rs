// ==========================================
// 包配置器 - 目录筛选
// ==========================================
// 规则: 名称子串匹配，不区分大小写；空查询返回全部
// ==========================================

use crate::domain::catalog::{Catalog, CatalogEntry};

/// 按名称筛选目录（保持表格顺序）
pub fn filter_catalog<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a CatalogEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.entries().iter().collect();
    }

    catalog
        .entries()
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .collect()
}
