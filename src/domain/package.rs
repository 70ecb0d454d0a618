// ==========================================
// 包配置器 - 包（Paket）领域模型
// ==========================================
// 职责: 用户选择、行项目、汇总结果
// 红线: 汇总完全由行项目与两个百分比派生，不落库
// ==========================================

use crate::domain::types::{DiscountPct, VatRate};
use serde::{Deserialize, Serialize};

// ==========================================
// Selection - 用户选择（保持选择顺序）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    items: Vec<(String, u32)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条选择（不做去重校验，由边界层负责）
    pub fn push(&mut self, article: impl Into<String>, quantity: u32) {
        self.items.push((article.into(), quantity));
    }

    pub fn with(mut self, article: impl Into<String>, quantity: u32) -> Self {
        self.push(article, quantity);
        self
    }

    pub fn items(&self) -> &[(String, u32)] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl FromIterator<(String, u32)> for Selection {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

// ==========================================
// LineItem - 行项目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub article: String,  // 商品名称（引用 CatalogEntry.name）
    pub quantity: u32,    // 数量
    pub unit_price: f64,  // 单价（选择时拷贝）
    pub net_amount: f64,  // 行净额 = quantity × unit_price
}

impl LineItem {
    pub fn new(article: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            article: article.into(),
            quantity,
            unit_price,
            net_amount: f64::from(quantity) * unit_price,
        }
    }

    /// 数量为 0 的行不进入汇总与导出
    pub fn is_included(&self) -> bool {
        self.quantity > 0
    }
}

// ==========================================
// PackageSummary - 包汇总
// ==========================================
// 金额字段全部为完整精度，两位小数仅用于展示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSummary {
    pub line_items: Vec<LineItem>,   // 数量 > 0 的行（保持选择顺序）
    pub net_subtotal: f64,           // 净额小计
    pub discount_pct: DiscountPct,   // 折扣百分比
    pub discount_amount: f64,        // 折扣金额
    pub net_after_discount: f64,     // 折后净额
    pub vat_rate: VatRate,           // 增值税率
    pub vat_amount: f64,             // 增值税额（未计税时为 0）
    pub gross_total: f64,            // 含税总额
}

impl PackageSummary {
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    pub fn vat_applied(&self) -> bool {
        self.vat_rate.is_applied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_net_amount() {
        let line = LineItem::new("Tisch", 3, 12.5);
        assert_eq!(line.net_amount, 37.5);
        assert!(line.is_included());
        assert!(!LineItem::new("Tisch", 0, 12.5).is_included());
    }

    #[test]
    fn test_selection_keeps_order() {
        let selection = Selection::new().with("Stuhl", 3).with("Tisch", 2);
        let names: Vec<&str> = selection.items().iter().map(|(a, _)| a.as_str()).collect();
        assert_eq!(names, vec!["Stuhl", "Tisch"]);
    }
}
