// ==========================================
// 包配置器 - 导出行结构
// ==========================================
// 每个行项目一行，汇总列在每行重复
// ==========================================

use crate::domain::package::PackageSummary;
use serde::Serialize;

/// 导出表头（列顺序固定）
pub const EXPORT_HEADERS: [&str; 10] = [
    "Artikel",
    "Menge",
    "Einzelpreis",
    "ZeileNetto",
    "Rabatt_%",
    "MwSt_%",
    "NettoSumme",
    "NettoNachRabatt",
    "MwStBetrag",
    "BruttoSumme",
];

// ==========================================
// ExportRow - 导出行
// ==========================================
// 字段顺序与 EXPORT_HEADERS 一致（CSV 表头由 serde 生成）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Artikel")]
    pub article: String,
    #[serde(rename = "Menge")]
    pub quantity: u32,
    #[serde(rename = "Einzelpreis")]
    pub unit_price: f64,
    #[serde(rename = "ZeileNetto")]
    pub net_amount: f64,
    #[serde(rename = "Rabatt_%")]
    pub discount_pct: f64,
    #[serde(rename = "MwSt_%")]
    pub vat_pct: u8,
    #[serde(rename = "NettoSumme")]
    pub net_subtotal: f64,
    #[serde(rename = "NettoNachRabatt")]
    pub net_after_discount: f64,
    #[serde(rename = "MwStBetrag")]
    pub vat_amount: f64,
    #[serde(rename = "BruttoSumme")]
    pub gross_total: f64,
}

/// 汇总 → 导出行（数量为 0 的行已在汇总中剔除）
pub fn build_rows(summary: &PackageSummary) -> Vec<ExportRow> {
    summary
        .line_items
        .iter()
        .filter(|l| l.is_included())
        .map(|l| ExportRow {
            article: l.article.clone(),
            quantity: l.quantity,
            unit_price: l.unit_price,
            net_amount: l.net_amount,
            discount_pct: summary.discount_pct.value(),
            vat_pct: summary.vat_rate.percent(),
            net_subtotal: summary.net_subtotal,
            net_after_discount: summary.net_after_discount,
            vat_amount: summary.vat_amount,
            gross_total: summary.gross_total,
        })
        .collect()
}
