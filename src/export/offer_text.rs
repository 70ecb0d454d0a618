// ==========================================
// 包配置器 - 报价文本
// ==========================================
// 结构固定:
//   标题 + 日期
//   每行: - <数量> × <商品> @ <单价> € = <行净额> €
//   小计 / 折扣（仅折扣 > 0）/ 增值税（仅计税时）/ 含税总额
// ==========================================

use crate::domain::package::PackageSummary;
use chrono::NaiveDate;
use std::fmt::Write;

/// 报价标题
pub const OFFER_TITLE: &str = "Angebot — Paket zusammengestellt mit dem Paket-Konfigurator";

pub struct OfferTextFormatter;

impl OfferTextFormatter {
    /// 生成报价文本（UTF-8 纯文本）
    pub fn render(&self, summary: &PackageSummary, date: NaiveDate) -> String {
        let mut text = String::new();

        // 写入 String 不会失败
        let _ = writeln!(text, "{}", OFFER_TITLE);
        let _ = writeln!(text, "Datum: {}", date.format("%Y-%m-%d"));
        let _ = writeln!(text);
        let _ = writeln!(text, "Positionen:");

        for line in summary.line_items.iter().filter(|l| l.is_included()) {
            let _ = writeln!(
                text,
                "- {} × {} @ {:.2} € = {:.2} €",
                line.quantity, line.article, line.unit_price, line.net_amount
            );
        }

        let _ = writeln!(text);
        let _ = writeln!(text, "Zwischensumme: {:.2} €", summary.net_subtotal);
        if summary.discount_pct.is_applied() {
            let _ = writeln!(
                text,
                "Rabatt: {:.2} € ({:.2}%)",
                summary.discount_amount,
                summary.discount_pct.value()
            );
        }
        if summary.vat_applied() {
            let _ = writeln!(
                text,
                "MwSt ({}%): {:.2} €",
                summary.vat_rate.percent(),
                summary.vat_amount
            );
        }
        let _ = writeln!(text, "Gesamt (Brutto): {:.2} €", summary.gross_total);

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::package::LineItem;
    use crate::domain::types::{DiscountPct, VatRate};
    use crate::engine::PackageCalculator;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    fn lines() -> Vec<LineItem> {
        vec![LineItem::new("Tisch", 2, 10.0), LineItem::new("Stuhl", 3, 5.0)]
    }

    #[test]
    fn test_offer_with_vat_only() {
        let summary = PackageCalculator.compute(&lines(), DiscountPct::zero(), VatRate::Standard);
        let text = OfferTextFormatter.render(&summary, date());

        let expected = "\
Angebot — Paket zusammengestellt mit dem Paket-Konfigurator
Datum: 2024-05-17

Positionen:
- 2 × Tisch @ 10.00 € = 20.00 €
- 3 × Stuhl @ 5.00 € = 15.00 €

Zwischensumme: 35.00 €
MwSt (19%): 6.65 €
Gesamt (Brutto): 41.65 €
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_offer_with_discount_only() {
        let summary =
            PackageCalculator.compute(&lines(), DiscountPct::new(10.0).unwrap(), VatRate::Zero);
        let text = OfferTextFormatter.render(&summary, date());

        assert!(text.contains("Rabatt: 3.50 € (10.00%)\n"));
        assert!(!text.contains("MwSt"));
        assert!(text.ends_with("Gesamt (Brutto): 31.50 €\n"));
    }

    #[test]
    fn test_offer_skips_zero_quantity() {
        let mut input = lines();
        input[1].quantity = 0;
        let summary = PackageCalculator.compute(&input, DiscountPct::zero(), VatRate::Zero);
        let text = OfferTextFormatter.render(&summary, date());

        assert!(!text.contains("Stuhl"));
        assert!(!text.contains("Rabatt"));
    }
}
