// ==========================================
// 包配置器 - 包计算引擎
// ==========================================
// 红线: 纯函数，无 I/O，同一输入必得同一输出
// 红线: 内部全精度计算，两位小数只用于展示
// ==========================================
// 输入: 行项目 + 折扣百分比 + 增值税率
// 输出: PackageSummary
// 公式:
//   net_subtotal       = Σ quantity × unit_price（仅 quantity > 0）
//   discount_amount    = net_subtotal × discount / 100
//   net_after_discount = net_subtotal − discount_amount
//   vat_amount         = 0（税率 0）或 net_after_discount × vat / 100
//   gross_total        = net_after_discount + vat_amount
// ==========================================

use crate::domain::catalog::Catalog;
use crate::domain::package::{LineItem, PackageSummary, Selection};
use crate::domain::types::{DiscountPct, VatRate};
use tracing::instrument;

// ==========================================
// PackageCalculator - 包计算引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct PackageCalculator;

impl PackageCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 按选择顺序生成行项目（单价在选择时拷贝）
    ///
    /// 目录中不存在的商品被跳过；数量为 0 的行保留，由 compute 过滤。
    pub fn price_selection(&self, catalog: &Catalog, selection: &Selection) -> Vec<LineItem> {
        selection
            .items()
            .iter()
            .filter_map(|(article, quantity)| match catalog.get(article) {
                Some(entry) => Some(LineItem::new(article.clone(), *quantity, entry.unit_price)),
                None => {
                    tracing::warn!(article = %article, "所选商品不在目录中，已跳过");
                    None
                }
            })
            .collect()
    }

    /// 计算包汇总
    #[instrument(skip(self, lines), fields(lines = lines.len(), discount = discount.value(), vat = vat.percent()))]
    pub fn compute(
        &self,
        lines: &[LineItem],
        discount: DiscountPct,
        vat: VatRate,
    ) -> PackageSummary {
        // 过滤数量为 0 的行，重新计算行净额
        let line_items: Vec<LineItem> = lines
            .iter()
            .filter(|l| l.is_included())
            .map(|l| LineItem::new(l.article.clone(), l.quantity, l.unit_price))
            .collect();

        let net_subtotal: f64 = line_items.iter().map(|l| l.net_amount).sum();
        let discount_amount = net_subtotal * (discount.value() / 100.0);
        let net_after_discount = net_subtotal - discount_amount;
        let vat_amount = if vat.is_applied() {
            net_after_discount * (f64::from(vat.percent()) / 100.0)
        } else {
            0.0
        };
        let gross_total = net_after_discount + vat_amount;

        tracing::debug!(net_subtotal, gross_total, "包汇总计算完成");

        PackageSummary {
            line_items,
            net_subtotal,
            discount_pct: discount,
            discount_amount,
            net_after_discount,
            vat_rate: vat,
            vat_amount,
            gross_total,
        }
    }

    /// 目录 + 选择 → 汇总
    pub fn compute_selection(
        &self,
        catalog: &Catalog,
        selection: &Selection,
        discount: DiscountPct,
        vat: VatRate,
    ) -> PackageSummary {
        let lines = self.price_selection(catalog, selection);
        self.compute(&lines, discount, vat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogEntry;

    const EPS: f64 = 1e-9;

    fn catalog() -> Catalog {
        Catalog::from_entries(
            vec![CatalogEntry::new("Tisch", 10.0), CatalogEntry::new("Stuhl", 5.0)],
            None,
            None,
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_vat_without_discount() {
        let selection = Selection::new().with("Tisch", 2).with("Stuhl", 3);
        let summary = PackageCalculator.compute_selection(
            &catalog(),
            &selection,
            DiscountPct::zero(),
            VatRate::Standard,
        );

        assert!(approx(summary.net_subtotal, 35.0));
        assert!(approx(summary.discount_amount, 0.0));
        assert!(approx(summary.vat_amount, 6.65));
        assert!(approx(summary.gross_total, 41.65));
    }

    #[test]
    fn test_discount_without_vat() {
        let selection = Selection::new().with("Tisch", 2).with("Stuhl", 3);
        let summary = PackageCalculator.compute_selection(
            &catalog(),
            &selection,
            DiscountPct::new(10.0).unwrap(),
            VatRate::Zero,
        );

        assert!(approx(summary.discount_amount, 3.5));
        assert!(approx(summary.net_after_discount, 31.5));
        assert_eq!(summary.vat_amount, 0.0);
        assert!(approx(summary.gross_total, 31.5));
        assert!(!summary.vat_applied());
    }

    #[test]
    fn test_zero_quantity_lines_are_excluded() {
        let selection = Selection::new().with("Tisch", 2).with("Stuhl", 0);
        let summary = PackageCalculator.compute_selection(
            &catalog(),
            &selection,
            DiscountPct::zero(),
            VatRate::Reduced,
        );

        assert_eq!(summary.line_items.len(), 1);
        assert_eq!(summary.line_items[0].article, "Tisch");
        assert!(approx(summary.net_subtotal, 20.0));
        assert!(approx(summary.vat_amount, 1.4));
    }

    #[test]
    fn test_all_zero_quantities_give_empty_summary() {
        let selection = Selection::new().with("Tisch", 0);
        let summary = PackageCalculator.compute_selection(
            &catalog(),
            &selection,
            DiscountPct::new(50.0).unwrap(),
            VatRate::Standard,
        );

        assert!(summary.is_empty());
        assert_eq!(summary.gross_total, 0.0);
    }

    #[test]
    fn test_full_discount() {
        let lines = vec![LineItem::new("Tisch", 1, 10.0)];
        let summary =
            PackageCalculator.compute(&lines, DiscountPct::new(100.0).unwrap(), VatRate::Standard);

        assert_eq!(summary.net_after_discount, 0.0);
        assert_eq!(summary.gross_total, 0.0);
    }

    #[test]
    fn test_price_selection_keeps_selection_order() {
        let selection = Selection::new().with("Stuhl", 1).with("Tisch", 1);
        let lines = PackageCalculator.price_selection(&catalog(), &selection);

        assert_eq!(lines[0].article, "Stuhl");
        assert_eq!(lines[0].unit_price, 5.0);
        assert_eq!(lines[1].article, "Tisch");
    }

    #[test]
    fn test_compute_is_idempotent() {
        let lines = vec![LineItem::new("Tisch", 3, 0.1), LineItem::new("Stuhl", 7, 0.7)];
        let a = PackageCalculator.compute(&lines, DiscountPct::new(2.5).unwrap(), VatRate::Standard);
        let b = PackageCalculator.compute(&lines, DiscountPct::new(2.5).unwrap(), VatRate::Standard);
        assert_eq!(a, b);
    }

    #[test]
    fn test_totals_invariants() {
        let lines = vec![
            LineItem::new("A", 4, 19.99),
            LineItem::new("B", 0, 5.0),
            LineItem::new("C", 12, 0.35),
        ];

        for vat in VatRate::ALL {
            for pct in [0.0, 0.5, 33.0, 99.5, 100.0] {
                let s = PackageCalculator.compute(&lines, DiscountPct::new(pct).unwrap(), vat);
                let expected: f64 = s.line_items.iter().map(|l| f64::from(l.quantity) * l.unit_price).sum();

                assert!(approx(s.net_subtotal, expected));
                assert!(s.net_after_discount >= 0.0);
                assert!(s.gross_total >= s.net_after_discount);
                assert!(s.line_items.iter().all(|l| l.quantity > 0));
            }
        }
    }
}
