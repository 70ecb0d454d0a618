// ==========================================
// 包配置器 - 数值容错解析
// ==========================================
// 红线: 价格单元格解析失败一律返回默认值（0），不报错
//       脏数据不得阻断整个目录的加载
// ==========================================

use crate::importer::catalog_importer_trait::RawCell;

/// 价格解析失败时的默认值
pub const DEFAULT_PRICE: f64 = 0.0;

/// 将单元格解析为数值，失败时返回 `default`
///
/// 规则:
/// - 数值单元格原样返回
/// - 文本单元格 TRIM 后按纯十进制数解析（小数点为 `.`）
/// - 空单元格、无法解析的文本、NaN/∞、负数 → `default`
///
/// 带货币符号或逗号小数的文本（如 "12,50 €"）不做本地化解析，同样返回 `default`。
pub fn parse_number_or_default(cell: &RawCell, default: f64) -> f64 {
    let parsed = match cell {
        RawCell::Empty => None,
        RawCell::Number(n) => Some(*n),
        RawCell::Text(s) => s.trim().parse::<f64>().ok(),
    };

    match parsed {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            tracing::debug!(value = v, "数值超出允许范围，按默认值处理");
            default
        }
        None => default,
    }
}

/// 价格专用：默认值固定为 0
pub fn parse_price(cell: &RawCell) -> f64 {
    parse_number_or_default(cell, DEFAULT_PRICE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawCell {
        RawCell::Text(s.to_string())
    }

    #[test]
    fn test_numeric_cells_pass_through() {
        assert_eq!(parse_price(&RawCell::Number(12.5)), 12.5);
        assert_eq!(parse_price(&text(" 7.25 ")), 7.25);
        assert_eq!(parse_price(&text("10")), 10.0);
    }

    #[test]
    fn test_non_numeric_text_coerces_to_zero() {
        assert_eq!(parse_price(&text("n/a")), 0.0);
        assert_eq!(parse_price(&text("auf Anfrage")), 0.0);
        assert_eq!(parse_price(&RawCell::Empty), 0.0);
    }

    #[test]
    fn test_currency_text_is_not_locale_parsed() {
        assert_eq!(parse_price(&text("12,50 €")), 0.0);
        assert_eq!(parse_price(&text("12.50 €")), 0.0);
        assert_eq!(parse_price(&text("12,50")), 0.0);
    }

    #[test]
    fn test_out_of_domain_values_use_default() {
        assert_eq!(parse_price(&RawCell::Number(-3.0)), 0.0);
        assert_eq!(parse_price(&text("NaN")), 0.0);
        assert_eq!(parse_price(&text("inf")), 0.0);
    }

    #[test]
    fn test_custom_default() {
        assert_eq!(parse_number_or_default(&text("x"), 1.5), 1.5);
        assert_eq!(parse_number_or_default(&text("2"), 1.5), 2.0);
    }
}
