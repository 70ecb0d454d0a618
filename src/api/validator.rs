// ==========================================
// 包配置器 - 输入边界校验
// ==========================================
// 职责: 超出值域的输入在边界拒绝，引擎内部不再校验
//   - 数量: 非负整数
//   - 折扣: [0, 100]
//   - 增值税: {0, 7, 19}
//   - 选择: 商品必须在目录中，且不可重复
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::catalog::Catalog;
use crate::domain::package::Selection;
use crate::domain::types::{DiscountPct, VatRate};
use std::collections::HashSet;

/// 未指定数量时的默认值
pub const DEFAULT_QUANTITY: u32 = 1;

/// 解析数量（非负整数）
pub fn parse_quantity(raw: &str) -> ApiResult<u32> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ApiError::InvalidInput(format!("Menge muss eine ganze Zahl sein: {}", raw)))?;

    if value < 0 {
        return Err(ApiError::InvalidInput(format!(
            "Menge darf nicht negativ sein: {}",
            value
        )));
    }

    u32::try_from(value)
        .map_err(|_| ApiError::InvalidInput(format!("Menge zu groß: {}", value)))
}

/// 解析 "Artikel=Menge"（省略数量时为 1）
///
/// 以最后一个 '=' 分隔，商品名称本身可以包含 '='。
pub fn parse_selection_arg(raw: &str) -> ApiResult<(String, u32)> {
    let (name, quantity) = match raw.rsplit_once('=') {
        Some((name, qty)) => (name.trim(), parse_quantity(qty)?),
        None => (raw.trim(), DEFAULT_QUANTITY),
    };

    if name.is_empty() {
        return Err(ApiError::InvalidInput(format!(
            "Artikelname fehlt: {}",
            raw
        )));
    }

    Ok((name.to_string(), quantity))
}

/// 校验折扣百分比
pub fn validate_discount(value: f64) -> ApiResult<DiscountPct> {
    DiscountPct::new(value).map_err(ApiError::InvalidInput)
}

/// 校验增值税率
pub fn validate_vat(percent: u8) -> ApiResult<VatRate> {
    VatRate::try_from(percent).map_err(ApiError::InvalidInput)
}

/// 校验选择：商品存在于目录，且不重复
pub fn validate_selection(
    catalog: &Catalog,
    items: impl IntoIterator<Item = (String, u32)>,
) -> ApiResult<Selection> {
    let mut seen = HashSet::new();
    let mut selection = Selection::new();

    for (article, quantity) in items {
        if catalog.get(&article).is_none() {
            return Err(ApiError::NotFound(article));
        }
        if !seen.insert(article.clone()) {
            return Err(ApiError::DuplicateArticle(article));
        }
        selection.push(article, quantity);
    }

    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogEntry;

    fn catalog() -> Catalog {
        Catalog::from_entries(
            vec![CatalogEntry::new("Tisch", 10.0), CatalogEntry::new("Stuhl", 5.0)],
            None,
            None,
        )
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert!(matches!(parse_quantity("-1"), Err(ApiError::InvalidInput(_))));
        assert!(matches!(parse_quantity("1.5"), Err(ApiError::InvalidInput(_))));
        assert!(matches!(parse_quantity("viele"), Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_selection_arg() {
        assert_eq!(parse_selection_arg("Tisch=2").unwrap(), ("Tisch".to_string(), 2));
        assert_eq!(parse_selection_arg("Tisch").unwrap(), ("Tisch".to_string(), 1));
        assert_eq!(
            parse_selection_arg("Kabel 3=5m=4").unwrap(),
            ("Kabel 3=5m".to_string(), 4)
        );
        assert!(parse_selection_arg("=2").is_err());
        assert!(parse_selection_arg("Tisch=-2").is_err());
    }

    #[test]
    fn test_validate_discount_and_vat() {
        assert_eq!(validate_discount(10.0).unwrap().value(), 10.0);
        assert!(validate_discount(101.0).is_err());
        assert_eq!(validate_vat(7).unwrap(), VatRate::Reduced);
        assert!(matches!(validate_vat(16), Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_selection() {
        let c = catalog();

        let ok = validate_selection(&c, vec![("Tisch".to_string(), 2), ("Stuhl".to_string(), 0)]);
        assert_eq!(ok.unwrap().len(), 2);

        let unknown = validate_selection(&c, vec![("Zelt".to_string(), 1)]);
        assert!(matches!(unknown, Err(ApiError::NotFound(_))));

        let dup = validate_selection(&c, vec![("Tisch".to_string(), 1), ("Tisch".to_string(), 2)]);
        assert!(matches!(dup, Err(ApiError::DuplicateArticle(_))));
    }
}
