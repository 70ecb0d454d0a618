// ==========================================
// 包配置器 - 列识别器
// ==========================================
// 规则: 按优先级依次评估，返回第一个命中的列
//   1. 表头（不区分大小写）包含关键字 pro / stück / set / €
//   2. 至少两列时取最后一列
// 名称列固定为第一列
// ==========================================

use crate::domain::catalog::ColumnLayout;

/// 价格列关键字（小写）
pub const PRICE_KEYWORDS: [&str; 4] = ["pro", "stück", "set", "€"];

// ==========================================
// ColumnRule - 价格列识别规则
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRule {
    /// 从左到右找第一个表头包含任一关键字的列
    HeaderKeyword(Vec<String>),
    /// 列数不少于 min_columns 时取最后一列
    LastColumn { min_columns: usize },
}

impl ColumnRule {
    /// 评估规则，命中时返回列下标
    pub fn evaluate(&self, headers: &[String]) -> Option<usize> {
        match self {
            ColumnRule::HeaderKeyword(keywords) => headers.iter().position(|header| {
                let lower = header.to_lowercase();
                keywords.iter().any(|k| lower.contains(k.as_str()))
            }),
            ColumnRule::LastColumn { min_columns } => {
                if headers.len() >= *min_columns {
                    Some(headers.len() - 1)
                } else {
                    None
                }
            }
        }
    }
}

// ==========================================
// ColumnDetector - 列识别器
// ==========================================
#[derive(Debug, Clone)]
pub struct ColumnDetector {
    rules: Vec<ColumnRule>,
}

impl Default for ColumnDetector {
    fn default() -> Self {
        Self::with_keywords(PRICE_KEYWORDS.iter().map(|k| k.to_string()).collect())
    }
}

impl ColumnDetector {
    /// 使用自定义关键字（保留"最后一列"兜底规则）
    ///
    /// 空关键字会命中任意表头，构建时丢弃。
    pub fn with_keywords(keywords: Vec<String>) -> Self {
        let keywords = keywords
            .into_iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self {
            rules: vec![
                ColumnRule::HeaderKeyword(keywords),
                ColumnRule::LastColumn { min_columns: 2 },
            ],
        }
    }

    /// 价格列下标（无命中返回 None）
    pub fn detect_price_column(&self, headers: &[String]) -> Option<usize> {
        self.rules.iter().find_map(|rule| rule.evaluate(headers))
    }

    /// 识别名称列与价格列
    ///
    /// # 返回
    /// - Some((name_idx, price_idx, layout)): 至少有一列
    /// - None: 无任何列
    pub fn detect(&self, headers: &[String]) -> Option<(usize, Option<usize>, ColumnLayout)> {
        let name_column = headers.first()?.clone();
        let price_idx = self.detect_price_column(headers);

        let layout = ColumnLayout {
            name_column,
            price_column: price_idx.map(|i| headers[i].clone()),
        };

        Some((0, price_idx, layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keyword_match_case_insensitive() {
        let detector = ColumnDetector::default();
        let h = headers(&["Artikel", "Bemerkung", "Preis PRO Tag", "Kaution"]);
        assert_eq!(detector.detect_price_column(&h), Some(2));
    }

    #[test]
    fn test_first_keyword_match_wins() {
        let detector = ColumnDetector::default();
        let h = headers(&["Artikel", "Miete pro Set", "Preis €"]);
        assert_eq!(detector.detect_price_column(&h), Some(1));
    }

    #[test]
    fn test_umlaut_and_currency_keywords() {
        let detector = ColumnDetector::default();
        assert_eq!(
            detector.detect_price_column(&headers(&["Artikel", "Stück-Preis"])),
            Some(1)
        );
        assert_eq!(
            detector.detect_price_column(&headers(&["Artikel", "Betrag in €", "Info"])),
            Some(1)
        );
    }

    #[test]
    fn test_keyword_may_match_first_column() {
        // "Produkt" 含 "pro"，与原有关键字规则一致
        let detector = ColumnDetector::default();
        let h = headers(&["Produkt", "Preis"]);
        assert_eq!(detector.detect_price_column(&h), Some(0));
    }

    #[test]
    fn test_set_keyword_alone() {
        let detector = ColumnDetector::default();
        let h = headers(&["Artikel", "Set-Miete", "Info"]);
        assert_eq!(detector.detect_price_column(&h), Some(1));
    }

    #[test]
    fn test_blank_custom_keywords_are_ignored() {
        let detector = ColumnDetector::with_keywords(vec![String::new(), "  ".to_string()]);
        let h = headers(&["Artikel", "Preis"]);
        assert_eq!(detector.detect_price_column(&h), Some(1));

        let detector = ColumnDetector::with_keywords(vec!["".to_string(), " Tag ".to_string()]);
        let h = headers(&["Artikel", "Miete pro Tag", "Kaution"]);
        assert_eq!(detector.detect_price_column(&h), Some(1));
    }

    #[test]
    fn test_fallback_to_last_column() {
        let detector = ColumnDetector::default();
        let h = headers(&["Artikel", "Kategorie", "Miete"]);
        assert_eq!(detector.detect_price_column(&h), Some(2));
    }

    #[test]
    fn test_single_column_has_no_price() {
        let detector = ColumnDetector::default();
        let (name_idx, price_idx, layout) = detector.detect(&headers(&["Artikel"])).unwrap();
        assert_eq!(name_idx, 0);
        assert_eq!(price_idx, None);
        assert_eq!(layout.price_column, None);
    }

    #[test]
    fn test_no_columns() {
        assert!(ColumnDetector::default().detect(&[]).is_none());
    }
}
