// ==========================================
// 包配置器 - 商品目录领域模型
// ==========================================
// 职责: 商品目录快照（加载后只读）
// 红线: 目录加载后不可原地修改，替换必须重启
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

// ==========================================
// CatalogEntry - 目录条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,    // 商品名称（目录内唯一，查找键）
    pub unit_price: f64, // 单价（>= 0）
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }
}

// ==========================================
// ColumnLayout - 列识别结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub name_column: String,          // 名称列（始终为第一列）
    pub price_column: Option<String>, // 价格列（关键字匹配或最后一列）
}

// ==========================================
// Catalog - 目录快照
// ==========================================
// 查找索引不序列化，反序列化时经 from_entries 重建
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "CatalogSnapshot")]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    layout: Option<ColumnLayout>,
    source: Option<PathBuf>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

/// 目录的序列化形态（不含索引）
#[derive(Deserialize)]
struct CatalogSnapshot {
    entries: Vec<CatalogEntry>,
    #[serde(default)]
    layout: Option<ColumnLayout>,
    #[serde(default)]
    source: Option<PathBuf>,
}

impl From<CatalogSnapshot> for Catalog {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Catalog::from_entries(snapshot.entries, snapshot.layout, snapshot.source)
    }
}

impl Catalog {
    /// 空目录（加载失败时的替代品）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 由条目构建目录
    ///
    /// 重名商品以第一次出现为准，后续重复条目被丢弃。
    pub fn from_entries(
        entries: Vec<CatalogEntry>,
        layout: Option<ColumnLayout>,
        source: Option<PathBuf>,
    ) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for entry in entries {
            if index.contains_key(&entry.name) {
                tracing::warn!(article = %entry.name, "目录中存在重名商品，保留第一条");
                continue;
            }
            index.insert(entry.name.clone(), kept.len());
            kept.push(entry);
        }

        Self {
            entries: kept,
            layout,
            source,
            index,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn layout(&self) -> Option<&ColumnLayout> {
        self.layout.as_ref()
    }

    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按名称精确查找
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// 名称列表（保持表格顺序）
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}
