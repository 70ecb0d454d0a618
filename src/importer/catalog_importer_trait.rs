// ==========================================
// 包配置器 - 目录导入 Trait
// ==========================================
// 职责: 定义文件解析接口与原始表格结构（不包含实现）
// ==========================================

use crate::importer::error::ImportResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// RawCell - 原始单元格
// ==========================================
// 数值单元格保持数值，避免先转字符串再解析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawCell {
    Empty,
    Number(f64),
    Text(String),
}

impl RawCell {
    pub fn is_blank(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Number(_) => false,
            RawCell::Text(s) => s.trim().is_empty(),
        }
    }

    /// 作为名称使用时的文本形式（已 TRIM）
    pub fn as_label(&self) -> String {
        match self {
            RawCell::Empty => String::new(),
            RawCell::Number(n) => n.to_string(),
            RawCell::Text(s) => s.trim().to_string(),
        }
    }
}

// ==========================================
// RawTable - 原始表格（第一行为表头）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,     // 表头（已 TRIM）
    pub rows: Vec<Vec<RawCell>>,  // 数据行（已补齐到表头列数）
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口
// 实现者: ExcelParser, CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表格
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(RawTable): 表头 + 数据行（已跳过全空白行）
    /// - Err: 文件读取错误、格式错误
    fn parse_to_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}
