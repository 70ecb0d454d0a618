// ==========================================
// 包配置器 - 导出包（表格 + 报价文本）
// ==========================================
// 文件名: Paket_%Y%m%d_%H%M%S.<ext>，文本与表格同名
// ==========================================

use crate::domain::package::PackageSummary;
use crate::export::csv_exporter::CsvExporter;
use crate::export::error::{ExportError, ExportResult};
use crate::export::offer_text::OfferTextFormatter;
use crate::export::rows::build_rows;
use crate::export::xlsx_exporter::XlsxExporter;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

// ==========================================
// ExportFormat - 表格导出格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

/// 导出文件名（时间戳精确到秒）
pub fn export_file_name(timestamp: NaiveDateTime, extension: &str) -> String {
    format!("Paket_{}.{}", timestamp.format("%Y%m%d_%H%M%S"), extension)
}

// ==========================================
// ExportBundle - 导出结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ExportBundle {
    pub format: ExportFormat,
    pub spreadsheet_name: String,
    pub spreadsheet: Vec<u8>,
    pub text_name: String,
    pub text: String,
}

impl ExportBundle {
    /// 生成表格与报价文本
    #[instrument(skip(summary), fields(lines = summary.line_items.len()))]
    pub fn build(
        summary: &PackageSummary,
        generated_at: NaiveDateTime,
        format: ExportFormat,
    ) -> ExportResult<Self> {
        let rows = build_rows(summary);
        if rows.is_empty() {
            return Err(ExportError::EmptyPackage);
        }

        let spreadsheet = match format {
            ExportFormat::Xlsx => XlsxExporter.render(&rows)?,
            ExportFormat::Csv => CsvExporter.render(&rows)?,
        };
        let text = OfferTextFormatter.render(summary, generated_at.date());

        Ok(Self {
            format,
            spreadsheet_name: export_file_name(generated_at, format.extension()),
            spreadsheet,
            text_name: export_file_name(generated_at, "txt"),
            text,
        })
    }

    /// 写入目录，返回 (表格路径, 文本路径)
    pub fn write_to(&self, dir: &Path) -> ExportResult<(PathBuf, PathBuf)> {
        std::fs::create_dir_all(dir)?;

        let spreadsheet_path = dir.join(&self.spreadsheet_name);
        std::fs::write(&spreadsheet_path, &self.spreadsheet)?;

        let text_path = dir.join(&self.text_name);
        std::fs::write(&text_path, self.text.as_bytes())?;

        tracing::info!(
            spreadsheet = %spreadsheet_path.display(),
            text = %text_path.display(),
            "导出文件已写入"
        );
        Ok((spreadsheet_path, text_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_export_file_name() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(export_file_name(ts, "xlsx"), "Paket_20240102_030405.xlsx");
        assert_eq!(export_file_name(ts, "txt"), "Paket_20240102_030405.txt");
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ExportFormat::default().extension(), "xlsx");
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }
}
