// ==========================================
// 包配置器 - CSV 导出
// ==========================================
// 列与 Excel 导出一致
// ==========================================

use crate::export::error::{ExportError, ExportResult};
use crate::export::rows::ExportRow;
use csv::WriterBuilder;

pub struct CsvExporter;

impl CsvExporter {
    /// 生成 CSV 文件内容（UTF-8，逗号分隔，含表头）
    pub fn render(&self, rows: &[ExportRow]) -> ExportResult<Vec<u8>> {
        let mut writer = WriterBuilder::new().has_headers(true).from_writer(Vec::new());

        for row in rows {
            writer.serialize(row)?;
        }

        writer
            .into_inner()
            .map_err(|e| ExportError::CsvWriteError(e.to_string()))
    }
}
