// ==========================================
// 包配置器 - Excel 导出
// ==========================================
// 结构: 单工作表 "Paket"，第一行表头，每个行项目一行
// ==========================================

use crate::export::error::ExportResult;
use crate::export::rows::{ExportRow, EXPORT_HEADERS};
use rust_xlsxwriter::{Format, Workbook};

/// 导出工作表名称
pub const SHEET_NAME: &str = "Paket";

pub struct XlsxExporter;

impl XlsxExporter {
    /// 生成 .xlsx 文件内容
    pub fn render(&self, rows: &[ExportRow]) -> ExportResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in EXPORT_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (idx, row) in rows.iter().enumerate() {
            let r = (idx + 1) as u32;
            worksheet.write_string(r, 0, row.article.as_str())?;
            worksheet.write_number(r, 1, row.quantity)?;
            worksheet.write_number(r, 2, row.unit_price)?;
            worksheet.write_number(r, 3, row.net_amount)?;
            worksheet.write_number(r, 4, row.discount_pct)?;
            worksheet.write_number(r, 5, row.vat_pct)?;
            worksheet.write_number(r, 6, row.net_subtotal)?;
            worksheet.write_number(r, 7, row.net_after_discount)?;
            worksheet.write_number(r, 8, row.vat_amount)?;
            worksheet.write_number(r, 9, row.gross_total)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}
