// ==========================================
// 包配置器 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 规则: 第一个工作表，第一行为表头
// ==========================================

use crate::importer::catalog_importer_trait::{FileParser, RawCell, RawTable};
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use csv::ReaderBuilder;
use std::io::Cursor;
use std::path::Path;

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 按表头行判断分隔符（德语 Excel 导出的 CSV 常用分号）
    fn detect_delimiter(first_line: &str) -> u8 {
        let semicolons = first_line.matches(';').count();
        let commas = first_line.matches(',').count();
        if semicolons > commas {
            b';'
        } else {
            b','
        }
    }
}

impl FileParser for CsvParser {
    fn parse_to_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let content = std::fs::read_to_string(path)?;
        let first_line = content.lines().next().unwrap_or("");
        let delimiter = Self::detect_delimiter(first_line);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .flexible(true) // 允许行长度不一致
            .from_reader(content.as_bytes());

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::NoHeaderRow);
        }

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row: Vec<RawCell> = record
                .iter()
                .take(headers.len())
                .map(|value| {
                    if value.trim().is_empty() {
                        RawCell::Empty
                    } else {
                        RawCell::Text(value.to_string())
                    }
                })
                .collect();
            row.resize(headers.len(), RawCell::Empty);

            // 跳过完全空白的行
            if row.iter().all(RawCell::is_blank) {
                continue;
            }

            rows.push(row);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    fn convert_cell(cell: &Data) -> RawCell {
        match cell {
            Data::Empty => RawCell::Empty,
            Data::Float(f) => RawCell::Number(*f),
            Data::Int(i) => RawCell::Number(*i as f64),
            Data::String(s) => RawCell::Text(s.clone()),
            other => RawCell::Text(other.to_string()),
        }
    }
}

impl FileParser for ExcelParser {
    fn parse_to_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 按内容识别 xlsx/xls（上传文件落盘名固定，扩展名不可靠）
        let bytes = std::fs::read(path)?;
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names.first().cloned().ok_or(ImportError::NoWorksheet)?;
        let range = workbook.worksheet_range(&sheet_name)?;

        // 提取表头（第一行）
        let mut raw_rows = range.rows();
        let header_row = raw_rows.next().ok_or(ImportError::NoHeaderRow)?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 读取数据行
        let mut rows = Vec::new();
        for data_row in raw_rows {
            let mut row: Vec<RawCell> = data_row
                .iter()
                .take(headers.len())
                .map(Self::convert_cell)
                .collect();
            row.resize(headers.len(), RawCell::Empty);

            // 跳过完全空白的行
            if row.iter().all(RawCell::is_blank) {
                continue;
            }

            rows.push(row);
        }

        tracing::debug!(
            sheet = %sheet_name,
            columns = headers.len(),
            rows = rows.len(),
            "Excel 工作表解析完成"
        );

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_to_table(path),
            "xlsx" | "xls" => ExcelParser.parse_to_table(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
