/// 导入文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetKind {
    Csv,
    Xlsx,
}

/// 根据扩展名与魔术字节判断导入文件格式
///
/// # Arguments
/// * `data` - 文件内容
/// * `file_name` - 上传时的文件名
///
/// # Returns
/// * `Some(kind)` - 扩展名受支持且内容与扩展名匹配
/// * `None` - 不支持的扩展名，或内容与扩展名不符
pub fn detect_spreadsheet(data: &[u8], file_name: &str) -> Option<SpreadsheetKind> {
    if data.is_empty() {
        return None;
    }

    let lower = file_name.to_lowercase();
    if lower.ends_with(".xlsx") {
        // OOXML 为 ZIP 容器
        data.starts_with(&[0x50, 0x4B, 0x03, 0x04])
            .then_some(SpreadsheetKind::Xlsx)
    } else if lower.ends_with(".csv") || lower.ends_with(".txt") {
        // 文本格式：拒绝明显的二进制内容
        let looks_binary = data.iter().take(512).any(|b| *b == 0);
        (!looks_binary).then_some(SpreadsheetKind::Csv)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xlsx_magic() {
        let zip_header = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00];
        assert_eq!(
            detect_spreadsheet(&zip_header, "attendance.xlsx"),
            Some(SpreadsheetKind::Xlsx)
        );
        assert_eq!(
            detect_spreadsheet(&zip_header, "ATTENDANCE.XLSX"),
            Some(SpreadsheetKind::Xlsx)
        );
        assert_eq!(detect_spreadsheet(b"staffNumber,date", "attendance.xlsx"), None);
    }

    #[test]
    fn test_csv_text() {
        let csv = b"staffNumber,date,status\nT-001,2025-03-03,P\n";
        assert_eq!(
            detect_spreadsheet(csv, "attendance.csv"),
            Some(SpreadsheetKind::Csv)
        );
        assert_eq!(detect_spreadsheet(&[0x00, 0x01, 0x02], "attendance.csv"), None);
    }

    #[test]
    fn test_empty_data() {
        assert_eq!(detect_spreadsheet(&[], "attendance.csv"), None);
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(detect_spreadsheet(b"hello", "attendance.xls"), None);
        assert_eq!(detect_spreadsheet(b"hello", "attendance"), None);
    }
}
