//! Hiển thị thời điểm tạo sản phẩm.
//!
//! Server trả `created_at` dạng RFC 3339, nhưng tuỳ driver cơ sở dữ liệu
//! có thể rơi về dạng `YYYY-MM-DD HH:MM:SS` hoặc chuỗi rỗng — parse
//! khoan dung và trả `None` khi không đọc được.

use chrono::{DateTime, NaiveDateTime};

/// Đổi `created_at` từ server thành `dd/mm/yyyy` cho bảng quản trị.
pub fn format_created_at(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.format("%d/%m/%Y").to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.format("%d/%m/%Y").to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rfc3339() {
        assert_eq!(
            format_created_at("2024-03-05T10:20:30+07:00"),
            Some("05/03/2024".to_string())
        );
    }

    #[test]
    fn parse_dang_mysql() {
        assert_eq!(
            format_created_at("2024-03-05 10:20:30"),
            Some("05/03/2024".to_string())
        );
    }

    #[test]
    fn chuoi_rong_hoac_rac_thi_none() {
        assert_eq!(format_created_at(""), None);
        assert_eq!(format_created_at("hôm qua"), None);
    }
}
