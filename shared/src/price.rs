//! Định dạng giá theo kiểu vi-VN.
//!
//! Giá không hợp lệ (NaN), bằng 0 hoặc âm nghĩa là "liên hệ để báo giá".
//! Giá hợp lệ hiển thị theo đồng Việt Nam: nhóm nghìn bằng dấu chấm,
//! hậu tố " ₫" — khớp với `Intl.NumberFormat('vi-VN')` mà trang gốc dùng.

/// Chuỗi hiển thị khi chưa có giá công khai.
pub const CONTACT_PRICE: &str = "Liên hệ";

/// Định dạng giá VND để hiển thị.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return CONTACT_PRICE.to_string();
    }
    let amount = value.round() as i64;
    format!("{} ₫", group_thousands(amount))
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gia_khong_hop_le_thi_hien_lien_he() {
        assert_eq!(format_price(0.0), "Liên hệ");
        assert_eq!(format_price(-5.0), "Liên hệ");
        assert_eq!(format_price(f64::NAN), "Liên hệ");
        assert_eq!(format_price(f64::INFINITY), "Liên hệ");
    }

    #[test]
    fn gia_hop_le_nhom_nghin_bang_dau_cham() {
        assert_eq!(format_price(150_000.0), "150.000 ₫");
        assert_eq!(format_price(999.0), "999 ₫");
        assert_eq!(format_price(1_500.0), "1.500 ₫");
        assert_eq!(format_price(1_234_567.0), "1.234.567 ₫");
    }

    #[test]
    fn gia_le_duoc_lam_tron() {
        assert_eq!(format_price(99_999.6), "100.000 ₫");
    }
}
