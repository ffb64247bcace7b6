//! Render phần bio của shop thành HTML an toàn.
//!
//! Thứ tự xử lý là bất biến quan trọng nhất ở đây:
//! 1. Escape toàn bộ ký tự có nghĩa trong markup,
//! 2. rồi mới linkify URL `http(s)://` và mention `@handle`,
//! 3. cuối cùng đổi xuống dòng thành `<br>`.
//!
//! Escape trước để thẻ `<a>` chèn vào không bị escape theo.

/// Escape các ký tự có nghĩa trong HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Ký tự hợp lệ trong một handle: chữ, số, chấm, gạch dưới.
fn is_handle_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '.' || ch == '_'
}

fn starts_with_at(chars: &[char], pos: usize, needle: &str) -> bool {
    let mut rest = chars[pos..].iter();
    needle.chars().all(|expected| rest.next() == Some(&expected))
}

/// Biến URL và mention trong văn bản ĐÃ escape thành thẻ anchor.
fn linkify(escaped: &str) -> String {
    let chars: Vec<char> = escaped.chars().collect();
    let mut out = String::with_capacity(escaped.len());
    let mut i = 0;
    while i < chars.len() {
        if starts_with_at(&chars, i, "http://") || starts_with_at(&chars, i, "https://") {
            let start = i;
            while i < chars.len() && !chars[i].is_whitespace() {
                i += 1;
            }
            let url: String = chars[start..i].iter().collect();
            out.push_str("<a href=\"");
            out.push_str(&url);
            out.push_str("\" target=\"_blank\" rel=\"noreferrer\">");
            out.push_str(&url);
            out.push_str("</a>");
            continue;
        }

        if chars[i] == '@' {
            // '@' phải đứng đầu hoặc sau ký tự không thuộc handle,
            // tránh nuốt phần sau của địa chỉ email
            let boundary_ok = i == 0 || !is_handle_char(chars[i - 1]);
            let mut end = i + 1;
            while end < chars.len() && is_handle_char(chars[end]) {
                end += 1;
            }
            if boundary_ok && end > i + 1 {
                let handle: String = chars[i + 1..end].iter().collect();
                out.push_str("<a href=\"https://www.instagram.com/");
                out.push_str(&handle);
                out.push_str("\" target=\"_blank\" rel=\"noreferrer\">@");
                out.push_str(&handle);
                out.push_str("</a>");
                i = end;
                continue;
            }
        }

        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Render bio thành HTML: escape → linkify → xuống dòng.
pub fn render_bio(bio: &str) -> String {
    linkify(&escape_html(bio)).replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_va_mention_thanh_hai_anchor_rieng() {
        let html = render_bio("visit @shop_x now https://example.com");
        assert!(html.contains(
            "<a href=\"https://www.instagram.com/shop_x\" target=\"_blank\" rel=\"noreferrer\">@shop_x</a>"
        ));
        assert!(html.contains(
            "<a href=\"https://example.com\" target=\"_blank\" rel=\"noreferrer\">https://example.com</a>"
        ));
    }

    #[test]
    fn markup_trong_bio_luon_bi_escape() {
        let html = render_bio("a < b & <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp;"));
    }

    #[test]
    fn url_chua_ampersand_duoc_escape_dung_chuan_attribute() {
        let html = render_bio("https://example.com/?a=1&b=2");
        assert!(html.contains("href=\"https://example.com/?a=1&amp;b=2\""));
    }

    #[test]
    fn xuong_dong_thanh_br() {
        assert_eq!(render_bio("dòng một\ndòng hai"), "dòng một<br>dòng hai");
    }

    #[test]
    fn handle_chi_nhan_chu_so_cham_gach_duoi() {
        let html = render_bio("hỏi @shop.vn_01 nhé!");
        assert!(html.contains("https://www.instagram.com/shop.vn_01"));
        // dấu '!' không thuộc handle
        assert!(html.contains("</a> nhé!"));
    }

    #[test]
    fn khong_linkify_phan_domain_cua_email() {
        let html = render_bio("mail: shop@gmail.com");
        assert!(!html.contains("<a"));
    }

    #[test]
    fn at_don_le_giu_nguyen() {
        assert_eq!(render_bio("giá @ shop"), "giá @ shop");
    }
}
