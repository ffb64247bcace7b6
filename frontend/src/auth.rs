//! Module xác thực admin.
//!
//! Token quản trị đến từ URL (`?token=...`) ở lần truy cập đầu, sau đó
//! sống trong sessionStorage cho hết phiên trình duyệt. Không bao giờ
//! gọi server để lấy token, và thiếu token không phải lỗi — trang admin
//! chỉ hiện banner cảnh báo, mọi request rơi về chế độ không xác thực.

use gloo_storage::{SessionStorage, Storage};
use leptos::prelude::*;
use linkshop_shared::{TOKEN_QUERY_PARAM, TOKEN_STORAGE_KEY};

/// Quy tắc ưu tiên: token trên URL thắng giá trị đã lưu; thiếu cả hai
/// thì trả chuỗi rỗng (chưa xác thực).
pub fn token_precedence(from_url: Option<String>, stored: Option<String>) -> String {
    match from_url {
        Some(token) if !token.trim().is_empty() => token,
        _ => stored.unwrap_or_default(),
    }
}

/// Đọc `?token=` từ URL hiện tại.
fn token_from_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(TOKEN_QUERY_PARAM)
}

/// Xác định token cho phiên hiện tại.
///
/// Token trên URL được ghi đè vào sessionStorage ngay khi thấy, nên tải
/// lại trang không còn query vẫn giữ nguyên token cũ.
pub fn resolve_token() -> String {
    let from_url = token_from_url();
    if let Some(token) = from_url.as_ref().filter(|t| !t.trim().is_empty()) {
        let _ = SessionStorage::set(TOKEN_STORAGE_KEY, token);
    }
    let stored = SessionStorage::get::<String>(TOKEN_STORAGE_KEY).ok();
    token_precedence(from_url, stored)
}

/// Ngữ cảnh xác thực, chia sẻ qua Context cho mọi component.
#[derive(Clone, Copy)]
pub struct AuthContext {
    token: RwSignal<String>,
}

impl AuthContext {
    /// Tạo ngữ cảnh mới, resolve token ngay lúc khởi động.
    pub fn new() -> Self {
        Self { token: RwSignal::new(resolve_token()) }
    }

    /// Token hiện tại (chuỗi rỗng = chưa xác thực).
    pub fn token(&self) -> String {
        self.token.get_untracked()
    }

    /// Có token hay không — dùng cho banner cảnh báo trên trang admin.
    pub fn has_token(&self) -> bool {
        !self.token.get().trim().is_empty()
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Lấy ngữ cảnh xác thực từ Context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext chưa được cung cấp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_thang_gia_tri_da_luu() {
        assert_eq!(
            token_precedence(Some("abc".to_string()), Some("cũ".to_string())),
            "abc"
        );
    }

    #[test]
    fn khong_co_url_thi_dung_gia_tri_da_luu() {
        assert_eq!(token_precedence(None, Some("abc".to_string())), "abc");
        // token rỗng trên URL cũng coi như không có
        assert_eq!(
            token_precedence(Some("  ".to_string()), Some("abc".to_string())),
            "abc"
        );
    }

    #[test]
    fn thieu_ca_hai_thi_chuoi_rong() {
        assert_eq!(token_precedence(None, None), "");
    }
}
