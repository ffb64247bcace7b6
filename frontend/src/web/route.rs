//! Định nghĩa route — tầng thuần, không đụng DOM hay web_sys.

use std::fmt::Display;

/// Các trang của ứng dụng.
///
/// Không có guard xác thực: trang admin vẫn mở được khi thiếu token,
/// banner cảnh báo trên trang sẽ lo phần còn lại.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Trang linkshop công khai (mặc định).
    #[default]
    Home,
    /// Bảng quản trị.
    Admin,
    /// Không khớp đường dẫn nào.
    NotFound,
}

impl AppRoute {
    /// Phân giải URL path thành route.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/admin" => Self::Admin,
            _ => Self::NotFound,
        }
    }

    /// Path tương ứng của route.
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Admin => "/admin",
            Self::NotFound => "/404",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phan_giai_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::Admin);
        assert_eq!(AppRoute::from_path("/admin/"), AppRoute::Admin);
        assert_eq!(AppRoute::from_path("/gi-do-la"), AppRoute::NotFound);
    }

    #[test]
    fn path_va_route_khu_hoi() {
        for route in [AppRoute::Home, AppRoute::Admin] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }
}
