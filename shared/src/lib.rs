//! Các kiểu dữ liệu và logic thuần dùng chung cho trang linkshop.
//!
//! Crate này không phụ thuộc DOM hay signal, chỉ gồm:
//! - Model trao đổi với API (`Product`, `Category`, `Profile`, `Social`)
//! - Logic lọc catalog ([`filter`])
//! - Định dạng giá ([`price`]) và render bio ([`text`])
//! - Hiển thị ngày tạo ([`date`])
//!
//! Toàn bộ đều test được trên host, không cần trình duyệt.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod date;
pub mod filter;
pub mod price;
pub mod text;

pub use filter::{CatalogFilter, TagBucket, visible};
pub use price::format_price;
pub use text::render_bio;

// =========================================================
// Hằng số (Constants)
// =========================================================

/// Header mang token quản trị trên mọi request đã xác thực.
pub const HEADER_ADMIN_TOKEN: &str = "X-Admin-Token";

/// Tham số query chứa token ở lần truy cập đầu tiên (`?token=...`).
pub const TOKEN_QUERY_PARAM: &str = "token";

/// Khoá lưu token trong sessionStorage.
pub const TOKEN_STORAGE_KEY: &str = "admin_token";

// =========================================================
// Model (Domain Models)
// =========================================================

/// Nhãn phân loại sản phẩm, quyết định nút mua hàng hiển thị thế nào.
///
/// Server có thể trả về chuỗi rỗng hoặc giá trị lạ — khi đó mặc định
/// là `MyChoice`, đúng quy tắc "tag chưa đặt thì coi là đồ mình chọn".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductTag {
    #[default]
    MyChoice,
    Shopee,
}

impl ProductTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductTag::MyChoice => "mychoice",
            ProductTag::Shopee => "shopee",
        }
    }
}

impl Serialize for ProductTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProductTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "shopee" => ProductTag::Shopee,
            _ => ProductTag::MyChoice,
        })
    }
}

/// Sản phẩm trong catalog.
///
/// `category_id` = 0 nghĩa là "Không phân loại"; `category` là tên danh mục
/// đã được server denormalize sẵn để hiển thị.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub external_url: String,
    #[serde(default)]
    pub tag: ProductTag,
    #[serde(default)]
    pub category_id: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: String,
}

impl Product {
    /// Sản phẩm Shopee chỉ hiện nút mua ngoài khi thực sự có link.
    pub fn shopee_link(&self) -> Option<&str> {
        if self.tag == ProductTag::Shopee && !self.external_url.trim().is_empty() {
            Some(self.external_url.as_str())
        } else {
            None
        }
    }
}

/// Danh mục sản phẩm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Link mạng xã hội trên trang profile (có thứ tự hiển thị).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub id: i64,
    pub name: String,
    pub url: String,
    /// Tên file icon dưới static/img, có thể rỗng.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub ord: i32,
}

/// Thông tin shop hiển thị trên trang chính — tồn tại đúng một bản ghi.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub highlight: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub socials: Vec<Social>,
}

// =========================================================
// Payload cho các request mutation
// =========================================================

/// Payload tạo mới / đổi tên danh mục.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
}

/// Payload xoá theo id (các endpoint POST /api/admin/delete-*).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTarget {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_mac_dinh_la_mychoice() {
        // tag rỗng hoặc thiếu hẳn đều quy về MyChoice
        let p: Product = serde_json::from_str(r#"{"id":1,"title":"Áo","tag":""}"#).unwrap();
        assert_eq!(p.tag, ProductTag::MyChoice);

        let p: Product = serde_json::from_str(r#"{"id":2,"title":"Nón"}"#).unwrap();
        assert_eq!(p.tag, ProductTag::MyChoice);

        let p: Product = serde_json::from_str(r#"{"id":3,"title":"Dép","tag":"shopee"}"#).unwrap();
        assert_eq!(p.tag, ProductTag::Shopee);
    }

    #[test]
    fn category_id_thieu_quy_ve_khong_phan_loai() {
        let p: Product = serde_json::from_str(r#"{"id":1,"title":"Áo"}"#).unwrap();
        assert_eq!(p.category_id, 0);
        assert_eq!(p.category, "");
    }

    #[test]
    fn shopee_link_can_ca_tag_lan_url() {
        let mut p: Product =
            serde_json::from_str(r#"{"id":1,"title":"Áo","tag":"shopee"}"#).unwrap();
        assert_eq!(p.shopee_link(), None);

        p.external_url = "https://shopee.vn/item/1".to_string();
        assert_eq!(p.shopee_link(), Some("https://shopee.vn/item/1"));

        p.tag = ProductTag::MyChoice;
        assert_eq!(p.shopee_link(), None);
    }

    #[test]
    fn tag_serialize_dung_chuoi_wire() {
        assert_eq!(serde_json::to_string(&ProductTag::Shopee).unwrap(), "\"shopee\"");
        assert_eq!(serde_json::to_string(&ProductTag::MyChoice).unwrap(), "\"mychoice\"");
    }
}
