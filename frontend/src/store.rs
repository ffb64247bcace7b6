//! Kho trạng thái catalog cho trang công khai.
//!
//! Gom danh sách sản phẩm đầy đủ và trạng thái lọc vào một store tường
//! minh thay vì biến toàn cục: ghi qua `replace_all`/`set_*`, đọc qua
//! `visible()`. Danh sách hiển thị luôn được dẫn xuất lại từ danh sách
//! gốc, không bao giờ bị sửa riêng.

use leptos::prelude::*;
use linkshop_shared::{CatalogFilter, Product, TagBucket, visible};

/// Store catalog — `Copy` nhờ gói toàn bộ trong `RwSignal`, truyền
/// thẳng qua props/closure không cần clone.
#[derive(Clone, Copy)]
pub struct CatalogStore {
    products: RwSignal<Vec<Product>>,
    text: RwSignal<String>,
    tag: RwSignal<TagBucket>,
    category_id: RwSignal<i64>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            text: RwSignal::new(String::new()),
            tag: RwSignal::new(TagBucket::default()),
            category_id: RwSignal::new(0),
        }
    }

    // ---- mặt ghi ----

    /// Thay toàn bộ danh sách sau mỗi lần fetch thành công.
    pub fn replace_all(&self, items: Vec<Product>) {
        self.products.set(items);
    }

    /// Xoá sạch danh sách (đường đọc công khai thất bại).
    pub fn clear(&self) {
        self.products.set(Vec::new());
    }

    pub fn set_text(&self, text: String) {
        self.text.set(text);
    }

    pub fn set_tag(&self, tag: TagBucket) {
        self.tag.set(tag);
    }

    pub fn set_category(&self, id: i64) {
        self.category_id.set(id);
    }

    // ---- mặt đọc ----

    pub fn tag(&self) -> TagBucket {
        self.tag.get()
    }

    pub fn category_id(&self) -> i64 {
        self.category_id.get()
    }

    fn filter(&self) -> CatalogFilter {
        CatalogFilter {
            text: self.text.get(),
            tag: self.tag.get(),
            category_id: self.category_id.get(),
        }
    }

    /// Danh sách đang hiển thị — dẫn xuất thuần từ danh sách gốc
    /// và bộ lọc hiện tại.
    pub fn visible(&self) -> Vec<Product> {
        self.products.with(|items| visible(items, &self.filter()))
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Lấy store catalog từ Context.
pub fn use_catalog() -> CatalogStore {
    use_context::<CatalogStore>().expect("CatalogStore chưa được cung cấp")
}
