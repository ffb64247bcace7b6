//! Logic lọc catalog — dẫn xuất thuần, không giữ trạng thái.
//!
//! Ba điều kiện được AND với nhau:
//! 1. Chuỗi tìm kiếm khớp substring (không phân biệt hoa thường) với
//!    tiêu đề HOẶC mô tả.
//! 2. Tag của sản phẩm thuộc đúng nhóm đang chọn.
//! 3. Danh mục khớp chính xác khi khác 0 (0 = tất cả).

use crate::{Product, ProductTag};

/// Nhóm tag đang xem trên trang chính.
///
/// Luôn là một trong hai nhóm — không có "xem cả hai", giống hai tab
/// trên giao diện gốc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagBucket {
    /// Đồ mình chọn (tag `mychoice`, kể cả tag chưa đặt).
    #[default]
    My,
    /// Đồ đặt qua Shopee (tag `shopee`).
    Shopee,
}

impl TagBucket {
    fn accepts(&self, tag: ProductTag) -> bool {
        match self {
            TagBucket::My => tag == ProductTag::MyChoice,
            TagBucket::Shopee => tag == ProductTag::Shopee,
        }
    }
}

/// Trạng thái lọc hiện tại của trang catalog.
///
/// Chỉ sống trong bộ nhớ, reset khi tải lại trang, không bao giờ lưu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    /// Chuỗi tìm kiếm tự do.
    pub text: String,
    /// Nhóm tag đang chọn.
    pub tag: TagBucket,
    /// Danh mục đang chọn, 0 = tất cả.
    pub category_id: i64,
}

impl CatalogFilter {
    /// Sản phẩm có qua được bộ lọc này không.
    pub fn matches(&self, product: &Product) -> bool {
        let query = self.text.trim().to_lowercase();
        let match_text = query.is_empty()
            || product.title.to_lowercase().contains(&query)
            || product.description.to_lowercase().contains(&query);
        let match_tag = self.tag.accepts(product.tag);
        let match_category = self.category_id == 0 || product.category_id == self.category_id;
        match_text && match_tag && match_category
    }
}

/// Dẫn xuất danh sách hiển thị từ danh sách đầy đủ.
///
/// Hàm thuần: cùng đầu vào luôn cho cùng đầu ra, áp dụng lặp lại với
/// cùng bộ lọc không thay đổi kết quả.
pub fn visible(products: &[Product], filter: &CatalogFilter) -> Vec<Product> {
    products.iter().filter(|p| filter.matches(p)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, title: &str, description: &str, tag: ProductTag, category_id: i64) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: description.to_string(),
            price: 100_000.0,
            image_url: String::new(),
            external_url: String::new(),
            tag,
            category_id,
            category: String::new(),
            created_at: String::new(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Áo thun trắng", "Cotton 100%", ProductTag::MyChoice, 1),
            product(2, "Áo khoác jean", "Form rộng", ProductTag::MyChoice, 2),
            product(3, "Nón lưỡi trai", "Đủ màu, đặt qua Shopee", ProductTag::Shopee, 1),
            product(4, "Túi tote", "Vải canvas", ProductTag::Shopee, 0),
        ]
    }

    #[test]
    fn mac_dinh_chi_hien_nhom_my() {
        let list = visible(&sample(), &CatalogFilter::default());
        let ids: Vec<i64> = list.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn tim_kiem_khong_phan_biet_hoa_thuong_tren_ca_tieu_de_va_mo_ta() {
        let filter = CatalogFilter { text: "ÁO".to_string(), ..Default::default() };
        let ids: Vec<i64> = visible(&sample(), &filter).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);

        // khớp trong mô tả
        let filter = CatalogFilter { text: "cotton".to_string(), ..Default::default() };
        let ids: Vec<i64> = visible(&sample(), &filter).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn ba_dieu_kien_duoc_and_voi_nhau() {
        let filter = CatalogFilter {
            text: "nón".to_string(),
            tag: TagBucket::Shopee,
            category_id: 1,
        };
        let ids: Vec<i64> = visible(&sample(), &filter).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);

        // cùng chuỗi nhưng sai danh mục thì rỗng
        let filter = CatalogFilter { category_id: 2, ..filter };
        assert!(visible(&sample(), &filter).is_empty());
    }

    #[test]
    fn danh_muc_0_nghia_la_tat_ca() {
        let filter = CatalogFilter { tag: TagBucket::Shopee, ..Default::default() };
        let ids: Vec<i64> = visible(&sample(), &filter).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn ap_dung_lap_lai_khong_doi_ket_qua() {
        let filter = CatalogFilter { text: "áo".to_string(), ..Default::default() };
        let once = visible(&sample(), &filter);
        let twice = visible(&once, &filter);
        assert_eq!(once, twice);
    }
}
