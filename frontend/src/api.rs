//! Client REST cho backend của shop.
//!
//! Mọi endpoint trong một struct duy nhất; các request quản trị gắn
//! header `X-Admin-Token` (khi có token) và luôn gửi kèm credentials
//! same-origin. Response không 2xx được đọc body dạng text và giữ
//! nguyên văn trong [`ApiError::Status`] để trang admin hiển thị lại.

use gloo_net::http::{Request, RequestBuilder, Response};
use linkshop_shared::{
    Category, CategoryPayload, DeleteTarget, HEADER_ADMIN_TOKEN, Product, Profile, Social,
};
use web_sys::RequestCredentials;

/// Lỗi khi gọi API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Lỗi tầng mạng hoặc không đọc được response.
    Network(String),
    /// Server trả mã không thành công; giữ nguyên body để hiển thị.
    Status { status: u16, body: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Lỗi mạng: {}", msg),
            ApiError::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
        }
    }
}

fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Client API của shop. Base URL rỗng = cùng origin với trang.
#[derive(Clone, Debug, PartialEq)]
pub struct ShopApi {
    base_url: String,
    token: String,
}

impl ShopApi {
    pub fn new(token: String) -> Self {
        Self { base_url: String::new(), token }
    }

    #[allow(dead_code)]
    pub fn with_base_url(base_url: &str, token: String) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string(), token }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Gắn credentials same-origin và header token (nếu có) cho request.
    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.credentials(RequestCredentials::SameOrigin);
        if self.token.trim().is_empty() {
            builder
        } else {
            builder.header(HEADER_ADMIN_TOKEN, &self.token)
        }
    }

    /// Gửi request, đổi mã không 2xx thành [`ApiError::Status`].
    async fn send_ok(request: Request) -> Result<Response, ApiError> {
        let res = request.send().await.map_err(net_err)?;
        if res.ok() {
            Ok(res)
        } else {
            let status = res.status();
            let body = res
                .text()
                .await
                .unwrap_or_else(|_| "<không đọc được nội dung>".to_string());
            Err(ApiError::Status { status, body })
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        with_auth: bool,
    ) -> Result<T, ApiError> {
        let builder = Request::get(&self.url(path));
        let builder = if with_auth { self.authed(builder) } else { builder };
        let res = Self::send_ok(builder.build().map_err(net_err)?).await?;
        res.json::<T>().await.map_err(net_err)
    }

    // =====================================================
    // Sản phẩm
    // =====================================================

    /// Danh sách sản phẩm công khai.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/api/products", false).await
    }

    /// Danh sách sản phẩm cho trang admin (kèm các trường thô).
    pub async fn fetch_products_admin(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/api/products", true).await
    }

    /// Một sản phẩm để đổ vào form sửa.
    pub async fn fetch_product(&self, id: i64) -> Result<Product, ApiError> {
        self.get_json(&format!("/api/products/{}", id), true).await
    }

    /// Tạo sản phẩm mới — multipart (có thể kèm file ảnh).
    pub async fn create_product(&self, form: web_sys::FormData) -> Result<(), ApiError> {
        let req = self
            .authed(Request::post(&self.url("/api/products")))
            .body(form)
            .map_err(net_err)?;
        Self::send_ok(req).await.map(|_| ())
    }

    /// Cập nhật sản phẩm theo id — multipart.
    pub async fn update_product(&self, id: i64, form: web_sys::FormData) -> Result<(), ApiError> {
        let req = self
            .authed(Request::put(&self.url(&format!("/api/products/{}", id))))
            .body(form)
            .map_err(net_err)?;
        Self::send_ok(req).await.map(|_| ())
    }

    /// Xoá sản phẩm (endpoint POST JSON để tránh rắc rối DELETE/cookie).
    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        let req = self
            .authed(Request::post(&self.url("/api/admin/delete-product")))
            .json(&DeleteTarget { id })
            .map_err(net_err)?;
        Self::send_ok(req).await.map(|_| ())
    }

    // =====================================================
    // Danh mục
    // =====================================================

    /// Danh sách danh mục công khai (chips trên trang chính).
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/api/categories", false).await
    }

    /// Danh sách danh mục cho trang admin.
    pub async fn fetch_categories_admin(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/api/categories", true).await
    }

    pub async fn create_category(&self, name: String) -> Result<(), ApiError> {
        let req = self
            .authed(Request::post(&self.url("/api/categories")))
            .json(&CategoryPayload { name })
            .map_err(net_err)?;
        Self::send_ok(req).await.map(|_| ())
    }

    pub async fn rename_category(&self, id: i64, name: String) -> Result<(), ApiError> {
        let req = self
            .authed(Request::put(&self.url(&format!("/api/categories/{}", id))))
            .json(&CategoryPayload { name })
            .map_err(net_err)?;
        Self::send_ok(req).await.map(|_| ())
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        let req = self
            .authed(Request::post(&self.url("/api/admin/delete-category")))
            .json(&DeleteTarget { id })
            .map_err(net_err)?;
        Self::send_ok(req).await.map(|_| ())
    }

    // =====================================================
    // Profile & mạng xã hội
    // =====================================================

    /// Profile của shop. `with_auth` = true khi cần bản cho form admin.
    pub async fn fetch_profile(&self, with_auth: bool) -> Result<Profile, ApiError> {
        self.get_json("/api/profile", with_auth).await
    }

    /// Cập nhật profile — multipart (có thể kèm file avatar).
    pub async fn update_profile(&self, form: web_sys::FormData) -> Result<(), ApiError> {
        let req = self
            .authed(Request::put(&self.url("/api/profile")))
            .body(form)
            .map_err(net_err)?;
        Self::send_ok(req).await.map(|_| ())
    }

    pub async fn fetch_socials(&self) -> Result<Vec<Social>, ApiError> {
        self.get_json("/api/socials", true).await
    }

    pub async fn delete_social(&self, id: i64) -> Result<(), ApiError> {
        let req = self
            .authed(Request::delete(&self.url(&format!("/api/socials/{}", id))))
            .build()
            .map_err(net_err)?;
        Self::send_ok(req).await.map(|_| ())
    }

    /// Danh sách file icon có sẵn dưới static/img.
    pub async fn fetch_static_imgs(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/api/static-imgs", true).await
    }
}

/// Lấy client API từ Context.
pub fn use_api() -> ShopApi {
    leptos::prelude::use_context::<ShopApi>().expect("ShopApi chưa được cung cấp")
}
