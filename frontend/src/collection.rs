//! Bộ sưu tập dữ liệu từ xa — khung chung cho mọi danh sách CRUD.
//!
//! Sản phẩm, danh mục và mạng xã hội trên trang admin đều theo cùng một
//! vòng đời: fetch → render → mutation → fetch lại toàn bộ. Struct này
//! gom bộ ba signal (items, loading, error) và thao tác nạp lại vào một
//! chỗ, mỗi thực thể chỉ việc đưa future fetch của mình vào.

use crate::api::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Trạng thái một danh sách lấy từ server.
pub struct RemoteCollection<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    /// Lỗi của lần nạp gần nhất; nạp thành công sẽ xoá.
    pub error: RwSignal<Option<ApiError>>,
}

// derive(Clone/Copy) đòi T: Clone/Copy nên impl tay
impl<T: Send + Sync + 'static> Clone for RemoteCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteCollection<T> {}

impl<T: Send + Sync + 'static> RemoteCollection<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Nạp (lại) toàn bộ danh sách từ một future fetch.
    ///
    /// Thất bại giữ nguyên danh sách cũ — trạng thái tốt gần nhất —
    /// và chỉ ghi lỗi vào `error` cho tầng render quyết định hiển thị.
    pub fn load<Fut>(&self, fetch: Fut)
    where
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let items = self.items;
        let loading = self.loading;
        let error = self.error;
        loading.set(true);
        spawn_local(async move {
            match fetch.await {
                Ok(data) => {
                    error.set(None);
                    items.set(data);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[RemoteCollection] nạp danh sách thất bại: {}", err).into(),
                    );
                    error.set(Some(err));
                }
            }
            loading.set(false);
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.with(|items| items.is_empty())
    }
}

impl<T: Send + Sync + 'static> Default for RemoteCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}
