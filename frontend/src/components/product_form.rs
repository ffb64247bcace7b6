//! Form tạo / sửa sản phẩm trên trang admin.
//!
//! Trạng thái form là một bó `RwSignal` dùng chung giữa form và danh
//! sách admin (nút "Sửa" đổ dữ liệu vào form). Gửi đi dạng multipart
//! lấy thẳng từ thẻ `<form>` đang sống để kèm được file ảnh.

use leptos::prelude::*;
use leptos::task::spawn_local;
use linkshop_shared::{Category, Product, ProductTag};
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use crate::api::use_api;
use crate::collection::RemoteCollection;

/// Kiểm tra phía client trước khi gửi. Trả về thông điệp lỗi nếu vi phạm.
///
/// Vi phạm thì không có request nào được gửi đi.
pub fn validate(title: &str, tag: &str, external_url: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Tên sản phẩm không được để trống.".to_string());
    }
    if tag == ProductTag::Shopee.as_str() && external_url.trim().is_empty() {
        return Err("Sản phẩm Shopee cần có link mua hàng.".to_string());
    }
    Ok(())
}

/// Bó signal của form sản phẩm.
#[derive(Clone, Copy)]
pub struct ProductFormState {
    /// `Some(id)` khi đang sửa, `None` khi tạo mới.
    pub edit_id: RwSignal<Option<i64>>,
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub category_id: RwSignal<String>,
    pub tag: RwSignal<String>,
    pub external_url: RwSignal<String>,
    /// Lỗi hiển thị ngay dưới form (validation hoặc body lỗi từ server).
    pub error: RwSignal<Option<String>>,
    /// Chặn double-submit: nút gửi bị khoá khi đang có request.
    pub submitting: RwSignal<bool>,
}

impl ProductFormState {
    pub fn new() -> Self {
        Self {
            edit_id: RwSignal::new(None),
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            category_id: RwSignal::new("0".to_string()),
            tag: RwSignal::new(ProductTag::MyChoice.as_str().to_string()),
            external_url: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    /// Đổ một sản phẩm vào form để sửa.
    pub fn populate(&self, product: &Product) {
        self.edit_id.set(Some(product.id));
        self.title.set(product.title.clone());
        self.description.set(product.description.clone());
        self.price.set(if product.price > 0.0 {
            format!("{}", product.price)
        } else {
            String::new()
        });
        self.category_id.set(product.category_id.to_string());
        self.tag.set(product.tag.as_str().to_string());
        self.external_url.set(product.external_url.clone());
        self.error.set(None);
    }

    /// Về trạng thái tạo mới.
    pub fn reset(&self) {
        self.edit_id.set(None);
        self.title.set(String::new());
        self.description.set(String::new());
        self.price.set(String::new());
        self.category_id.set("0".to_string());
        self.tag.set(ProductTag::MyChoice.as_str().to_string());
        self.external_url.set(String::new());
        self.error.set(None);
    }
}

impl Default for ProductFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ProductForm(
    form: ProductFormState,
    categories: RemoteCollection<Category>,
    /// Gọi sau mỗi lần lưu thành công để nạp lại các danh sách.
    on_saved: Callback<()>,
    notify: Callback<String>,
) -> impl IntoView {
    let api = use_api();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.submitting.get_untracked() {
            return;
        }

        if let Err(msg) = validate(
            &form.title.get_untracked(),
            &form.tag.get_untracked(),
            &form.external_url.get_untracked(),
        ) {
            form.error.set(Some(msg));
            return;
        }

        let Some(form_el) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        let Ok(data) = FormData::new_with_form(&form_el) else {
            form.error.set(Some("Không đọc được dữ liệu form.".to_string()));
            return;
        };

        let api = api.clone();
        form.error.set(None);
        form.submitting.set(true);
        spawn_local(async move {
            let result = match form.edit_id.get_untracked() {
                Some(id) => api.update_product(id, data).await,
                None => api.create_product(data).await,
            };
            match result {
                Ok(()) => {
                    form_el.reset();
                    form.reset();
                    notify.run("Đã lưu sản phẩm.".to_string());
                    on_saved.run(());
                }
                Err(err) => form.error.set(Some(err.to_string())),
            }
            form.submitting.set(false);
        });
    };

    view! {
        <form class="card bg-base-100 shadow p-4 flex flex-col gap-3" on:submit=on_submit>
            <h2 class="font-bold">
                {move || {
                    if form.edit_id.get().is_some() { "Sửa sản phẩm" } else { "Thêm sản phẩm" }
                }}
            </h2>

            {move || {
                form.error
                    .get()
                    .map(|msg| {
                        view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{msg}</span>
                            </div>
                        }
                    })
            }}

            <input
                type="text"
                name="title"
                placeholder="Tên sản phẩm"
                class="input input-bordered"
                prop:value=move || form.title.get()
                on:input=move |ev| form.title.set(event_target_value(&ev))
            />
            <textarea
                name="description"
                placeholder="Mô tả"
                class="textarea textarea-bordered"
                prop:value=move || form.description.get()
                on:input=move |ev| form.description.set(event_target_value(&ev))
            ></textarea>
            <input
                type="number"
                name="price"
                placeholder="Giá (để trống = Liên hệ)"
                min="0"
                step="1000"
                class="input input-bordered"
                prop:value=move || form.price.get()
                on:input=move |ev| form.price.set(event_target_value(&ev))
            />
            <select
                name="category_id"
                class="select select-bordered"
                prop:value=move || form.category_id.get()
                on:change=move |ev| form.category_id.set(event_target_value(&ev))
            >
                <option value="0">"Không phân loại"</option>
                <For
                    each=move || categories.items.get()
                    key=|c| c.id
                    children=move |category: Category| {
                        view! { <option value=category.id.to_string()>{category.name.clone()}</option> }
                    }
                />
            </select>
            <select
                name="tag"
                class="select select-bordered"
                prop:value=move || form.tag.get()
                on:change=move |ev| form.tag.set(event_target_value(&ev))
            >
                <option value="mychoice">"Mình chọn"</option>
                <option value="shopee">"Shopee"</option>
            </select>
            <input
                type="url"
                name="external_url"
                placeholder="Link Shopee (bắt buộc với tag Shopee)"
                class="input input-bordered"
                prop:value=move || form.external_url.get()
                on:input=move |ev| form.external_url.set(event_target_value(&ev))
            />
            <input type="file" name="file" accept="image/*" class="file-input file-input-bordered" />

            <div class="flex gap-2">
                <button
                    type="submit"
                    class="btn btn-primary flex-1"
                    prop:disabled=move || form.submitting.get()
                >
                    {move || if form.submitting.get() { "Đang lưu..." } else { "Lưu" }}
                </button>
                {move || {
                    form.edit_id
                        .get()
                        .map(|_| {
                            view! {
                                <button
                                    type="button"
                                    class="btn btn-ghost"
                                    on:click=move |_| form.reset()
                                >
                                    "Huỷ sửa"
                                </button>
                            }
                        })
                }}
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_trong_bi_chan() {
        assert!(validate("", "mychoice", "").is_err());
        assert!(validate("   ", "mychoice", "").is_err());
        assert!(validate("Áo thun", "mychoice", "").is_ok());
    }

    #[test]
    fn shopee_can_link_mua_hang() {
        assert!(validate("Áo thun", "shopee", "").is_err());
        assert!(validate("Áo thun", "shopee", "   ").is_err());
        assert!(validate("Áo thun", "shopee", "https://shopee.vn/item/1").is_ok());
        // tag thường thì link để trống vẫn hợp lệ
        assert!(validate("Áo thun", "mychoice", "").is_ok());
    }
}
