//! Trang quản trị.
//!
//! Không có bước đăng nhập: token lấy từ URL hoặc sessionStorage, thiếu
//! token thì trang vẫn mở nhưng banner cảnh báo và server sẽ từ chối
//! mọi thao tác ghi. Sau mỗi mutation thành công các danh sách liên
//! quan được nạp lại nguyên vẹn từ server, kể cả bản công khai trong
//! [`CatalogStore`].

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use linkshop_shared::{Category, Product, ProductTag, format_price};
use linkshop_shared::date::format_created_at;

use super::action_dialog::use_dialogs;
use super::category_panel::CategoryPanel;
use super::product_form::{ProductForm, ProductFormState};
use super::profile_form::ProfileForm;
use super::socials_panel::SocialsPanel;
use crate::api::{ApiError, use_api};
use crate::auth::use_auth;
use crate::collection::RemoteCollection;
use crate::store::use_catalog;
use crate::web::router::use_router;

/// Thời gian toast thông báo tự tắt.
const TOAST_MS: u32 = 3000;

#[component]
pub fn AdminPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let store = use_catalog();
    let router = use_router();
    let dialogs = use_dialogs();

    let products = RemoteCollection::<Product>::new();
    let categories = RemoteCollection::<Category>::new();
    let form = ProductFormState::new();

    let toast = RwSignal::new(None::<String>);
    let notify = Callback::new(move |message: String| {
        toast.set(Some(message));
        Timeout::new(TOAST_MS, move || toast.set(None)).forget();
    });

    // Bản công khai cũng nạp lại từ server, không vá tay.
    let refresh_public = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.fetch_products().await {
                    Ok(items) => store.replace_all(items),
                    Err(_) => store.clear(),
                }
            });
        }
    };
    let refresh_products = {
        let api = api.clone();
        let refresh_public = refresh_public.clone();
        move || {
            let api = api.clone();
            products.load(async move { api.fetch_products_admin().await });
            refresh_public();
        }
    };
    let refresh_categories = {
        let api = api.clone();
        move || {
            let api = api.clone();
            categories.load(async move { api.fetch_categories_admin().await });
        }
    };

    refresh_products();
    refresh_categories();

    let on_product_saved = Callback::new({
        let refresh_products = refresh_products.clone();
        move |_| refresh_products()
    });
    // Tên danh mục nằm denormalize trên sản phẩm nên đổi danh mục là
    // phải nạp lại cả hai phía.
    let on_category_changed = Callback::new({
        let refresh_products = refresh_products.clone();
        let refresh_categories = refresh_categories.clone();
        move |_| {
            refresh_categories();
            refresh_products();
        }
    });

    let edit_product = {
        let api = api.clone();
        move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                match api.fetch_product(id).await {
                    Ok(product) => form.populate(&product),
                    Err(err) => notify.run(err.to_string()),
                }
            });
        }
    };
    let delete_product = {
        let api = api.clone();
        let refresh_products = refresh_products.clone();
        move |id: i64, title: String| {
            let api = api.clone();
            let refresh_products = refresh_products.clone();
            spawn_local(async move {
                let question = format!("Xoá sản phẩm \"{}\"?", title);
                if !dialogs.confirm(&question).await {
                    return;
                }
                match api.delete_product(id).await {
                    Ok(()) => {
                        notify.run("Đã xoá sản phẩm.".to_string());
                        refresh_products();
                    }
                    Err(err) => notify.run(err.to_string()),
                }
            });
        }
    };

    let error_panel = move |error: Option<ApiError>| {
        error.map(|err| {
            view! {
                <div role="alert" class="alert alert-error text-sm">
                    <span>{err.to_string()}</span>
                </div>
            }
        })
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 py-6 flex flex-col gap-4">
            <div class="flex items-center justify-between">
                <h1 class="text-xl font-bold">"Quản trị linkshop"</h1>
                <a
                    href="/"
                    class="link link-hover text-sm"
                    on:click=move |ev| {
                        ev.prevent_default();
                        router.navigate("/");
                    }
                >
                    "Về trang chính"
                </a>
            </div>

            <Show when=move || !auth.has_token()>
                <div role="alert" class="alert alert-warning text-sm">
                    <span>
                        "Chưa có token quản trị. Trang vẫn xem được nhưng server sẽ từ chối mọi thao tác ghi. Mở trang bằng link có ?token=... để xác thực."
                    </span>
                </div>
            </Show>

            {move || error_panel(products.error.get())}
            {move || error_panel(categories.error.get())}

            <ProductForm
                form=form
                categories=categories
                on_saved=on_product_saved
                notify=notify
            />

            // ---- danh sách sản phẩm ----
            <div class="card bg-base-100 shadow p-4">
                <h2 class="font-bold mb-2">"Sản phẩm"</h2>
                <Show when=move || products.loading.get()>
                    <span class="loading loading-spinner loading-sm"></span>
                </Show>
                <Show when=move || !products.loading.get() && products.is_empty()>
                    <p class="text-sm opacity-60">"Chưa có sản phẩm nào."</p>
                </Show>
                <ul class="flex flex-col divide-y">
                    <For
                        each=move || products.items.get()
                        key=|p| p.id
                        children=move |product: Product| {
                            let id = product.id;
                            let title = product.title.clone();
                            let edit = {
                                let edit_product = edit_product.clone();
                                move |_| edit_product(id)
                            };
                            let delete = {
                                let delete_product = delete_product.clone();
                                let title = title.clone();
                                move |_| delete_product(id, title.clone())
                            };
                            let created = format_created_at(&product.created_at)
                                .unwrap_or_default();
                            view! {
                                <li class="flex items-center justify-between py-2 gap-2">
                                    <div class="flex flex-col min-w-0">
                                        <span class="font-medium truncate">
                                            {product.title.clone()}
                                        </span>
                                        <span class="text-xs opacity-60">
                                            {format_price(product.price)} " · "
                                            {if product.category.is_empty() {
                                                "Không phân loại".to_string()
                                            } else {
                                                product.category.clone()
                                            }} " · " {created}
                                        </span>
                                    </div>
                                    <div class="flex items-center gap-1 shrink-0">
                                        {(product.tag == ProductTag::Shopee)
                                            .then(|| {
                                                view! {
                                                    <span class="badge badge-warning badge-sm">
                                                        "Shopee"
                                                    </span>
                                                }
                                            })}
                                        <button class="btn btn-xs btn-ghost" on:click=edit>
                                            "Sửa"
                                        </button>
                                        <button
                                            class="btn btn-xs btn-error btn-outline"
                                            on:click=delete
                                        >
                                            "Xoá"
                                        </button>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>

            <CategoryPanel
                categories=categories
                on_changed=on_category_changed
                notify=notify
            />

            <ProfileForm notify=notify />
            <SocialsPanel notify=notify />

            // ---- toast thông báo ----
            {move || {
                toast
                    .get()
                    .map(|message| {
                        view! {
                            <div class="toast toast-end">
                                <div class="alert alert-info text-sm">
                                    <span>{message}</span>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
