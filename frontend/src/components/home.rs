//! Trang linkshop công khai.
//!
//! Nạp profile, danh mục và sản phẩm đúng một lần khi vào trang; mọi
//! thao tác lọc về sau chỉ render lại từ [`CatalogStore`], không gọi
//! mạng. Đường đọc công khai thất bại thì xoá danh sách và hiển thị
//! trạng thái trống, không bao giờ làm sập trang.

use leptos::prelude::*;
use leptos::task::spawn_local;
use linkshop_shared::{Category, Product, Profile, Social, TagBucket, format_price, render_bio};

use super::icons::{FacebookIcon, InstagramIcon, TikTokIcon};
use super::product_modal::ProductModal;
use crate::api::use_api;
use crate::store::use_catalog;
use crate::web::router::use_router;

/// URL mạng xã hội theo tên nền tảng, rơi về trang chủ nền tảng khi
/// shop chưa khai báo link.
pub fn social_url(socials: &[Social], platform: &str, fallback: &str) -> String {
    socials
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(platform) && !s.url.trim().is_empty())
        .map(|s| s.url.clone())
        .unwrap_or_else(|| fallback.to_string())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let store = use_catalog();
    let router = use_router();

    let profile = RwSignal::new(Profile::default());
    let categories = RwSignal::new(Vec::<Category>::new());
    let selected = RwSignal::new(None::<Product>);

    // Nạp một lần khi vào trang.
    {
        let api = api.clone();
        spawn_local(async move {
            match api.fetch_products().await {
                Ok(items) => store.replace_all(items),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[Home] không nạp được sản phẩm: {}", err).into(),
                    );
                    store.clear();
                }
            }
        });
    }
    {
        let api = api.clone();
        spawn_local(async move {
            if let Ok(items) = api.fetch_categories().await {
                categories.set(items);
            }
        });
    }
    {
        let api = api.clone();
        spawn_local(async move {
            if let Ok(data) = api.fetch_profile(false).await {
                profile.set(data);
            }
        });
    }

    let bio_html = move || render_bio(&profile.with(|p| p.bio.clone()));

    view! {
        <div class="max-w-lg mx-auto px-4 py-6">
            // ---- profile header ----
            <div class="flex flex-col items-center text-center gap-2">
                {move || {
                    let url = profile.with(|p| p.avatar_url.clone());
                    (!url.trim().is_empty())
                        .then(|| {
                            view! {
                                <img
                                    src=url
                                    alt="avatar"
                                    class="w-24 h-24 rounded-full object-cover"
                                />
                            }
                        })
                }}
                <h1 class="text-xl font-bold">{move || profile.with(|p| p.display_name.clone())}</h1>
                {move || {
                    let highlight = profile.with(|p| p.highlight.clone());
                    (!highlight.trim().is_empty())
                        .then(|| view! { <span class="badge badge-primary">{highlight}</span> })
                }}
                <div class="text-sm opacity-80" inner_html=bio_html></div>

                // thứ tự cố định, link rơi về trang chủ nền tảng khi thiếu
                <div class="flex gap-4 py-2">
                    <a
                        href=move || {
                            profile
                                .with(|p| {
                                    social_url(&p.socials, "instagram", "https://www.instagram.com/")
                                })
                        }
                        target="_blank"
                        rel="noreferrer"
                        aria-label="Instagram"
                    >
                        <InstagramIcon class="w-6 h-6" />
                    </a>
                    <a
                        href=move || {
                            profile
                                .with(|p| {
                                    social_url(&p.socials, "facebook", "https://www.facebook.com/")
                                })
                        }
                        target="_blank"
                        rel="noreferrer"
                        aria-label="Facebook"
                    >
                        <FacebookIcon class="w-6 h-6" />
                    </a>
                    <a
                        href=move || {
                            profile
                                .with(|p| social_url(&p.socials, "tiktok", "https://www.tiktok.com/"))
                        }
                        target="_blank"
                        rel="noreferrer"
                        aria-label="TikTok"
                    >
                        <TikTokIcon class="w-6 h-6" />
                    </a>
                </div>
            </div>

            // ---- bộ lọc ----
            <input
                type="text"
                placeholder="Tìm sản phẩm..."
                class="input input-bordered w-full my-3"
                on:input=move |ev| store.set_text(event_target_value(&ev))
            />

            <div class="tabs tabs-boxed justify-center mb-3">
                <button
                    class="tab"
                    class:tab-active=move || store.tag() == TagBucket::My
                    on:click=move |_| store.set_tag(TagBucket::My)
                >
                    "Mình chọn"
                </button>
                <button
                    class="tab"
                    class:tab-active=move || store.tag() == TagBucket::Shopee
                    on:click=move |_| store.set_tag(TagBucket::Shopee)
                >
                    "Shopee"
                </button>
            </div>

            <div class="flex flex-wrap gap-2 justify-center mb-4">
                <button
                    class="btn btn-xs"
                    class:btn-primary=move || store.category_id() == 0
                    on:click=move |_| store.set_category(0)
                >
                    "Tất cả"
                </button>
                <For
                    each=move || categories.get()
                    key=|c| c.id
                    children=move |category: Category| {
                        let id = category.id;
                        view! {
                            <button
                                class="btn btn-xs"
                                class:btn-primary=move || store.category_id() == id
                                on:click=move |_| store.set_category(id)
                            >
                                {category.name.clone()}
                            </button>
                        }
                    }
                />
            </div>

            // ---- lưới sản phẩm ----
            <Show
                when=move || !store.visible().is_empty()
                fallback=|| {
                    view! {
                        <p class="text-center opacity-60 py-8">
                            "Không tìm thấy sản phẩm phù hợp."
                        </p>
                    }
                }
            >
                <div class="grid grid-cols-2 gap-3">
                    <For
                        each=move || store.visible()
                        key=|p| p.id
                        children=move |product: Product| {
                            let opened = product.clone();
                            let shopee = product.shopee_link().map(|url| url.to_string());
                            let description = if product.description.trim().is_empty() {
                                "Chưa có mô tả".to_string()
                            } else {
                                product.description.clone()
                            };
                            view! {
                                <div
                                    class="card bg-base-100 shadow cursor-pointer"
                                    on:click=move |_| selected.set(Some(opened.clone()))
                                >
                                    <figure>
                                        {if product.image_url.trim().is_empty() {
                                            view! {
                                                <div class="aspect-square w-full bg-base-300"></div>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <img
                                                    src=product.image_url.clone()
                                                    alt=product.title.clone()
                                                    class="aspect-square w-full object-cover"
                                                />
                                            }
                                                .into_any()
                                        }}
                                    </figure>
                                    <div class="card-body p-3 gap-1">
                                        <h2 class="text-sm font-medium line-clamp-2">
                                            {product.title.clone()}
                                        </h2>
                                        <p class="text-xs opacity-60 line-clamp-2">{description}</p>
                                        {(!product.category.trim().is_empty())
                                            .then(|| {
                                                view! {
                                                    <span class="badge badge-ghost badge-sm">
                                                        {product.category.clone()}
                                                    </span>
                                                }
                                            })}
                                        <p class="text-primary text-sm font-semibold">
                                            {format_price(product.price)}
                                        </p>
                                        {shopee
                                            .map(|url| {
                                                view! {
                                                    <a
                                                        href=url
                                                        target="_blank"
                                                        rel="noreferrer"
                                                        class="btn btn-warning btn-xs"
                                                        on:click=move |ev| ev.stop_propagation()
                                                    >
                                                        "Mua trên Shopee"
                                                    </a>
                                                }
                                            })}
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            // ---- modal chi tiết ----
            {move || {
                selected
                    .get()
                    .map(|product| {
                        let username = profile.with(|p| p.username.clone());
                        view! {
                            <ProductModal
                                product=product
                                shop_username=username
                                on_close=Callback::new(move |_| selected.set(None))
                            />
                        }
                    })
            }}

            <footer class="text-center mt-8">
                <a
                    href="/admin"
                    class="link link-hover text-xs opacity-50"
                    on:click=move |ev| {
                        ev.prevent_default();
                        router.navigate("/admin");
                    }
                >
                    "Quản trị"
                </a>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn social(name: &str, url: &str) -> Social {
        Social {
            id: 1,
            name: name.to_string(),
            url: url.to_string(),
            icon: String::new(),
            ord: 0,
        }
    }

    #[test]
    fn social_url_uu_tien_link_da_khai_bao() {
        let socials = vec![social("Instagram", "https://www.instagram.com/myshop")];
        assert_eq!(
            social_url(&socials, "instagram", "https://www.instagram.com/"),
            "https://www.instagram.com/myshop"
        );
    }

    #[test]
    fn social_url_roi_ve_trang_chu() {
        assert_eq!(
            social_url(&[], "tiktok", "https://www.tiktok.com/"),
            "https://www.tiktok.com/"
        );
        // link rỗng coi như chưa khai báo
        let socials = vec![social("TikTok", "   ")];
        assert_eq!(
            social_url(&socials, "tiktok", "https://www.tiktok.com/"),
            "https://www.tiktok.com/"
        );
    }
}
