//! Modal chi tiết sản phẩm trên trang công khai.

use leptos::prelude::*;
use linkshop_shared::{Product, format_price, render_bio};

use super::icons::InstagramIcon;

/// Link liên hệ Instagram suy ra từ username của shop.
///
/// Username có thể kèm `@` đằng trước, bỏ đi trước khi ghép URL.
pub fn contact_url(username: &str) -> String {
    let handle = username.trim().trim_start_matches('@');
    format!("https://www.instagram.com/{}", handle)
}

/// Chi tiết một sản phẩm với nút hành động.
///
/// Sản phẩm tag `shopee` có link ngoài thì dẫn thẳng sang Shopee,
/// còn lại dẫn về Instagram của shop để nhắn tin hỏi mua.
#[component]
pub fn ProductModal(
    product: Product,
    /// Username Instagram của shop, cho nút liên hệ.
    shop_username: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let price_text = format_price(product.price);
    let description_html = render_bio(&product.description);
    let shopee = product.shopee_link().map(|url| url.to_string());
    let contact = contact_url(&shop_username);

    view! {
        <div class="modal modal-open" on:click=move |_| on_close.run(())>
            <div class="modal-box max-w-md" on:click=move |ev| ev.stop_propagation()>
                <button
                    class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>

                {(!product.image_url.trim().is_empty())
                    .then(|| {
                        view! {
                            <img
                                src=product.image_url.clone()
                                alt=product.title.clone()
                                class="w-full rounded-lg object-cover mb-3"
                            />
                        }
                    })}

                <h3 class="font-bold text-lg">{product.title.clone()}</h3>
                {(!product.category.trim().is_empty())
                    .then(|| {
                        view! {
                            <span class="badge badge-ghost badge-sm">
                                {product.category.clone()}
                            </span>
                        }
                    })}
                <p class="text-primary font-semibold py-1">{price_text}</p>
                <div class="py-2 text-sm" inner_html=description_html></div>

                <div class="modal-action">
                    {match shopee {
                        Some(url) => {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noreferrer"
                                    class="btn btn-warning w-full"
                                >
                                    "Mua trên Shopee"
                                </a>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <a
                                    href=contact
                                    target="_blank"
                                    rel="noreferrer"
                                    class="btn btn-primary w-full"
                                >
                                    <InstagramIcon class="w-5 h-5" />
                                    "Nhắn tin hỏi mua"
                                </a>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_url_bo_ky_tu_at() {
        assert_eq!(contact_url("@myshop"), "https://www.instagram.com/myshop");
        assert_eq!(contact_url("myshop"), "https://www.instagram.com/myshop");
        assert_eq!(contact_url("  @myshop "), "https://www.instagram.com/myshop");
    }
}
