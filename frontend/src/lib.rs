//! Ứng dụng linkshop phía trình duyệt.
//!
//! Kiến trúc hướng Context, các tầng tách bạch:
//! - `web::route` / `web::router`: định nghĩa và dịch vụ điều hướng
//! - `auth`: token quản trị (URL → sessionStorage)
//! - `api`: client REST
//! - `store`: trạng thái catalog của trang công khai
//! - `collection`: khung fetch/render/nạp-lại cho các danh sách admin
//! - `components`: tầng UI

mod api;
mod auth;
mod collection;
mod components {
    pub mod action_dialog;
    pub mod admin;
    mod category_panel;
    pub mod home;
    mod icons;
    mod product_form;
    mod product_modal;
    mod profile_form;
    mod socials_panel;
}
mod store;

use leptos::prelude::*;

use crate::api::ShopApi;
use crate::auth::AuthContext;
use crate::components::action_dialog::{ActionDialogHost, DialogService};
use crate::components::admin::AdminPage;
use crate::components::home::HomePage;
use crate::store::CatalogStore;

pub(crate) mod web {
    pub mod route;
    pub mod router;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// Ánh xạ route → view.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Admin => view! { <AdminPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Không tìm thấy trang"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Token resolve đúng một lần lúc khởi động, trước mọi request.
    let auth = AuthContext::new();
    provide_context(auth);

    provide_context(ShopApi::new(auth.token()));
    provide_context(CatalogStore::new());
    provide_context(DialogService::new());

    view! {
        <Router>
            <RouterOutlet matcher=route_matcher />
            <ActionDialogHost />
        </Router>
    }
}
