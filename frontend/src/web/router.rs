//! Router dựa trên History API.
//!
//! Mọi thao tác với `window.history` gom về module này: điều hướng
//! chủ động qua [`RouterService::navigate`], nút back/forward của trình
//! duyệt qua listener `popstate`. Giao diện cập nhật theo signal route.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// Path hiện tại trên thanh địa chỉ.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Dịch vụ điều hướng, chia sẻ qua Context.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    fn new() -> Self {
        let initial = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial);
        Self { current_route, set_route }
    }

    /// Signal route hiện tại.
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Điều hướng đến một path, đẩy vào History.
    pub fn navigate(&self, path: &str) {
        let target = AppRoute::from_path(path);
        web_sys::console::log_1(&format!("[Router] điều hướng đến {}", target).into());
        push_history_state(target.to_path());
        self.set_route.set(target);
    }

    /// Lắng nghe nút back/forward của trình duyệt.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // giữ closure sống cùng trang
        closure.forget();
    }
}

fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// Lấy dịch vụ điều hướng từ Context.
pub fn use_router() -> RouterService {
    use_context::<RouterService>().expect("RouterService chưa được cung cấp — cần bọc trong <Router>")
}

// ============================================================================
// UI component
// ============================================================================

/// Component gốc cung cấp Context điều hướng.
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();
    children()
}

/// Cửa ra của router — render view tương ứng route hiện tại.
#[component]
pub fn RouterOutlet(
    /// Hàm ánh xạ route → view.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
