//! Form sửa profile của shop trên trang admin.

use leptos::prelude::*;
use leptos::task::spawn_local;
use linkshop_shared::Profile;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use crate::api::use_api;

#[component]
pub fn ProfileForm(notify: Callback<String>) -> impl IntoView {
    let api = use_api();

    let display_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let highlight = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let populate = move |profile: Profile| {
        display_name.set(profile.display_name);
        username.set(profile.username);
        bio.set(profile.bio);
        highlight.set(profile.highlight);
        avatar_url.set(profile.avatar_url);
    };

    // Đổ bản đã xác thực vào form khi vào trang.
    {
        let api = api.clone();
        spawn_local(async move {
            match api.fetch_profile(true).await {
                Ok(profile) => populate(profile),
                Err(err) => notify.run(err.to_string()),
            }
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(form_el) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        let Ok(data) = FormData::new_with_form(&form_el) else {
            notify.run("Không đọc được dữ liệu form.".to_string());
            return;
        };

        let api = api.clone();
        submitting.set(true);
        spawn_local(async move {
            match api.update_profile(data).await {
                Ok(()) => {
                    notify.run("Đã cập nhật profile.".to_string());
                    // nạp lại để lấy avatar_url mới từ server
                    if let Ok(profile) = api.fetch_profile(true).await {
                        populate(profile);
                    }
                    form_el.reset();
                }
                Err(err) => notify.run(err.to_string()),
            }
            submitting.set(false);
        });
    };

    view! {
        <form class="card bg-base-100 shadow p-4 flex flex-col gap-3" on:submit=on_submit>
            <h2 class="font-bold">"Profile"</h2>

            {move || {
                let url = avatar_url.get();
                (!url.trim().is_empty())
                    .then(|| {
                        view! {
                            <img src=url alt="avatar" class="w-16 h-16 rounded-full object-cover" />
                        }
                    })
            }}

            <input
                type="text"
                name="display_name"
                placeholder="Tên hiển thị"
                class="input input-bordered"
                prop:value=move || display_name.get()
                on:input=move |ev| display_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                name="username"
                placeholder="Username Instagram"
                class="input input-bordered"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <textarea
                name="bio"
                placeholder="Bio (link và @handle sẽ tự thành liên kết)"
                class="textarea textarea-bordered"
                prop:value=move || bio.get()
                on:input=move |ev| bio.set(event_target_value(&ev))
            ></textarea>
            <input
                type="text"
                name="highlight"
                placeholder="Dòng nổi bật"
                class="input input-bordered"
                prop:value=move || highlight.get()
                on:input=move |ev| highlight.set(event_target_value(&ev))
            />
            <input type="file" name="avatar" accept="image/*" class="file-input file-input-bordered" />

            <button
                type="submit"
                class="btn btn-primary"
                prop:disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Đang lưu..." } else { "Lưu profile" }}
            </button>
        </form>
    }
}
