//! Quản lý danh mục trên trang admin.
//!
//! Mọi mutation thành công đều gọi `on_changed` để nạp lại cả danh mục
//! lẫn hai danh sách sản phẩm, vì tên danh mục được server denormalize
//! sẵn trên từng sản phẩm. Không sửa tay danh sách tại chỗ.

use leptos::prelude::*;
use leptos::task::spawn_local;
use linkshop_shared::Category;

use super::action_dialog::use_dialogs;
use crate::api::use_api;
use crate::collection::RemoteCollection;

#[component]
pub fn CategoryPanel(
    categories: RemoteCollection<Category>,
    /// Gọi sau mỗi mutation thành công.
    on_changed: Callback<()>,
    notify: Callback<String>,
) -> impl IntoView {
    let api = use_api();
    let dialogs = use_dialogs();

    let new_name = RwSignal::new(String::new());

    let create = {
        let api = api.clone();
        move |_| {
            let name = new_name.get_untracked();
            // tên trống chặn ngay, không gọi mạng
            if name.trim().is_empty() {
                notify.run("Tên danh mục không được để trống.".to_string());
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.create_category(name.trim().to_string()).await {
                    Ok(()) => {
                        new_name.set(String::new());
                        notify.run("Đã thêm danh mục.".to_string());
                        on_changed.run(());
                    }
                    Err(err) => notify.run(err.to_string()),
                }
            });
        }
    };

    view! {
        <div class="card bg-base-100 shadow p-4 flex flex-col gap-3">
            <h2 class="font-bold">"Danh mục"</h2>

            <div class="flex gap-2">
                <input
                    type="text"
                    placeholder="Tên danh mục mới"
                    class="input input-bordered flex-1"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" on:click=create>
                    "Thêm"
                </button>
            </div>

            <Show when=move || categories.loading.get()>
                <span class="loading loading-spinner loading-sm"></span>
            </Show>

            <ul class="flex flex-col divide-y">
                <For
                    each=move || categories.items.get()
                    key=|c| c.id
                    children=move |category: Category| {
                        let id = category.id;
                        let name_for_rename = category.name.clone();
                        let name_for_delete = category.name.clone();
                        let rename = {
                            let api = api.clone();
                            move |_| {
                                let api = api.clone();
                                let current = name_for_rename.clone();
                                spawn_local(async move {
                                    let Some(name) = dialogs
                                        .prompt("Tên mới cho danh mục:", &current)
                                        .await
                                    else {
                                        return;
                                    };
                                    if name.trim().is_empty() {
                                        notify
                                            .run(
                                                "Tên danh mục không được để trống.".to_string(),
                                            );
                                        return;
                                    }
                                    match api.rename_category(id, name.trim().to_string()).await {
                                        Ok(()) => {
                                            notify.run("Đã đổi tên danh mục.".to_string());
                                            on_changed.run(());
                                        }
                                        Err(err) => notify.run(err.to_string()),
                                    }
                                });
                            }
                        };
                        let delete = {
                            let api = api.clone();
                            move |_| {
                                let api = api.clone();
                                let name = name_for_delete.clone();
                                spawn_local(async move {
                                    let question = format!(
                                        "Xoá danh mục \"{}\"? Sản phẩm thuộc danh mục này sẽ về \"Không phân loại\".",
                                        name,
                                    );
                                    if !dialogs.confirm(&question).await {
                                        return;
                                    }
                                    match api.delete_category(id).await {
                                        Ok(()) => {
                                            notify.run("Đã xoá danh mục.".to_string());
                                            on_changed.run(());
                                        }
                                        Err(err) => notify.run(err.to_string()),
                                    }
                                });
                            }
                        };
                        view! {
                            <li class="flex items-center justify-between py-2">
                                <span>{category.name.clone()}</span>
                                <div class="flex gap-1">
                                    <button class="btn btn-xs btn-ghost" on:click=rename>
                                        "Đổi tên"
                                    </button>
                                    <button class="btn btn-xs btn-error btn-outline" on:click=delete>
                                        "Xoá"
                                    </button>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
