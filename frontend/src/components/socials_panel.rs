//! Quản lý link mạng xã hội và kho icon tĩnh trên trang admin.

use leptos::prelude::*;
use leptos::task::spawn_local;
use linkshop_shared::Social;

use super::action_dialog::use_dialogs;
use crate::api::use_api;
use crate::collection::RemoteCollection;

#[component]
pub fn SocialsPanel(notify: Callback<String>) -> impl IntoView {
    let api = use_api();
    let dialogs = use_dialogs();

    let socials = RemoteCollection::<Social>::new();
    let static_imgs = RemoteCollection::<String>::new();

    {
        let api = api.clone();
        socials.load(async move { api.fetch_socials().await });
    }
    {
        let api = api.clone();
        static_imgs.load(async move { api.fetch_static_imgs().await });
    }

    view! {
        <div class="card bg-base-100 shadow p-4 flex flex-col gap-3">
            <h2 class="font-bold">"Mạng xã hội"</h2>

            <Show when=move || socials.loading.get()>
                <span class="loading loading-spinner loading-sm"></span>
            </Show>

            <ul class="flex flex-col divide-y">
                <For
                    each=move || socials.items.get()
                    key=|s| s.id
                    children=move |social: Social| {
                        let id = social.id;
                        let name = social.name.clone();
                        let delete = {
                            let api = api.clone();
                            move |_| {
                                let api = api.clone();
                                let name = name.clone();
                                spawn_local(async move {
                                    let question = format!("Xoá link \"{}\"?", name);
                                    if !dialogs.confirm(&question).await {
                                        return;
                                    }
                                    match api.delete_social(id).await {
                                        Ok(()) => {
                                            notify.run("Đã xoá link.".to_string());
                                            let api = api.clone();
                                            socials.load(async move {
                                                api.fetch_socials().await
                                            });
                                        }
                                        Err(err) => notify.run(err.to_string()),
                                    }
                                });
                            }
                        };
                        view! {
                            <li class="flex items-center justify-between py-2">
                                <div class="flex flex-col">
                                    <span class="font-medium">{social.name.clone()}</span>
                                    <span class="text-xs opacity-60 break-all">
                                        {social.url.clone()}
                                    </span>
                                </div>
                                <button class="btn btn-xs btn-error btn-outline" on:click=delete>
                                    "Xoá"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            // kho icon có sẵn dưới static/img, để tham khảo khi khai báo link
            <Show when=move || !static_imgs.is_empty()>
                <div>
                    <h3 class="text-sm font-medium opacity-70 mb-1">"Icon có sẵn"</h3>
                    <div class="flex flex-wrap gap-2">
                        <For
                            each=move || static_imgs.items.get()
                            key=|name| name.clone()
                            children=move |name: String| {
                                view! { <span class="badge badge-ghost">{name}</span> }
                            }
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
