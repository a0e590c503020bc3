//! Item Card Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use closet_core::Item;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_start_edit, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = item.id.clone();
    let image_url = item.image_path.as_deref().map(|path| ctx.public_url(path));
    let created = item.created_at.get(..10).unwrap_or(&item.created_at).to_string();
    let summary = item.summary();
    let name = item.name.clone();
    let alt = item.name.clone();

    let is_editing = {
        let id = id.clone();
        move || store.closet().read().form.editing.as_ref() == Some(&id)
    };
    let busy = Signal::derive(move || store.closet().read().is_loading());

    let on_delete = {
        let id = id.clone();
        move |_: ()| {
            let ctx = ctx.clone();
            let id = id.clone();
            spawn_local(async move {
                commands::delete_item(&ctx, store, id).await;
            });
        }
    };

    view! {
        <article class=move || if is_editing() { "item-card editing" } else { "item-card" }>
            {match image_url {
                Some(url) => view! { <img class="item-photo" src=url alt=alt /> }.into_any(),
                None => view! { <div class="item-photo placeholder">"🗂️"</div> }.into_any(),
            }}
            <div class="item-body">
                <h3>{name}</h3>
                <p class="item-summary">{summary}</p>
                <time class="item-created">{created}</time>
            </div>
            <div class="item-actions">
                <button
                    type="button"
                    class="card-btn"
                    on:click=move |_| store_start_edit(&store, &item)
                >
                    "Düzenle"
                </button>
                <DeleteConfirmButton on_confirm=on_delete disabled=busy />
            </div>
        </article>
    }
}
