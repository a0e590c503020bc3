//! Item Grid Component
//!
//! Card grid over the visible list (filtered, searched and sorted).

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemGrid() -> impl IntoView {
    let store = use_app_store();
    let visible = move || store.closet().read().visible();
    let nothing_shown = move || {
        let closet = store.closet().read();
        !closet.is_loading() && closet.visible().is_empty()
    };
    let empty_message = move || {
        if store.closet().read().is_empty() {
            "Henüz parça yok."
        } else {
            "Filtreye uyan parça yok."
        }
    };

    view! {
        <section class="item-grid">
            <Show when=nothing_shown>
                <p class="empty">{empty_message}</p>
            </Show>
            <For
                each=visible
                key=|item| {
                    // Every editable field, so an edit re-renders its card
                    (
                        item.id.clone(),
                        item.name.clone(),
                        item.category.clone(),
                        item.color.clone(),
                        item.size.clone(),
                        item.image_path.clone(),
                    )
                }
                children=move |item| view! { <ItemCard item=item /> }
            />
        </section>
    }
}
