//! Filter Bar Component
//!
//! Search box plus one chip row per facet. Chips list the fixed vocabulary
//! followed by any other values present in the loaded items.

use leptos::prelude::*;

use closet_core::Facet;

use crate::store::{store_toggle_facet, use_app_store, AppStateStoreFields};

const FACETS: [(Facet, &str); 3] = [
    (Facet::Category, "Kategori"),
    (Facet::Color, "Renk"),
    (Facet::Size, "Beden"),
];

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    let query = move || store.closet().read().filter.query.clone();
    let unrestricted = move || store.closet().read().filter.is_unrestricted();

    view! {
        <section class="filter-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Ara…"
                prop:value=query
                on:input=move |ev| store.closet().write().filter.set_query(event_target_value(&ev))
            />
            {FACETS.iter().map(|(facet, label)| {
                let facet = *facet;
                view! { <FacetChips facet=facet label=*label /> }
            }).collect_view()}
            <Show when=move || !unrestricted()>
                <button
                    type="button"
                    class="clear-filters"
                    on:click=move |_| store.closet().write().filter.clear()
                >
                    "Filtreleri temizle"
                </button>
            </Show>
        </section>
    }
}

#[component]
fn FacetChips(facet: Facet, label: &'static str) -> impl IntoView {
    let store = use_app_store();
    let values = move || store.closet().read().facet_values(facet);

    view! {
        <div class="chip-row">
            <span class="chip-label">{label}</span>
            {move || values().into_iter().map(|value| {
                let selected = {
                    let value = value.clone();
                    move || store.closet().read().filter.is_selected(facet, &value)
                };
                let toggled = value.clone();
                view! {
                    <button
                        type="button"
                        class=move || if selected() { "chip active" } else { "chip" }
                        on:click=move |_| store_toggle_facet(&store, facet, &toggled)
                    >
                        {value}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
