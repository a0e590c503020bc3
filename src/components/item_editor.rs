//! Item Editor Component
//!
//! Collapsible add/edit form. The same form creates new items and edits the
//! one selected from a card.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use closet_core::{CATEGORIES, COLORS, SIZES};

use crate::commands;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemEditor() -> impl IntoView {
    let ctx = StoredValue::new(use_app_context());
    let store = use_app_store();

    let (saving, set_saving) = signal(false);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let is_open = move || store.closet().read().form.open;
    let is_editing = move || store.closet().read().form.is_editing();
    let editing_has_photo = move || {
        let closet = store.closet().read();
        closet
            .form
            .editing
            .as_ref()
            .and_then(|id| closet.find(id))
            .is_some_and(|item| item.has_photo())
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let ctx = ctx.get_value();
        set_saving.set(true);

        spawn_local(async move {
            let photo = match file {
                Some(file) => match commands::read_photo(file).await {
                    Ok(photo) => Some(photo),
                    Err(msg) => {
                        store.closet().write().set_error(msg);
                        set_saving.set(false);
                        return;
                    }
                },
                None => None,
            };
            if commands::submit_form(&ctx, store, photo).await {
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <Show when=is_open>
            <form class="item-editor" on:submit=on_submit>
                <h2>{move || if is_editing() { "Parçayı düzenle" } else { "Yeni parça" }}</h2>
                <input
                    type="text"
                    class="name-input"
                    placeholder="İsim (örn: Mavi gömlek)"
                    prop:value=move || store.closet().read().form.name.clone()
                    on:input=move |ev| store.closet().write().form.name = event_target_value(&ev)
                />
                <FieldSelect
                    label="Kategori"
                    options=CATEGORIES
                    value=Signal::derive(move || store.closet().read().form.category.clone())
                    on_change=Callback::new(move |v: String| store.closet().write().form.category = v)
                />
                <FieldSelect
                    label="Renk"
                    options=COLORS
                    value=Signal::derive(move || store.closet().read().form.color.clone())
                    on_change=Callback::new(move |v: String| store.closet().write().form.color = v)
                />
                <FieldSelect
                    label="Beden"
                    options=SIZES
                    value=Signal::derive(move || store.closet().read().form.size.clone())
                    on_change=Callback::new(move |v: String| store.closet().write().form.size = v)
                />
                <label class="field">
                    <span>"Fotoğraf"</span>
                    <input type="file" accept="image/*" node_ref=file_input />
                </label>
                <Show when=editing_has_photo>
                    <label class="field inline">
                        <input
                            type="checkbox"
                            prop:checked=move || store.closet().read().form.remove_photo
                            on:change=move |ev| store.closet().write().form.remove_photo = event_target_checked(&ev)
                        />
                        <span>"Fotoğrafı kaldır"</span>
                    </label>
                </Show>
                <div class="form-actions">
                    <button type="submit" disabled=move || saving.get()>
                        {move || match (saving.get(), is_editing()) {
                            (true, _) => "Kaydediliyor…",
                            (false, true) => "Kaydet",
                            (false, false) => "Ekle",
                        }}
                    </button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| store.closet().write().form.reset()
                    >
                        "Vazgeç"
                    </button>
                </div>
            </form>
        </Show>
    }
}

/// Labelled select over a fixed vocabulary
#[component]
fn FieldSelect(
    label: &'static str,
    options: &'static [&'static str],
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <select on:change=move |ev| on_change.run(event_target_value(&ev))>
                {options.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option value=option selected=move || value.get() == option>
                            {option}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
