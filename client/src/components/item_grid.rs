//! Selectable grid of collectible item categories.

use leptos::prelude::*;
use shared::Item;

use crate::state::registration::RegistrationState;

/// Grid of item cards. Clicking a card toggles its id in the selection set.
#[component]
pub fn ItemGrid(#[prop(into)] items: Signal<Vec<Item>>, registration: RwSignal<RegistrationState>) -> impl IntoView {
    view! {
        <ul class="items-grid">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item: Item| {
                    let id = item.id;
                    view! {
                        <li
                            class:selected=move || registration.get().has_item(id)
                            on:click=move |_| registration.update(|reg| reg.toggle_item(id))
                        >
                            <img src=item.image_url.clone() alt=item.title.clone()/>
                            <span>{item.title.clone()}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
