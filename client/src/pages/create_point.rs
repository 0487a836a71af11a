//! Collection point registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The one non-trivial screen in the app: it loads two independent reference
//! datasets (items, states) on mount, keeps the city list keyed to the
//! selected UF, records the last map click as the point's location, and
//! submits exactly one `NewPoint` when the form is complete.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::{Item, NewPoint};

use crate::components::item_grid::ItemGrid;
use crate::components::location_map::LocationMap;
use crate::state::geo::GeoState;
use crate::state::registration::RegistrationState;

#[cfg(test)]
#[path = "create_point_test.rs"]
mod tests;

#[component]
pub fn CreatePointPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let whatsapp = RwSignal::new(String::new());
    let items = RwSignal::new(Vec::<Item>::new());
    let registration = RwSignal::new(RegistrationState::default());
    let geo = RwSignal::new(GeoState::default());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let submitted = RwSignal::new(false);
    let navigate = use_navigate();

    // Items and states are independent fetches with no ordering between them.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_items().await {
                Ok(list) => items.set(list),
                Err(e) => message.set(format!("Não foi possível carregar os ítens: {e}")),
            }
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_states().await {
                Ok(list) => geo.update(|g| g.states = list),
                Err(e) => message.set(format!("Não foi possível carregar as UFs: {e}")),
            }
        });
    }

    let on_select_uf = move |ev: leptos::ev::Event| {
        let uf = event_target_value(&ev);
        registration.update(|reg| reg.select_uf(uf.clone()));

        if uf.is_empty() {
            geo.update(|g| {
                g.cities.clear();
                g.pending_uf = None;
                g.loading_cities = false;
            });
            return;
        }

        geo.update(|g| g.begin_cities_fetch(&uf));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_cities(&uf).await;
            geo.update(|g| g.finish_cities_fetch(&uf, result));
        });
    };

    let on_select_city = move |ev: leptos::ev::Event| {
        registration.update(|reg| reg.select_city(event_target_value(&ev)));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let payload = match build_submission(&name.get(), &email.get(), &whatsapp.get(), &registration.get()) {
            Ok(payload) => payload,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };

        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_point(&payload).await {
                    Ok(_) => {
                        submitted.set(true);
                        busy.set(false);
                        // Let the confirmation register before leaving the page.
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        message.set(format!("Não foi possível cadastrar: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            let _ = &navigate;
            busy.set(false);
        }
    };

    view! {
        <div class="create-point-page">
            <header class="create-point-header">
                <span class="home-logo">"Coleta"</span>
                <A href="/">"Voltar para home"</A>
            </header>

            <form class="create-point-form" on:submit=on_submit>
                <h1>"Cadastro do ponto de coleta"</h1>

                <fieldset>
                    <legend>
                        <h2>"Dados"</h2>
                    </legend>
                    <div class="field">
                        <label for="name">"Nome da entidade"</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field-group">
                        <div class="field">
                            <label for="email">"E-mail"</label>
                            <input
                                type="email"
                                id="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="field">
                            <label for="whatsapp">"Whatsapp"</label>
                            <input
                                type="text"
                                id="whatsapp"
                                prop:value=move || whatsapp.get()
                                on:input=move |ev| whatsapp.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Endereço"</h2>
                        <span>"Selecione o endereço no mapa"</span>
                    </legend>

                    <LocationMap registration=registration/>

                    <div class="field-group">
                        <div class="field">
                            <label for="uf">"UF"</label>
                            <select id="uf" prop:value=move || registration.get().uf on:change=on_select_uf>
                                <option value="">"Selecione uma UF"</option>
                                <For
                                    each=move || geo.get().states
                                    key=|state| state.uf.clone()
                                    children=|state| {
                                        let label = format!("{} - {}", state.name, state.uf);
                                        view! { <option value=state.uf.clone()>{label}</option> }
                                    }
                                />
                            </select>
                        </div>
                        <div class="field">
                            <label for="city">"Cidade"</label>
                            <select
                                id="city"
                                prop:value=move || registration.get().city
                                on:change=on_select_city
                                disabled=move || geo.get().cities.is_empty()
                            >
                                <option value="">
                                    {move || {
                                        if geo.get().loading_cities {
                                            "Carregando cidades..."
                                        } else {
                                            "Selecione uma cidade"
                                        }
                                    }}
                                </option>
                                <For
                                    each=move || geo.get().cities
                                    key=|city| city.name.clone()
                                    children=|city| {
                                        view! { <option value=city.name.clone()>{city.name.clone()}</option> }
                                    }
                                />
                            </select>
                        </div>
                    </div>

                    <Show when=move || cities_failure_message(&geo.get()).is_some()>
                        <p class="form-message">
                            {move || cities_failure_message(&geo.get()).unwrap_or_default()}
                        </p>
                    </Show>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Ítens de coleta"</h2>
                        <span>"Selecione um ou mais ítens abaixo"</span>
                    </legend>
                    <ItemGrid items=items registration=registration/>
                </fieldset>

                <Show when=move || !message.get().is_empty()>
                    <p class="form-message">{move || message.get()}</p>
                </Show>

                <button type="submit" disabled=move || busy.get()>
                    "Cadastrar ponto de coleta"
                </button>
            </form>

            <Show when=move || submitted.get()>
                <div class="success-overlay">
                    <h2>"Cadastro concluído!"</h2>
                    <A href="/">"Voltar para home"</A>
                </div>
            </Show>
        </div>
    }
}

/// Notice rendered under the address selects when the city fetch failed; the
/// city select stays disabled in that case, so the failure must be spelled
/// out next to it.
pub(crate) fn cities_failure_message(geo: &GeoState) -> Option<String> {
    geo.error
        .as_ref()
        .map(|error| format!("Não foi possível carregar as cidades: {error}"))
}

/// Assemble the submission payload from the current form state, or name the
/// first missing field. Exactly one `NewPoint` is built per successful call.
pub(crate) fn build_submission(
    name: &str,
    email: &str,
    whatsapp: &str,
    registration: &RegistrationState,
) -> Result<NewPoint, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Informe o nome da entidade.");
    }

    let email = email.trim();
    let email_parts = email.split('@').collect::<Vec<_>>();
    if email_parts.len() != 2 || email_parts[0].is_empty() || email_parts[1].is_empty() {
        return Err("Informe um e-mail válido.");
    }

    let whatsapp = whatsapp.trim();
    if whatsapp.is_empty() {
        return Err("Informe o WhatsApp.");
    }

    let Some((latitude, longitude)) = registration.position else {
        return Err("Selecione o endereço no mapa.");
    };
    if registration.uf.is_empty() {
        return Err("Selecione uma UF.");
    }
    if registration.city.is_empty() {
        return Err("Selecione uma cidade.");
    }
    if registration.selected_items.is_empty() {
        return Err("Selecione pelo menos um ítem de coleta.");
    }

    Ok(NewPoint {
        name: name.to_owned(),
        email: email.to_owned(),
        whatsapp: whatsapp.to_owned(),
        latitude,
        longitude,
        city: registration.city.clone(),
        uf: registration.uf.clone(),
        items: registration.selected_items.clone(),
    })
}
