//! Landing page with a call-to-action into the registration flow.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-header">
                <span class="home-logo">"Coleta"</span>
            </header>
            <main class="home-hero">
                <h1>"Seu marketplace de coleta de resíduos."</h1>
                <p>"Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."</p>
                <A href="/create-point">
                    <strong>"Cadastre um ponto de coleta"</strong>
                </A>
            </main>
        </div>
    }
}
