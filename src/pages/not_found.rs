use crate::config::base_path;
use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="container not-found">
            <header>
                <h1>"404"</h1>
                <p class="tagline">"Página no encontrada"</p>
            </header>

            <nav class="back-nav">
                <A href=base_path()>"< Volver al inicio"</A>
            </nav>
        </main>
    }
}
