pub mod components;
pub mod config;
pub mod content;
pub mod navigation;
pub mod pages;

use components::Shell;
use leptos::*;
use leptos_router::*;
use pages::NotFoundPage;
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Se ha producido un error"</h2>
                    <p>"No se ha podido mostrar la página. Prueba a recargarla."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Recargar"</button>
                </div>
            </main>
        }>
            <Router>
                <Routes>
                    <Route path=config::route_path() view=Shell/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger unavailable: {err}").into());
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Mounting site under base path {:?}", config::base_path());
    mount_to_body(Root);
}
