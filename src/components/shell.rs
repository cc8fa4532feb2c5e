use crate::components::{Footer, ImageWithFallback, NavMenu, SectionView, Sidebar, TopBar};
use crate::content::HERO_IMAGE;
use crate::navigation::ShellState;
use leptos::*;

/// Fragment of the current URL without the leading `#`, if any.
fn location_hash() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let id = hash.trim_start_matches('#');
    (!id.is_empty()).then(|| id.to_string())
}

/// Page chrome plus the active section. Owns all navigation state.
#[component]
pub fn Shell() -> impl IntoView {
    let state = create_rw_signal(ShellState::default());

    let follow_hash = move || {
        if let Some(id) = location_hash() {
            log::debug!("Following link #{}", id);
            state.update(|s| s.open_link(&id));
        }
    };
    follow_hash();
    let hash_listener = window_event_listener(ev::hashchange, move |_| follow_hash());
    on_cleanup(move || hash_listener.remove());

    let dark_mode = create_memo(move |_| state.with(|s| s.dark_mode()));
    let active_section = create_memo(move |_| state.with(|s| s.active_section()));
    let selected = create_memo(move |_| state.with(|s| s.active_sub_item()));

    let on_back = Callback::new(move |_: ()| state.update(|s| s.clear_sub_item()));

    view! {
        <div class="app" class:dark=move || dark_mode.get()>
            <div class="hero-background">
                <ImageWithFallback src=HERO_IMAGE.url() alt="Medicina Nuclear" class="hero-image"/>
                <div class="hero-overlay"></div>
            </div>

            <header class="site-header">
                <TopBar state=state/>
                <NavMenu state=state/>
            </header>

            <Sidebar state=state/>

            <main class="site-main">
                <div class="container">
                    <SectionView section=active_section selected=selected.into() on_back=on_back/>
                </div>
            </main>

            <Footer/>
        </div>
    }
}
