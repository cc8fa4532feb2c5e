use crate::components::IconView;
use crate::content::{Icon, LANGUAGES};
use crate::navigation::{SearchPanel, ShellState};
use leptos::*;

const SOCIAL_ICONS: [(Icon, &str); 4] = [
    (Icon::Instagram, "Instagram"),
    (Icon::X, "X"),
    (Icon::Youtube, "YouTube"),
    (Icon::Linkedin, "LinkedIn"),
];

/// Social links, site title, search, language selector and theme toggle.
#[component]
pub fn TopBar(state: RwSignal<ShellState>) -> impl IntoView {
    let dark_mode = create_memo(move |_| state.with(|s| s.dark_mode()));

    view! {
        <div class="top-bar">
            <div class="top-bar-inner">
                <div class="social-links">
                    {SOCIAL_ICONS
                        .iter()
                        .map(|(icon, label)| view! {
                            <button type="button" class="glow-button" aria-label=*label>
                                <IconView icon=*icon/>
                            </button>
                        })
                        .collect_view()}
                </div>

                <h1 class="site-title">"Medicina Nuclear - Mantenimiento de Equipos"</h1>

                <div class="top-bar-controls">
                    <SearchBox state=state/>
                    <LanguageSelector state=state/>
                    <button
                        type="button"
                        class="theme-toggle"
                        aria-label="Cambiar tema"
                        on:click=move |_| state.update(|s| s.toggle_dark_mode())
                    >
                        {move || {
                            let icon = if dark_mode.get() { Icon::Sun } else { Icon::Moon };
                            view! { <IconView icon=icon/> }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SearchBox(state: RwSignal<ShellState>) -> impl IntoView {
    let query = create_memo(move |_| state.with(|s| s.search.query().to_string()));
    let panel = create_memo(move |_| state.with(|s| s.search.panel().clone()));

    view! {
        <div class="search">
            <input
                type="text"
                class="search-input"
                placeholder="Buscar..."
                prop:value=move || query.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.update_search(&value));
                }
            />
            <IconView icon=Icon::Search class="search-icon"/>
            {move || match panel.get() {
                SearchPanel::Hidden => ().into_view(),
                SearchPanel::NoResults => view! {
                    <div class="search-dropdown empty">
                        <p>"No se encontraron resultados"</p>
                    </div>
                }
                .into_view(),
                SearchPanel::Results(results) => view! {
                    <div class="search-dropdown">
                        {results
                            .into_iter()
                            .map(|result| view! { <div class="search-result">{result}</div> })
                            .collect_view()}
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}

/// Stores the chosen language label; content stays in Spanish.
#[component]
fn LanguageSelector(state: RwSignal<ShellState>) -> impl IntoView {
    let menu_open = create_memo(move |_| state.with(|s| s.language_menu_open()));
    let selected = create_memo(move |_| state.with(|s| s.language()));

    view! {
        <div class="language-selector">
            <button
                type="button"
                class="glow-button"
                aria-label="Idioma"
                on:click=move |_| state.update(|s| s.toggle_language_menu())
            >
                <IconView icon=Icon::Languages/>
            </button>
            <Show when=move || menu_open.get()>
                <div class="language-menu">
                    {LANGUAGES
                        .iter()
                        .map(|&language| view! {
                            <button
                                type="button"
                                class="language-option"
                                class:selected=move || selected.get() == language
                                on:click=move |_| {
                                    log::debug!("Language label set to {}", language);
                                    state.update(|s| s.select_language(language));
                                }
                            >
                                {language}
                            </button>
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
