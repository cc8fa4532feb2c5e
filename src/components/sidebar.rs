use crate::components::IconView;
use crate::content::{Icon, MENU};
use crate::navigation::ShellState;
use leptos::*;

#[component]
pub fn Sidebar(state: RwSignal<ShellState>) -> impl IntoView {
    let is_open = create_memo(move |_| state.with(|s| s.sidebar.is_open()));
    let expanded = create_memo(move |_| state.with(|s| s.sidebar.expanded()));
    let active = create_memo(move |_| state.with(|s| s.active_section()));

    view! {
        <Show when=move || is_open.get()>
            <div class="sidebar-overlay" on:click=move |_| state.update(|s| s.sidebar.close())></div>
            <aside class="sidebar">
                <div class="sidebar-header">
                    <h2>"Menú"</h2>
                    <button
                        type="button"
                        class="sidebar-close"
                        aria-label="Cerrar menú"
                        on:click=move |_| state.update(|s| s.sidebar.close())
                    >
                        <IconView icon=Icon::X/>
                    </button>
                </div>

                <nav class="sidebar-nav">
                    {MENU
                        .iter()
                        .map(|item| {
                            let section = item.id;
                            view! {
                                <div class="sidebar-entry">
                                    <div class="sidebar-row">
                                        <button
                                            type="button"
                                            class="sidebar-link"
                                            class:active=move || active.get() == section
                                            on:click=move |_| state.update(|s| s.select_section(section, None))
                                        >
                                            {item.label}
                                        </button>
                                        {item.has_sub_items().then(|| view! {
                                            <button
                                                type="button"
                                                class="sidebar-expand"
                                                on:click=move |_| state.update(|s| s.sidebar.toggle_expanded(section))
                                            >
                                                {move || {
                                                    let icon = if expanded.get() == Some(section) {
                                                        Icon::ChevronUp
                                                    } else {
                                                        Icon::ChevronDown
                                                    };
                                                    view! { <IconView icon=icon/> }
                                                }}
                                            </button>
                                        })}
                                    </div>
                                    <Show when=move || expanded.get() == Some(section)>
                                        <div class="sidebar-sub-items">
                                            {item
                                                .sub_items
                                                .iter()
                                                .map(|sub| {
                                                    let sub_id = sub.id;
                                                    view! {
                                                        <button
                                                            type="button"
                                                            class="sidebar-sub-link"
                                                            on:click=move |_| {
                                                                state.update(|s| s.select_section(section, Some(sub_id)))
                                                            }
                                                        >
                                                            {sub.label}
                                                        </button>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>
        </Show>
    }
}
