use crate::components::IconView;
use crate::config::HOVER_CLOSE_DELAY;
use crate::content::{menu_item, Icon, SectionId, MENU};
use crate::navigation::{AnchorRect, ShellState};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

fn anchor_rect(ev: &ev::MouseEvent) -> AnchorRect {
    let element: web_sys::Element = event_target(ev);
    let rect = element.get_bounding_client_rect();
    AnchorRect {
        left: rect.left(),
        bottom: rect.bottom(),
    }
}

/// Horizontal section bar with the hover-intent popup of sub-sections.
#[component]
pub fn NavMenu(state: RwSignal<ShellState>) -> impl IntoView {
    let active = create_memo(move |_| state.with(|s| s.active_section()));
    let hovered = create_memo(move |_| state.with(|s| s.hover.hovered()));
    let popup = create_memo(move |_| {
        state.with(|s| s.hover.visible_popup().map(|section| (section, s.hover.position())))
    });

    // Handle of the pending hide timer, cleared on any re-entry
    let hide_timer = store_value(None::<TimeoutHandle>);

    let cancel_hide = move || {
        if let Some(handle) = hide_timer.get_value() {
            handle.clear();
        }
        hide_timer.set_value(None);
    };

    let schedule_hide = move || {
        cancel_hide();
        let Some(ticket) = state.try_update(|s| s.hover_leave()) else {
            return;
        };
        let expire = move || {
            state.update(|s| {
                if s.hover.expire(ticket) {
                    log::debug!("Navigation popup hidden");
                }
            });
        };
        match set_timeout_with_handle(expire, HOVER_CLOSE_DELAY) {
            Ok(handle) => hide_timer.set_value(Some(handle)),
            Err(err) => {
                log::warn!("Could not schedule popup hide, hiding now: {:?}", err);
                state.update(|s| s.hover.dismiss());
            }
        }
    };

    let select_sub_item = move |section: SectionId, sub_item: &'static str| {
        cancel_hide();
        log::debug!("Popup selection {} > {}", section.as_str(), sub_item);
        state.update(|s| s.select_from_popup(section, sub_item));
    };

    view! {
        <div class="nav-bar">
            <div class="nav-bar-inner">
                <button
                    type="button"
                    class="glow-button menu-toggle"
                    aria-label="Abrir menú"
                    on:click=move |_| state.update(|s| s.sidebar.toggle())
                >
                    <IconView icon=Icon::Menu/>
                </button>

                <nav class="nav-links">
                    {MENU
                        .iter()
                        .map(|item| {
                            let section = item.id;
                            view! {
                                <div
                                    class="nav-item"
                                    on:mouseenter=move |ev| {
                                        cancel_hide();
                                        let anchor = anchor_rect(&ev);
                                        state.update(|s| s.hover_enter(section, anchor));
                                    }
                                    on:mouseleave=move |_| schedule_hide()
                                >
                                    <button
                                        type="button"
                                        class="nav-link"
                                        class:active=move || active.get() == section
                                        on:click=move |_| state.update(|s| s.select_section(section, None))
                                    >
                                        {item.nav_label()}
                                        {item.has_sub_items().then(|| view! {
                                            <span
                                                class="nav-chevron"
                                                class:rotated=move || hovered.get() == Some(section)
                                            >
                                                <IconView icon=Icon::ChevronDown/>
                                            </span>
                                        })}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </div>

        {move || {
            popup.get().map(|(section, position)| {
                let item = menu_item(section);
                view! {
                    <div
                        class="nav-popup"
                        style:top=format!("{}px", position.top)
                        style:left=format!("{}px", position.left)
                        on:mouseenter=move |_| {
                            cancel_hide();
                            state.update(|s| s.hover.enter_popup());
                        }
                        on:mouseleave=move |_| schedule_hide()
                    >
                        <div class="nav-popup-header">{item.label}</div>
                        {item
                            .sub_items
                            .iter()
                            .map(|sub| {
                                let sub_id = sub.id;
                                view! {
                                    <button
                                        type="button"
                                        class="nav-popup-item"
                                        on:click=move |_| select_sub_item(section, sub_id)
                                    >
                                        <span class="dot"></span>
                                        {sub.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })
        }}
    }
}
