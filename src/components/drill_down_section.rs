use crate::components::{IconView, ImageWithFallback};
use crate::content::{ContentItem, Icon, SectionId};
use crate::navigation::{DrillDown, DrillDownView};
use leptos::*;

/// Overview grid of sub-topic cards with a detail view per card.
///
/// `selected` carries the sub-section chosen in the navigation shell; every
/// change is re-validated against `items`. Going back calls `on_back` so the
/// shell can drop its selection too.
#[component]
pub fn DrillDownSection(
    section: SectionId,
    title: &'static str,
    intro: &'static str,
    back_label: &'static str,
    items: &'static [ContentItem],
    selected: Signal<Option<&'static str>>,
    on_back: Callback<()>,
    /// Extra overview content rendered below the card grid.
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let controller = create_rw_signal(DrillDown::with_selection(items, selected.get_untracked()));

    create_effect(move |_| {
        let selected = selected.get();
        controller.update(|c| c.sync_external(selected));
    });

    let current_view = create_memo(move |_| controller.with(|c| c.view()));

    let open = move |id: &'static str| {
        log::debug!("{}: opening {}", section.as_str(), id);
        controller.update(|c| c.open(id));
    };

    let back = move |_: ()| {
        controller.update(|c| {
            if let Some(item) = c.selected() {
                log::debug!("{}: closing {}", section.as_str(), item.id);
            }
            c.back();
        });
        on_back.call(());
    };

    move || match current_view.get() {
        DrillDownView::Overview => view! {
            <section class="content-section" id=section.as_str()>
                <div class="panel">
                    <div class="panel-header">
                        <h2>{title}</h2>
                        <p class="panel-intro">{intro}</p>
                    </div>
                    <div class="card-grid">
                        {items
                            .iter()
                            .map(|item| view! { <ContentCard item=item on_open=open/> })
                            .collect_view()}
                    </div>
                    {children.as_ref().map(|children| children())}
                </div>
            </section>
        }
        .into_view(),
        DrillDownView::Detail(item) => view! {
            <DetailView item=item back_label=back_label on_back=back/>
        }
        .into_view(),
    }
}

/// Card in the overview grid. Activates on click, Enter or Space.
#[component]
fn ContentCard(
    item: &'static ContentItem,
    #[prop(into)] on_open: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <article
            class="content-card"
            role="button"
            tabindex="0"
            on:click=move |_| on_open.call(item.id)
            on:keydown=move |ev: ev::KeyboardEvent| {
                if matches!(ev.key().as_str(), "Enter" | " ") {
                    ev.prevent_default();
                    on_open.call(item.id);
                }
            }
        >
            <div class="card-image">
                <ImageWithFallback src=item.image.url() alt=item.title/>
            </div>
            <div class="card-body">
                <div class="card-icon">
                    <IconView icon=item.icon/>
                </div>
                <h3>{item.title}</h3>
                <p>{item.summary}</p>
            </div>
        </article>
    }
}

#[component]
fn DetailView(
    item: &'static ContentItem,
    back_label: &'static str,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="content-section detail" id=item.id>
            <div class="panel">
                <button type="button" class="back-link" on:click=move |_| on_back.call(())>
                    <IconView icon=Icon::ArrowLeft/>
                    {back_label}
                </button>

                <div class="panel-header">
                    <h2>{item.title}</h2>
                    <p class="panel-intro">"Información detallada de la subsección seleccionada."</p>
                </div>

                <div class="detail-image">
                    <ImageWithFallback src=item.image.url() alt=item.title/>
                </div>

                <div class="detail-body">
                    {item.details.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
