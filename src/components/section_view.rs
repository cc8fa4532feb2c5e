use crate::content::SectionId;
use crate::pages::{
    ActivitiesPage, ClosurePage, DocumentationPage, EquipmentPage, IntroductionPage,
    MaterialPage, ProceduresPage, ProtocolsPage, ReferencesPage, SummaryPage,
};
use leptos::*;

/// Build the content view for a section.
///
/// Drill-down sections receive the shell's sub-section selection and the
/// callback that clears it.
pub fn render_section(
    section: SectionId,
    selected: Signal<Option<&'static str>>,
    on_back: Callback<()>,
) -> View {
    match section {
        SectionId::Introduction => view! { <IntroductionPage/> }.into_view(),
        SectionId::Equipment => view! { <EquipmentPage selected=selected on_back=on_back/> }.into_view(),
        SectionId::Material => view! { <MaterialPage selected=selected on_back=on_back/> }.into_view(),
        SectionId::Protocols => view! { <ProtocolsPage selected=selected on_back=on_back/> }.into_view(),
        SectionId::Activities => view! { <ActivitiesPage selected=selected on_back=on_back/> }.into_view(),
        SectionId::Procedures => view! { <ProceduresPage selected=selected on_back=on_back/> }.into_view(),
        SectionId::Documentation => {
            view! { <DocumentationPage selected=selected on_back=on_back/> }.into_view()
        }
        SectionId::Closure => view! { <ClosurePage/> }.into_view(),
        SectionId::Summary => view! { <SummaryPage selected=selected on_back=on_back/> }.into_view(),
        SectionId::References => view! { <ReferencesPage/> }.into_view(),
    }
}

/// Re-renders only when the active section changes; sub-section changes
/// flow through `selected` into the mounted section.
#[component]
pub fn SectionView(
    section: Memo<SectionId>,
    selected: Signal<Option<&'static str>>,
    on_back: Callback<()>,
) -> impl IntoView {
    move || {
        let section = section.get();
        log::debug!("Rendering section {}", section.as_str());
        render_section(section, selected, on_back)
    }
}
