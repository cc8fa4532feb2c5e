use crate::components::{DrillDownSection, IconView};
use crate::content::{SectionId, PROTOCOLS, PROTOCOL_CHECKLISTS};
use leptos::*;

#[component]
pub fn ProtocolsPage(
    selected: Signal<Option<&'static str>>,
    on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <DrillDownSection
            section=SectionId::Protocols
            title="Protocolos de Puesta en Marcha"
            intro="Protocolos estandarizados de mantenimiento, control de calidad y seguridad"
            back_label="Volver a protocolos"
            items=PROTOCOLS
            selected=selected
            on_back=on_back
        >
            <div class="info-grid two-columns">
                {PROTOCOL_CHECKLISTS
                    .iter()
                    .map(|checklist| view! {
                        <div class="info-card stacked">
                            <div class="info-card-head">
                                <div class=format!("info-card-icon accent-{}", checklist.accent)>
                                    <IconView icon=checklist.icon/>
                                </div>
                                <div>
                                    <h3>{checklist.title}</h3>
                                    <p>{checklist.description}</p>
                                </div>
                            </div>
                            <ul class="bullet-list indented">
                                {checklist.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
        </DrillDownSection>
    }
}
