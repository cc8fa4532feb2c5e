use crate::components::DrillDownSection;
use crate::content::{SectionId, KEY_POINTS, SUMMARY};
use leptos::*;

#[component]
pub fn SummaryPage(
    selected: Signal<Option<&'static str>>,
    on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <DrillDownSection
            section=SectionId::Summary
            title="Resumen y Conclusiones"
            intro="Síntesis del programa de mantenimiento y conclusiones principales."
            back_label="Volver a resumen y conclusiones"
            items=SUMMARY
            selected=selected
            on_back=on_back
        >
            <div class="callout info">
                <h3>"Puntos Clave"</h3>
                <ul class="bullet-list">
                    {KEY_POINTS.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                </ul>
            </div>
        </DrillDownSection>
    }
}
