use crate::components::{DrillDownSection, IconView, ImageWithFallback};
use crate::content::{SectionId, MATERIAL, MATERIAL_CARDS, SUPPLIES_IMAGE};
use leptos::*;

#[component]
pub fn MaterialPage(
    selected: Signal<Option<&'static str>>,
    on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <DrillDownSection
            section=SectionId::Material
            title="Material"
            intro="Material especializado de la sala de exploración que requiere control y mantenimiento"
            back_label="Volver a material"
            items=MATERIAL
            selected=selected
            on_back=on_back
        >
            <div class="banner-image">
                <ImageWithFallback src=SUPPLIES_IMAGE.url() alt="Material médico"/>
            </div>
            <div class="info-grid two-columns">
                {MATERIAL_CARDS
                    .iter()
                    .map(|card| view! {
                        <div class="info-card">
                            <div class="info-card-icon accent-green">
                                <IconView icon=card.icon/>
                            </div>
                            <div>
                                <h3>{card.title}</h3>
                                <p>{card.description}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </DrillDownSection>
    }
}
