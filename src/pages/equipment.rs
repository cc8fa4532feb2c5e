use crate::components::DrillDownSection;
use crate::content::{SectionId, EQUIPMENT};
use leptos::*;

#[component]
pub fn EquipmentPage(
    selected: Signal<Option<&'static str>>,
    on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <DrillDownSection
            section=SectionId::Equipment
            title="Equipamiento"
            intro="Selecciona una subsección para abrir su ventana con información completa."
            back_label="Volver a equipamiento"
            items=EQUIPMENT
            selected=selected
            on_back=on_back
        />
    }
}
