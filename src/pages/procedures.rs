use crate::components::{DrillDownSection, IconView};
use crate::content::{Icon, SectionId, MAINTENANCE_STEPS, PROCEDURES};
use leptos::*;

#[component]
pub fn ProceduresPage(
    selected: Signal<Option<&'static str>>,
    on_back: Callback<()>,
) -> impl IntoView {
    let last = MAINTENANCE_STEPS.len() - 1;

    view! {
        <DrillDownSection
            section=SectionId::Procedures
            title="Protocolos de Protección Radiológica"
            intro="Vigilancia radiológica, gestión de residuos y secuencia detallada de pasos para la ejecución del mantenimiento"
            back_label="Volver a protección radiológica"
            items=PROCEDURES
            selected=selected
            on_back=on_back
        >
            <h3 class="subheading">"Procedimiento de mantenimiento"</h3>
            <ol class="step-list">
                {MAINTENANCE_STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, step)| view! {
                        <li class="step" class:last=index == last>
                            <div class="step-marker">
                                <span class="step-number">{index + 1}</span>
                                <span class="step-line"></span>
                            </div>
                            <div class="step-body">
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        </li>
                    })
                    .collect_view()}
            </ol>

            <div class="callout success">
                <IconView icon=Icon::CircleCheck/>
                <div>
                    <h4>"Importante"</h4>
                    <p>
                        "Todos los procedimientos deben ser realizados por personal técnico cualificado y autorizado. "
                        "En caso de detectar anomalías graves, suspender el uso del equipo y contactar con el servicio "
                        "técnico oficial."
                    </p>
                </div>
            </div>
        </DrillDownSection>
    }
}
