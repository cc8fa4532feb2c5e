use crate::components::IconView;
use crate::content::Icon;
use leptos::*;

const GUARANTEES: &[&str] = &[
    "La precisión diagnóstica y la fiabilidad de los resultados clínicos",
    "La protección radiológica óptima para pacientes y trabajadores",
    "La vida útil prolongada de equipos de alto coste",
    "El cumplimiento de la normativa vigente en radioprotección",
];

#[component]
pub fn ClosurePage() -> impl IntoView {
    view! {
        <section class="content-section narrow" id="cierre">
            <div class="panel highlight green">
                <div class="panel-title-row">
                    <div class="badge-icon green">
                        <IconView icon=Icon::CircleCheck/>
                    </div>
                    <h2>"Cierre de la instalación"</h2>
                </div>

                <div class="prose">
                    <p>
                        "El mantenimiento adecuado en medicina nuclear no es solo una obligación reglamentaria, "
                        "sino un compromiso fundamental con la excelencia en la atención sanitaria y la seguridad "
                        "de todos los involucrados en los procedimientos diagnósticos y terapéuticos."
                    </p>
                    <p>
                        "La implementación rigurosa de los protocolos de mantenimiento preventivo, junto con "
                        "un programa exhaustivo de control de calidad, garantiza:"
                    </p>
                    <ul class="bullet-list">
                        {GUARANTEES.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                    <p>
                        "La inversión en mantenimiento es una inversión en calidad asistencial, seguridad "
                        "y sostenibilidad del servicio de medicina nuclear."
                    </p>
                </div>
            </div>
        </section>
    }
}
