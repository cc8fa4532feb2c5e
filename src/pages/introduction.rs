use crate::components::ImageWithFallback;
use crate::config::asset_url;
use leptos::*;

#[component]
fn ExternalLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer" class="external-link">
            <i>{" "}{label}</i>
        </a>
    }
}

#[component]
pub fn IntroductionPage() -> impl IntoView {
    view! {
        <section class="content-section" id="introduccion">
            <div class="panel">
                <div class="panel-title-row">
                    <div class="panel-icon">
                        <ImageWithFallback
                            src=asset_url("images/icono_introduccion.png")
                            alt="Icono de Introducción"
                            class="panel-icon-image"
                        />
                    </div>
                    <h2>"Introducción"</h2>
                </div>

                <div class="prose">
                    <p>
                        "La " <b>"Medicina Nuclear"</b> " es una especialidad médica que emplea de forma controlada pequeñas e "
                        "inocuas dosis de " <b>"radiotrazadores"</b> " (radiofármacos) con fines diagnósticos y terapéuticos, "
                        "permitiendo la obtención de imágenes para evaluar las funciones corporales y metabólicas "
                        "de alta sensibilidad y precisión, para el tratamiento y el diagnóstico de enfermedades."
                    </p>
                    <ImageWithFallback
                        src=asset_url("images/imagen_introduccion_parrafo1.jpg")
                        alt="Estudio de medicina nuclear"
                        class="prose-figure"
                    />
                    <p>
                        "La correcta operatividad de los equipos, junto con un mantenimiento sistemático y un control de calidad riguroso, "
                        "resulta esencial para garantizar resultados fiables, seguros y reproducibles."
                    </p>
                    <p>
                        "La " <b>"Medicina Nuclear Moderna"</b> " desempeña un papel fundamental en el desarrollo de la "
                        <u>"medicina personalizada o de precisión"</u>
                        ", ya que permite seleccionar tratamientos específicos adaptados a las características "
                        "individuales de cada paciente. Esta disciplina abarca la evaluación del riesgo, el diagnóstico, el seguimiento "
                        "terapéutico y la terapia con radionúclidos, con el objetivo de mejorar la calidad de vida y la salud pública."
                    </p>
                    <p>
                        "Los " <b>"Radiotrazadores"</b> " son compuestos marcados con un radionúclido, formados por una molécula portadora unida a un "
                        "átomo radiactivo. Su " <u>"función"</u> " es permitir la obtención de información funcional o metabólica de los órganos, tejidos "
                        "o sistemas biológicos a nivel molecular, lo que facilita el diagnóstico precoz y mejora el tratamiento y el pronóstico."
                    </p>
                    <p>
                        "Estos compuestos pueden administrarse por vía "
                        <i>"intravenosa, inhalatoria, oral o mediante inyección directa en un órgano"</i>
                        ", dependiendo del proceso patológico en estudio."
                    </p>
                    <p>
                        "Los " <b>"Radiotrazadores"</b> " autorizados para uso clínico se denominan radiofármacos y deben cumplir estrictas normas de seguridad, "
                        "calidad y eficacia establecidas por organismos reguladores como la"
                        <ExternalLink href="https://www.ema.europa.eu/en/homepage" label="European Medicines Agency (EMA)"/>
                        " o el"
                        <ExternalLink href="https://www.csn.es/home" label="Consejo de Seguridad Nuclear (CSN)"/>
                        ". El especialista en Medicina Nuclear selecciona el radiofármaco más adecuado según la indicación clínica, lo "
                        "que determinará la realización de técnicas de imagen como la tomografía por emisión de positrones (PET) o la "
                        "tomografía por emisión de fotón único (SPECT)."
                    </p>
                    <p>
                        "El mantenimiento preventivo y correctivo de los equipos de imagen, junto con la gestión adecuada del material fungible y no fungible, "
                        "constituyen pilares fundamentales para asegurar la continuidad asistencial, la seguridad operativa y la protección radiológica tanto "
                        "del paciente como del personal sanitario."
                    </p>
                    <p>
                        "En relación con lo anterior, este trabajo abarca el equipamiento de la sala, la gestión del material, los protocolos de control de "
                        "calidad, las actividades de mantenimiento, la protección radiológica y la documentación asociada, con el fin de garantizar un "
                        "funcionamiento seguro y eficiente de la instalación."
                    </p>
                    <p>
                        "El proyecto tiene como finalidad describir de forma estructurada, técnica, sistemática y organizada los procedimientos de "
                        "mantenimiento, control de calidad y gestión documental en una sala de exploración de Medicina Nuclear, de acuerdo con las "
                        "recomendaciones de organismos internacionales como la"
                        <ExternalLink href="https://www.iaea.org/es" label="International Atomic Energy Agency (IAEA)"/>
                        ", la"
                        <ExternalLink href="https://www.eanm.org/" label="European Association of Nuclear Medicine (EANM)"/>
                        " y la"
                        <ExternalLink href="https://www.icrp.org/" label="International Commission on Radiological Protection (ICRP)"/>
                        "."
                    </p>
                </div>
            </div>
        </section>
    }
}
