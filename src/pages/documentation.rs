use crate::components::{DrillDownSection, IconView, ImageWithFallback};
use crate::content::{Icon, SectionId, DOCUMENTATION, DOCUMENTS_IMAGE, DOCUMENT_CATALOGUE};
use leptos::*;

#[component]
pub fn DocumentationPage(
    selected: Signal<Option<&'static str>>,
    on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <DrillDownSection
            section=SectionId::Documentation
            title="Documentación"
            intro="Manuales, normativa y registros técnicos de referencia"
            back_label="Volver a documentación"
            items=DOCUMENTATION
            selected=selected
            on_back=on_back
        >
            <div class="banner-image wide">
                <ImageWithFallback src=DOCUMENTS_IMAGE.url() alt="Documentación médica"/>
            </div>
            <div class="info-grid three-columns">
                {DOCUMENT_CATALOGUE
                    .iter()
                    .map(|document| view! {
                        <div class="info-card stacked document">
                            <div class="info-card-head">
                                <div class="info-card-icon accent-blue">
                                    <IconView icon=document.icon/>
                                </div>
                                <div class="info-card-text">
                                    <h3>{document.title}</h3>
                                    <p>{document.description}</p>
                                </div>
                                <IconView icon=Icon::Download class="document-download"/>
                            </div>
                            <span class="pill muted">{document.kind}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="callout info">
                <p>
                    <strong>"Nota: "</strong>
                    "Todos los documentos deben mantenerse actualizados y accesibles al personal autorizado. "
                    "Se recomienda revisar periódicamente las actualizaciones de normativa y manuales del fabricante."
                </p>
            </div>
        </DrillDownSection>
    }
}
