use crate::components::IconView;
use crate::content::{Icon, LINKS_OF_INTEREST, REFERENCES};
use leptos::*;

#[component]
pub fn ReferencesPage() -> impl IntoView {
    view! {
        <section class="content-section narrow" id="referencias">
            <div class="panel">
                <div class="panel-header">
                    <div class="panel-title-row">
                        <IconView icon=Icon::BookOpen class="title-icon"/>
                        <h2>"Referencias"</h2>
                    </div>
                    <p class="panel-intro">"Normativa, guías técnicas y bibliografía de referencia"</p>
                </div>

                <h3 class="subheading" id="referencias-bibliografia">"Bibliografía"</h3>
                <ol class="reference-list">
                    {REFERENCES
                        .iter()
                        .enumerate()
                        .map(|(index, reference)| view! {
                            <li class="reference">
                                <span class="reference-number">{format!("[{}]", index + 1)}</span>
                                <div>
                                    <p class="reference-authors">{reference.authors}</p>
                                    <p class="reference-title">{reference.title}</p>
                                    <div class="reference-meta">
                                        <span>{reference.year}</span>
                                        <span class="pill">{reference.kind}</span>
                                    </div>
                                </div>
                            </li>
                        })
                        .collect_view()}
                </ol>

                <h3 class="subheading" id="referencias-enlaces">"Enlaces de Interés"</h3>
                <ul class="link-list">
                    {LINKS_OF_INTEREST
                        .iter()
                        .map(|link| view! {
                            <li>
                                <a href=link.url target="_blank" rel="noopener noreferrer">{link.label}</a>
                            </li>
                        })
                        .collect_view()}
                </ul>

                <div class="callout muted">
                    <p>
                        <strong>"Nota: "</strong>
                        "Es responsabilidad del personal técnico mantener actualizadas las referencias a normativa vigente "
                        "y consultar periódicamente las actualizaciones emitidas por los organismos reguladores nacionales "
                        "e internacionales."
                    </p>
                </div>
            </div>
        </section>
    }
}
