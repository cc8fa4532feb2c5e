use crate::components::{DrillDownSection, IconView};
use crate::content::{SectionId, ACTIVITIES, ACTIVITY_SCHEDULE};
use leptos::*;

#[component]
pub fn ActivitiesPage(
    selected: Signal<Option<&'static str>>,
    on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <DrillDownSection
            section=SectionId::Activities
            title="Actividades"
            intro="Actividades programadas de mantenimiento, verificación y control"
            back_label="Volver a actividades"
            items=ACTIVITIES
            selected=selected
            on_back=on_back
        >
            <h3 class="subheading">"Calendario de mantenimiento"</h3>
            <div class="info-grid two-columns">
                {ACTIVITY_SCHEDULE
                    .iter()
                    .map(|activity| view! {
                        <div class="info-card">
                            <div class=format!("info-card-icon accent-{}", activity.accent)>
                                <IconView icon=activity.icon/>
                            </div>
                            <div class="info-card-text">
                                <div class="info-card-title-row">
                                    <h3>{activity.title}</h3>
                                    <span class="pill">{activity.frequency}</span>
                                </div>
                                <p>{activity.description}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </DrillDownSection>
    }
}
