use leptos::*;

/// Neutral placeholder shown when an image cannot be loaded.
const FALLBACK_IMAGE: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='88' height='88' viewBox='0 0 88 88' fill='none' stroke='black' stroke-opacity='0.3' stroke-width='3.7'><rect x='16' y='16' width='56' height='56' rx='6'/><path d='m16 58 16-18 32 32'/><circle cx='53' cy='35' r='7'/></svg>";

/// `<img>` that swaps to a placeholder graphic on load error.
#[component]
pub fn ImageWithFallback(
    #[prop(into)] src: String,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let (failed, set_failed) = create_signal(false);
    let failed_src = src.clone();

    view! {
        <img
            src=move || if failed.get() { FALLBACK_IMAGE.to_string() } else { src.clone() }
            alt=alt
            class=class
            loading="lazy"
            on:error=move |_| {
                // The placeholder is inline, so only the first source can fail
                if !failed.get_untracked() {
                    log::warn!("Image failed to load, showing placeholder: {}", failed_src);
                    set_failed.set(true);
                }
            }
        />
    }
}
