//! Result Card Component

use leptos::*;

use medscan::render::NO_DATA;

/// Titled panel with a body and an optional footer line.
///
/// A blank body shows the "no data" placeholder.
#[component]
pub fn ResultCard(
    title: &'static str,
    #[prop(into)]
    content: Signal<String>,
    #[prop(into)]
    footer: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <section class="bg-white/80 rounded-3xl border border-white/60 shadow p-6 flex flex-col gap-4">
            <header>
                <h3 class="text-lg font-semibold">{title}</h3>
            </header>
            <div class="text-sm text-gray-600 leading-relaxed whitespace-pre-wrap">
                {move || {
                    let text = content.get();
                    if text.trim().is_empty() { NO_DATA.to_string() } else { text }
                }}
            </div>
            {move || footer.get().map(|footer| view! {
                <footer class="text-xs text-gray-400">{footer}</footer>
            })}
        </section>
    }
}
