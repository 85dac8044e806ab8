//! Landing Page

use leptos::*;
use leptos_router::*;

use medscan::views::routes;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-10 items-center">
            <section class="space-y-6">
                <h1 class="text-4xl md:text-5xl font-semibold leading-tight">
                    "Understand medical reports in seconds with AI precision."
                </h1>
                <p class="text-gray-600 text-lg">
                    "Upload lab results, radiology scans, or discharge summaries. The analyzer extracts, \
                     interprets, and visualises the essentials so you and your care team stay in sync."
                </p>
                <div class="flex flex-wrap gap-4">
                    <A
                        href=routes::DASHBOARD
                        class="rounded-full px-6 py-3 bg-gray-900 text-white text-sm font-medium shadow-lg hover:shadow-xl"
                    >
                        "Go to Dashboard"
                    </A>
                    <A
                        href=routes::REPORT
                        class="rounded-full px-6 py-3 bg-white text-gray-900 text-sm font-medium border border-gray-300 hover:border-gray-900"
                    >
                        "Browse Reports"
                    </A>
                </div>
            </section>

            <section class="bg-white/80 rounded-3xl border border-white/60 shadow p-8 space-y-4">
                <div class="grid grid-cols-2 gap-4 text-sm">
                    <Stat label="OCR Accuracy" value="99%" />
                    <Stat label="Insights Generated" value="3x faster" />
                    <Stat label="Symptom Matches" value="+20" />
                    <Stat label="User Satisfaction" value="4.9/5" />
                </div>
                <p class="text-sm text-gray-500">
                    "Reports are processed by the analyzer service and stored with your account."
                </p>
            </section>
        </div>
    }
}

#[component]
fn Stat(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-100 rounded-2xl p-4">
            <p class="text-gray-500">{label}</p>
            <p class="text-2xl font-semibold">{value}</p>
        </div>
    }
}
