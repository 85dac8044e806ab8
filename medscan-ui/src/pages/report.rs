//! Report Browser Page
//!
//! Full summary, extracted text, and insight lines of past reports.

use leptos::*;

use medscan::ReportBoard;

use crate::api;
use crate::components::ResultCard;
use crate::state::Session;

#[component]
pub fn ReportPage() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let board = create_rw_signal(ReportBoard::new());

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_reports().await {
                Ok(reports) => {
                    board.update(|b| b.load(reports));
                    session.mark_synced();
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("Failed to load reports: {}", e).into());
                }
            }
        });
    });

    let extracted = move || {
        board.with(|b| {
            b.selected()
                .map(|r| r.extracted_text.clone())
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Select a report to view raw OCR output.".to_string())
        })
    };

    view! {
        <div class="grid lg:grid-cols-5 gap-6 items-start">
            <section class="lg:col-span-3 space-y-6">
                <ResultCard
                    title="AI Summary"
                    content=Signal::derive(move || {
                        board.with(|b| b.selected().map(|r| r.ai_summary.clone()).unwrap_or_default())
                    })
                    footer=Signal::derive(move || {
                        board.with(|b| b.selected().map(|r| format!("Generated {}", r.created_label())))
                    })
                />
                <section class="bg-white/80 rounded-3xl border border-white/60 shadow p-6 space-y-4">
                    <h3 class="text-lg font-semibold">"Extracted Text"</h3>
                    <pre class="text-sm text-gray-600 whitespace-pre-wrap leading-relaxed">
                        {extracted}
                    </pre>
                </section>
            </section>

            <aside class="lg:col-span-2 space-y-6">
                <section class="bg-white/80 rounded-3xl border border-white/60 shadow p-6 space-y-4">
                    <h3 class="text-lg font-semibold">"Insights"</h3>
                    <ul class="space-y-2 text-sm text-gray-600">
                        {move || {
                            let insights = board.with(|b| {
                                b.selected().map(|r| r.insights.clone()).unwrap_or_default()
                            });
                            if insights.is_empty() {
                                view! {
                                    <li class="text-gray-500">"Insights will appear after uploading reports."</li>
                                }.into_view()
                            } else {
                                insights
                                    .into_iter()
                                    .map(|item| view! { <li>"• " {item}</li> })
                                    .collect_view()
                            }
                        }}
                    </ul>
                </section>

                <section class="bg-white/80 rounded-3xl border border-white/60 shadow p-6 space-y-4">
                    <h3 class="text-lg font-semibold">"All Reports"</h3>
                    <div class="space-y-2">
                        {move || {
                            let reports = board.with(|b| b.reports().to_vec());
                            if reports.is_empty() {
                                return view! {
                                    <p class="text-sm text-gray-500">"No reports available yet."</p>
                                }.into_view();
                            }

                            reports
                                .into_iter()
                                .enumerate()
                                .map(|(index, report)| view! {
                                    <button
                                        on:click=move |_| { board.update(|b| { b.select(index); }); }
                                        class="w-full rounded-2xl border border-transparent bg-white/70 px-4 py-3 text-left text-sm text-gray-600 hover:border-gray-900"
                                    >
                                        <p class="font-medium text-gray-900">{report.report_name.clone()}</p>
                                        <p class="text-xs text-gray-500">{report.created_label()}</p>
                                    </button>
                                })
                                .collect_view()
                        }}
                    </div>
                </section>
            </aside>
        </div>
    }
}
