//! Dashboard Page
//!
//! Upload a report, read its AI summary and chart, run a symptom check,
//! and pick from recent reports.

use leptos::*;

use medscan::ReportBoard;

use crate::api;
use crate::components::{ChartSection, ResultCard, UploadBox};
use crate::state::Session;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let board = create_rw_signal(ReportBoard::new());

    // Fetch reports on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_reports().await {
                Ok(reports) => {
                    board.update(|b| b.load(reports));
                    session.mark_synced();
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("Failed to fetch reports: {}", e).into());
                }
            }
        });
    });

    let on_upload = Callback::new(move |file: web_sys::File| {
        if !board.try_update(|b| b.begin_upload()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let result = api::upload_report(file).await;
            board.update(|b| b.finish_upload(result));
        });
    });

    let uploading = Signal::derive(move || board.with(|b| b.is_uploading()));
    let status = move || board.with(|b| b.status().map(str::to_string));

    view! {
        <div class="space-y-10">
            <section class="grid lg:grid-cols-5 gap-6 items-start">
                <div class="lg:col-span-3 space-y-6">
                    <UploadBox on_upload=on_upload uploading=uploading />

                    {move || status().map(|message| view! {
                        <p class="text-sm text-gray-500 text-center lg:text-left">{message}</p>
                    })}

                    <ResultCard
                        title="AI Summary"
                        content=Signal::derive(move || {
                            board.with(|b| b.selected().map(|r| r.ai_summary.clone()).unwrap_or_default())
                        })
                        footer=Signal::derive(move || {
                            board.with(|b| b.selected().map(|r| format!("Generated {}", r.created_label())))
                        })
                    />
                </div>

                <div class="lg:col-span-2 space-y-6">
                    <ChartSection points=Signal::derive(move || board.with(|b| b.chart())) />
                    <SymptomChecker board=board />
                </div>
            </section>

            <RecentReports board=board />
        </div>
    }
}

/// Free-text symptom form and its results
#[component]
fn SymptomChecker(board: RwSignal<ReportBoard>) -> impl IntoView {
    let (symptoms, set_symptoms) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let text = symptoms.get_untracked();
        let Some(request) = board.try_update(|b| b.begin_symptom_check(&text)).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = api::check_symptoms(&request).await;
            board.update(|b| b.finish_symptom_check(result));
        });
    };

    view! {
        <section class="bg-white/80 rounded-3xl border border-white/60 shadow p-6 space-y-4">
            <h3 class="text-lg font-semibold">"Symptom Checker"</h3>
            <form class="space-y-4" on:submit=on_submit>
                <textarea
                    prop:value=move || symptoms.get()
                    on:input=move |ev| set_symptoms.set(event_target_value(&ev))
                    placeholder="e.g., persistent fatigue, dizziness, shortness of breath"
                    class="w-full min-h-[120px] rounded-2xl border border-gray-300 bg-white px-4 py-3 text-sm focus:border-gray-900 focus:outline-none"
                />
                <button
                    type="submit"
                    class="w-full rounded-full bg-gray-900 text-white py-3 text-sm font-medium shadow-lg hover:shadow-xl"
                >
                    "Analyse Symptoms"
                </button>
            </form>
            <div class="space-y-2 text-sm text-gray-600">
                {move || {
                    let conditions = board.with(|b| b.conditions().to_vec());
                    if conditions.is_empty() {
                        view! {
                            <p class="text-gray-500">"Enter symptoms to receive AI-assisted suggestions."</p>
                        }.into_view()
                    } else {
                        conditions
                            .into_iter()
                            .map(|item| view! { <p>{item}</p> })
                            .collect_view()
                    }
                }}
            </div>
        </section>
    }
}

/// Report cards; clicking one selects it
#[component]
fn RecentReports(board: RwSignal<ReportBoard>) -> impl IntoView {
    view! {
        <section class="space-y-4">
            <h2 class="text-xl font-semibold">"Recent Reports"</h2>
            <div class="grid md:grid-cols-2 gap-6">
                {move || {
                    let reports = board.with(|b| b.reports().to_vec());
                    if reports.is_empty() {
                        return view! {
                            <p class="text-sm text-gray-500">
                                "No reports yet. Upload your first medical report to begin."
                            </p>
                        }.into_view();
                    }

                    reports
                        .into_iter()
                        .enumerate()
                        .map(|(index, report)| view! {
                            <button
                                on:click=move |_| { board.update(|b| { b.select(index); }); }
                                class=move || {
                                    let base = "bg-white/80 rounded-3xl border shadow p-6 text-left space-y-3 transition hover:-translate-y-1";
                                    if board.with(|b| b.selected_index() == Some(index)) {
                                        format!("{} border-gray-900", base)
                                    } else {
                                        format!("{} border-white/60", base)
                                    }
                                }
                            >
                                <p class="text-sm font-semibold">{report.report_name.clone()}</p>
                                <p class="text-xs text-gray-500">{report.created_label()}</p>
                                <p class="text-sm text-gray-600 line-clamp-3">{report.ai_summary.clone()}</p>
                            </button>
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
