//! Login / Register Page
//!
//! One form with two modes. A successful login stores the token and moves
//! on to the dashboard; a successful registration flips back to login.

use leptos::*;
use leptos_router::*;

use medscan::views::routes;
use medscan::{AuthForm, AuthMode, AuthOutcome, AuthSubmission};

use crate::api;
use crate::state::Session;

#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let navigate = use_navigate();
    let form = create_rw_signal(AuthForm::new());

    let mode = create_memo(move |_| form.with(|f| f.mode()));
    let pending = create_memo(move |_| form.with(|f| f.is_pending()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(submission) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match submission {
                AuthSubmission::Register(request) => api::register(&request).await,
                AuthSubmission::Login(request) => api::login(&request).await.map(|_| ()),
            };

            let outcome = form
                .try_update(|f| f.finish_submit(result))
                .unwrap_or(AuthOutcome::Stay);

            if outcome == AuthOutcome::GoToDashboard {
                session.signed_in();
                navigate(routes::DASHBOARD, Default::default());
            }
        });
    };

    view! {
        <div class="bg-white/70 rounded-3xl border border-white/60 shadow p-6 sm:p-10 lg:p-14">
            <div class="grid gap-10 lg:grid-cols-2 items-center">
                <section class="space-y-6">
                    <p class="inline-flex items-center gap-2 rounded-full bg-gray-100 px-4 py-2 text-xs font-medium text-gray-500">
                        "Secure AI workspace"
                    </p>
                    <div class="space-y-4">
                        <h1 class="text-3xl md:text-4xl font-semibold leading-tight">
                            {move || mode.get().heading()}
                        </h1>
                        <p class="text-base text-gray-500">
                            {move || match mode.get() {
                                AuthMode::Login => "Sign in to manage report uploads, AI summaries, and symptom insights in one dashboard.",
                                AuthMode::Register => "Set up your workspace for instant OCR, clinical interpretation, and symptom guidance.",
                            }}
                        </p>
                    </div>
                </section>

                <div class="space-y-5 rounded-3xl border border-white/60 bg-white/80 p-6 sm:p-8 shadow">
                    <form class="space-y-5" on:submit=on_submit>
                        <label class="block text-sm text-gray-600">
                            "Email"
                            <input
                                type="email"
                                required=true
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                class="mt-2 w-full rounded-2xl border border-gray-300 bg-white px-4 py-3 text-sm focus:border-gray-900 focus:outline-none"
                            />
                        </label>
                        <label class="block text-sm text-gray-600">
                            "Password"
                            <input
                                type="password"
                                required=true
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                class="mt-2 w-full rounded-2xl border border-gray-300 bg-white px-4 py-3 text-sm focus:border-gray-900 focus:outline-none"
                            />
                        </label>
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full rounded-full bg-gray-900 text-white py-3 font-medium shadow-lg hover:shadow-xl disabled:opacity-70"
                        >
                            {move || if pending.get() { "Please wait..." } else { mode.get().submit_label() }}
                        </button>
                    </form>

                    {move || form.with(|f| f.message().map(str::to_string)).map(|message| view! {
                        <p class="text-center text-sm text-gray-500">{message}</p>
                    })}

                    <button
                        type="button"
                        on:click=move |_| form.update(|f| f.toggle_mode())
                        class="w-full text-sm text-gray-500 hover:text-gray-900"
                    >
                        {move || mode.get().toggle_label()}
                    </button>
                </div>
            </div>
        </div>
    }
}
