//! Navigation Component
//!
//! Header bar with brand, page links, and the session action.

use leptos::*;
use leptos_router::*;

use medscan::views::routes;

use crate::state::Session;

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let navigate = use_navigate();

    let sign_out = move |_| {
        session.sign_out();
        navigate(routes::LOGIN, Default::default());
    };

    view! {
        <header class="w-full py-4 px-6 bg-white/70 backdrop-blur-xl border border-white/40 rounded-3xl shadow flex items-center justify-between">
            // Brand
            <A href=routes::HOME class="flex items-center gap-3">
                <div class="h-10 w-10 rounded-2xl bg-gradient-to-br from-white to-gray-300 border border-white/70 flex items-center justify-center shadow-sm">
                    <span class="text-gray-900 font-semibold">"AI"</span>
                </div>
                <div>
                    <p class="text-lg font-semibold tracking-tight">"AI Medical Analyzer"</p>
                    <p class="text-sm text-gray-500">"Insights at a glance"</p>
                </div>
            </A>

            // Page links
            <nav class="hidden md:flex items-center gap-6">
                <NavLink href=routes::HOME label="Home" />
                <NavLink href=routes::DASHBOARD label="Dashboard" />
                <NavLink href=routes::REPORT label="Reports" />
                <NavLink href=routes::LOGIN label="Login" />
            </nav>

            {move || {
                if session.is_authenticated() {
                    view! {
                        <button
                            on:click=sign_out.clone()
                            class="rounded-full px-4 py-2 bg-white text-gray-900 text-sm font-medium border border-gray-300 hover:border-gray-900"
                        >
                            "Logout"
                        </button>
                    }.into_view()
                } else {
                    view! {
                        <A
                            href=routes::LOGIN
                            class="rounded-full px-4 py-2 bg-gray-900 text-white text-sm font-medium shadow-lg transition hover:shadow-xl"
                        >
                            "Get Started"
                        </A>
                    }.into_view()
                }
            }}
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="text-sm font-medium text-gray-600 transition-colors hover:text-gray-900"
            active_class="text-gray-900"
        >
            {label}
        </A>
    }
}
