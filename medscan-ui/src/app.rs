//! App Root Component
//!
//! Main application component with routing and the session provider.
//! Dashboard and report pages sit behind a token check that redirects to
//! the login page before anything is fetched.

use leptos::*;
use leptos_router::*;

use medscan::views::routes;

use crate::api;
use crate::components::Navbar;
use crate::pages::{Dashboard, Home, Login, ReportPage};
use crate::state::{provide_session, Session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_session();
    let session = use_context::<Session>().expect("Session not found");

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 text-gray-900 px-4 sm:px-8 py-8 pb-24">
                <div class="max-w-6xl mx-auto space-y-10">
                    <Navbar />

                    <main>
                        <Routes>
                            <Route path=routes::HOME view=Home />
                            <Route path=routes::LOGIN view=Login />
                            <ProtectedRoute
                                path=routes::DASHBOARD
                                redirect_path=routes::LOGIN
                                condition=move || session.is_authenticated()
                                view=Dashboard
                            />
                            <ProtectedRoute
                                path=routes::REPORT
                                redirect_path=routes::LOGIN
                                condition=move || session.is_authenticated()
                                view=ReportPage
                            />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>

                <Footer />
            </div>
        </Router>
    }
}

/// Footer with API status and last sync time
#[component]
fn Footer() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let (api_online, set_api_online) = create_signal(None::<bool>);

    create_effect(move |_| {
        spawn_local(async move {
            let online = match api::check_health().await {
                Ok(health) => health.status == "ok",
                Err(e) => {
                    web_sys::console::warn_1(&format!("Health check failed: {}", e).into());
                    false
                }
            };
            set_api_online.set(Some(online));
        });
    });

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white/80 border-t border-gray-200 py-3 px-4">
            <div class="max-w-6xl mx-auto flex items-center justify-between text-sm">
                <div class="flex items-center space-x-2">
                    {move || match api_online.get() {
                        Some(true) => view! {
                            <span class="flex items-center space-x-1 text-green-600">
                                <span class="w-2 h-2 bg-green-600 rounded-full" />
                                <span>"API online"</span>
                            </span>
                        }.into_view(),
                        Some(false) => view! {
                            <span class="flex items-center space-x-1 text-red-600">
                                <span class="w-2 h-2 bg-red-600 rounded-full" />
                                <span>"API unreachable"</span>
                            </span>
                        }.into_view(),
                        None => view! { <span class="text-gray-400">"Checking API..."</span> }.into_view(),
                    }}
                </div>

                <div class="text-gray-500">
                    {move || {
                        session.last_sync.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Last sync: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not synced".to_string())
                    }}
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=routes::HOME
                class="px-6 py-3 bg-gray-900 text-white rounded-full font-medium"
            >
                "Go Home"
            </A>
        </div>
    }
}
