//! Upload Box Component
//!
//! File picker for a new report. Picking a file hands it to `on_upload`
//! straight away; the button stays disabled while `uploading` is true.

use leptos::*;
use wasm_bindgen::JsCast;

/// File types the analyzer accepts
const ACCEPT: &str = ".pdf,image/png,image/jpeg";

#[component]
pub fn UploadBox(
    on_upload: Callback<web_sys::File>,
    #[prop(into)]
    uploading: Signal<bool>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();
    let (file_name, set_file_name) = create_signal(None::<String>);

    let choose = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };

        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            set_file_name.set(Some(file.name()));
            on_upload.call(file);
        }

        // allow picking the same file again
        input.set_value("");
    };

    view! {
        <div class="bg-white/80 rounded-3xl border border-white/60 shadow p-8 flex flex-col items-center text-center">
            <div class="h-16 w-16 rounded-2xl bg-gray-100 flex items-center justify-center mb-4 text-3xl">
                "☁"
            </div>
            <h3 class="text-xl font-semibold mb-2">"Upload your medical report"</h3>
            <p class="text-sm text-gray-500 mb-6 max-w-md">
                "Supports PDF, PNG, or JPEG. Our AI automatically extracts key details and insights in seconds."
            </p>
            <button
                type="button"
                on:click=choose
                disabled=move || uploading.get()
                class="rounded-full px-6 py-3 bg-gray-900 text-white text-sm font-medium shadow-lg transition hover:shadow-xl disabled:opacity-70"
            >
                {move || if uploading.get() { "Uploading..." } else { "Choose File" }}
            </button>
            <input
                node_ref=input_ref
                type="file"
                accept=ACCEPT
                class="hidden"
                on:change=on_change
            />
            {move || file_name.get().map(|name| view! {
                <p class="mt-4 text-xs text-gray-600">"Selected: " {name}</p>
            })}
        </div>
    }
}
