//! Main application component.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use voxconv_core::{CONVERT_ENDPOINT, UploadController};
use web_sys::FormData;

use crate::components::{Header, ResultPanel, StatusPanel};
use crate::fetch_api::{FetchClient, js_error_message};
use crate::page_view::PageView;
use crate::theme::generate_css_variables;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let css_vars = generate_css_variables();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <Header />
        <main class="page">
            <UploadPage />
        </main>
    }
}

/// Upload form plus its status and result panels.
#[component]
fn UploadPage() -> impl IntoView {
    let page = PageView::new();
    let controller = UploadController::new(FetchClient::new(CONVERT_ENDPOINT));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(form) = page.form.get_untracked() else {
            return;
        };
        let form_data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(e) => {
                leptos::logging::error!("Could not read the upload form: {}", js_error_message(&e));
                return;
            }
        };

        let controller = controller.clone();
        let mut view = page;
        spawn_local(async move {
            if let Ok(audio) = controller.handle(&mut view, form_data).await {
                leptos::logging::log!("Converted audio ready at {}", audio.url);
            }
        });
    };

    view! {
        <form id="upload-form" class="card" node_ref=page.form on:submit=on_submit>
            <div class="form-row">
                <label for="audio-file">"Audio file"</label>
                <input id="audio-file" type="file" name="audio_file" accept="audio/*" required=true />
            </div>
            <div class="form-row">
                <label for="voice-id">"Target voice"</label>
                <input id="voice-id" type="text" name="voice_id" placeholder="Voice ID" required=true />
            </div>
            <button type="submit" disabled=move || !page.submit_enabled.get()>
                "Convert"
            </button>
        </form>
        <StatusPanel state=page.state />
        <ResultPanel state=page.state audio_ref=page.audio download_ref=page.download />
    }
}
