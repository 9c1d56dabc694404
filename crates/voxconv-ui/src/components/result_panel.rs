//! Result panel with the converted audio.

use leptos::html;
use leptos::prelude::*;
use voxconv_core::UiState;

/// Player and download link for the last converted file.
///
/// `src`, `href` and `download` are set by [`PageView`](crate::PageView)
/// when a conversion succeeds, not through the view.
#[component]
pub fn ResultPanel(
    /// Current display state.
    #[prop(into)]
    state: Signal<UiState>,
    /// Handle to the `<audio>` element.
    audio_ref: NodeRef<html::Audio>,
    /// Handle to the download link.
    download_ref: NodeRef<html::A>,
) -> impl IntoView {
    view! {
        <div
            id="result-container"
            class="card"
            class:hidden=move || !state.with(UiState::result_panel_visible)
        >
            <h2>"Converted audio"</h2>
            <audio id="result-audio" node_ref=audio_ref controls=true></audio>
            <a id="download-link" node_ref=download_ref>"Download"</a>
        </div>
    }
}
