//! Status panel showing progress or failure text.

use leptos::prelude::*;
use voxconv_core::UiState;

use crate::theme::status_color;

/// Progress/error region of the page.
///
/// Visible while a submission is in flight and after one fails.
#[component]
pub fn StatusPanel(
    /// Current display state.
    #[prop(into)]
    state: Signal<UiState>,
) -> impl IntoView {
    view! {
        <div
            id="status-container"
            class="card"
            class:hidden=move || !state.with(UiState::status_panel_visible)
        >
            <p
                id="status-message"
                role="status"
                style:color=move || status_color(state.with(UiState::status_tone))
            >
                {move || state.with(|s| s.status_message().unwrap_or_default())}
            </p>
        </div>
    }
}
