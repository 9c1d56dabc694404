//! Header component.

use leptos::prelude::*;

/// Application header component.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>"Voice Converter"</h1>
        </header>
    }
}
