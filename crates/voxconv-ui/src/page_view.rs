//! The upload page as seen by the submission cycle.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use voxconv_core::{ConversionError, ConvertedAudio, UiState, UploadView};
use wasm_bindgen_futures::JsFuture;

use crate::fetch_api::js_error_message;

/// Handles to every element the submission cycle touches.
///
/// Built once when the page mounts. Panel visibility and status text are
/// reactive on `state`; the player and download link are written directly
/// because playback has to start right after the source changes.
#[derive(Clone, Copy)]
pub struct PageView {
    /// Current display state.
    pub state: RwSignal<UiState>,
    /// Whether the submit button accepts clicks.
    pub submit_enabled: RwSignal<bool>,
    /// The upload form.
    pub form: NodeRef<html::Form>,
    /// The result player.
    pub audio: NodeRef<html::Audio>,
    /// The result download link.
    pub download: NodeRef<html::A>,
}

impl PageView {
    /// Create the view in its idle state with fresh element refs.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(UiState::Idle),
            submit_enabled: RwSignal::new(true),
            form: NodeRef::new(),
            audio: NodeRef::new(),
            download: NodeRef::new(),
        }
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadView for PageView {
    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }

    fn show(&mut self, state: &UiState) {
        self.state.set(state.clone());
    }

    fn present_result(&mut self, audio: &ConvertedAudio) {
        if let Some(link) = self.download.get_untracked() {
            link.set_href(&audio.url);
            link.set_download(&audio.file_name);
        }

        let Some(player) = self.audio.get_untracked() else {
            return;
        };
        player.set_src(&audio.url);
        player.load();
        match player.play() {
            Ok(promise) => spawn_local(async move {
                // Autoplay policies may refuse; the controls stay usable.
                if let Err(e) = JsFuture::from(promise).await {
                    leptos::logging::warn!("Playback did not start: {}", js_error_message(&e));
                }
            }),
            Err(e) => {
                leptos::logging::warn!("Playback did not start: {}", js_error_message(&e));
            }
        }
    }

    fn report_failure(&mut self, error: &ConversionError) {
        leptos::logging::error!("Conversion failed ({}): {}", error.kind(), error);
    }

    fn reset_form(&mut self) {
        if let Some(form) = self.form.get_untracked() {
            form.reset();
        }
    }
}
