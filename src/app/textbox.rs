//! Textbox editing - double-click to edit, Enter/Escape/blur to leave.

use super::LabelEditor;
use crate::text_edit::{EditKey, KeyOutcome, TextEditSession};
use gpui::*;
use gpui_component::input::{InputEvent, InputState};

impl LabelEditor {
    pub fn start_textbox_editing(&mut self, item_id: u64, window: &mut Window, cx: &mut Context<Self>) {
        if self.textbox.session.is_some() {
            self.finish_textbox_editing(cx);
        }

        let session = match TextEditSession::begin(&mut self.canvas.label, item_id) {
            Ok(session) => session,
            Err(e) => {
                tracing::debug!("not starting text edit: {}", e);
                return;
            }
        };

        let accepts_return = session.accepts_return();
        let text = session.initial_text().to_string();
        let input = cx.new(|cx| {
            InputState::new(window, cx)
                .multi_line(accepts_return)
                .default_value(text)
        });

        // Focus the input after it's mounted
        let input_clone = input.clone();
        window.defer(cx, move |window, cx| {
            input_clone.update(cx, |state, cx| {
                state.focus(window, cx);
            });
        });

        cx.subscribe(&input, |this, _input, event: &InputEvent, cx| match event {
            InputEvent::PressEnter { secondary } => {
                this.handle_textbox_key(EditKey::Enter { ctrl: *secondary }, cx);
            }
            InputEvent::Blur => {
                let should_finish = this
                    .textbox
                    .session
                    .as_ref()
                    .is_some_and(|s| s.should_finish_on_blur());
                if should_finish {
                    this.finish_textbox_editing(cx);
                }
            }
            _ => {}
        })
        .detach();

        self.textbox.session = Some(session);
        self.textbox.input = Some(input);
        cx.notify();
    }

    /// Apply the edit-mode key rules to a key press.
    pub fn handle_textbox_key(&mut self, key: EditKey, cx: &mut Context<Self>) {
        let Some(ref session) = self.textbox.session else {
            return;
        };
        // Newlines are inserted by the multi-line input itself
        if session.handle_key(key) == KeyOutcome::Finish {
            self.finish_textbox_editing(cx);
        }
    }

    /// Commit the edited text and return the box to read-only.
    pub fn finish_textbox_editing(&mut self, cx: &mut Context<Self>) {
        let Some(session) = self.textbox.session.take() else {
            return;
        };
        let Some(input) = self.textbox.input.take() else {
            return;
        };

        let text = input.read(cx).value().to_string();
        session.commit(&mut self.canvas.label, &text);
        cx.notify();
    }

    /// Drop the edit session without writing back (the item is going away).
    pub fn cancel_textbox_editing(&mut self, cx: &mut Context<Self>) {
        self.textbox.session = None;
        self.textbox.input = None;
        cx.notify();
    }

    pub fn is_editing_text(&self) -> bool {
        self.textbox.session.is_some()
    }
}
