#![forbid(unsafe_code)]

//! The text input that drives the completion list.

use crate::geometry::Rect;

/// Events the completion view reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The input text changed; carries the full new text.
    Changed(String),
    /// Editing ended (focus lost or submitted).
    Ended,
}

/// Host text input collaborator.
pub trait InputSource {
    /// Frame of the input; the list is placed directly beneath it.
    fn frame(&self) -> Rect;

    /// Clear transient text after editing ends.
    fn clear_text(&mut self);
}

/// Minimal headless text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    frame: Rect,
    text: String,
}

impl TextInput {
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            text: String::new(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, returning the matching change event.
    pub fn set_text(&mut self, text: impl Into<String>) -> InputEvent {
        self.text = text.into();
        InputEvent::Changed(self.text.clone())
    }

    /// Append one character, returning the matching change event.
    pub fn type_char(&mut self, c: char) -> InputEvent {
        self.text.push(c);
        InputEvent::Changed(self.text.clone())
    }

    /// Remove the last character, returning the matching change event.
    pub fn backspace(&mut self) -> InputEvent {
        self.text.pop();
        InputEvent::Changed(self.text.clone())
    }
}

impl InputSource for TextInput {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn clear_text(&mut self) {
        self.text.clear();
    }
}
