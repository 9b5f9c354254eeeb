// Pending text input: what a submitted string will configure, plus the
// editable buffer itself. While a prompt is open every keystroke belongs to
// it; command keys and mouse painting are suspended until submit or cancel.

use crate::draw::{draw_text_5x7, fill_rect};
use crate::types::{Canvas, Color};

/// Destination for the next submitted text value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    Color,
    BrushWidth,
    SaveFile,
    LoadFile,
}

impl PromptKind {
    /// Fixed title shown while the prompt is open.
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Color => "COLOR",
            PromptKind::BrushWidth => "BRUSH WIDTH",
            PromptKind::SaveFile => "SAVE PATH",
            PromptKind::LoadFile => "LOAD PATH",
        }
    }
}

/// An open text-entry prompt. Cleared wholesale after each submission.
pub struct TextPrompt {
    kind: PromptKind,
    buffer: String,
}

impl TextPrompt {
    pub fn open(kind: PromptKind) -> Self {
        Self {
            kind,
            buffer: String::new(),
        }
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    /// Append a typed character. Control characters (enter, backspace and
    /// friends arrive through the same stream) are dropped here; the editing
    /// keys are handled as keys, not characters.
    pub fn push(&mut self, ch: char) {
        if !ch.is_control() {
            self.buffer.push(ch);
        }
    }

    /// Delete the last character, if any.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Consume the prompt, yielding the entered text.
    pub fn submit(self) -> String {
        self.buffer
    }

    /// Draw the prompt as a bar across the top of the frame:
    /// a dark strip, the fixed title, the live buffer and a caret.
    pub fn render(&self, fb: &mut Canvas) {
        let bar_h = 13;
        fill_rect(fb, 0, 0, fb.width as i32, bar_h, Color::new(32, 32, 32));
        let line = format!("{}: {}_", self.kind.title(), self.buffer);
        draw_text_5x7(fb, 4, 3, &line, Color::new(255, 255, 255));
    }
}
