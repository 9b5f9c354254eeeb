// Window + software drawing utilities.
// Three jobs live here:
// 1) A window that presents the composed frame buffer.
// 2) Per-frame keyboard/mouse sampling, plus the typed-character stream
//    that feeds an open text prompt.
// 3) A tiny 5x7 bitmap font to render the HUD and prompt text.

use std::sync::mpsc::{Receiver, Sender, channel};

use minifb::{InputCallback, Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::Error;
use crate::types::{Canvas, Color};

// Forwards every typed character out of the window's input hook.
struct CharSink(Sender<char>);

impl InputCallback for CharSink {
    fn add_char(&mut self, uni_char: u32) {
        if let Some(ch) = char::from_u32(uni_char) {
            let _ = self.0.send(ch);
        }
    }
}

pub struct Drawer {
    window: Window,    // the on-screen window you see
    typed: Receiver<char>,
    // Window-to-canvas coordinate factor, fixed at creation. The buffer is
    // presented 1:1, so this stays at 1.0; the mapping seam is kept explicit.
    scale: f32,
}

impl Drawer {
    /// Create a window sized to the canvas.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        let (tx, rx) = channel();
        window.set_input_callback(Box::new(CharSink(tx)));
        Ok(Self {
            window,
            typed: rx,
            scale: 1.0,
        })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &Canvas) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// One-shot key edge; commands fire once per physical press.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::No)
    }

    /// Key edge with auto-repeat, for editing keys like backspace.
    pub fn key_typed(&self, key: Key) -> bool {
        self.window.is_key_pressed(key, KeyRepeat::Yes)
    }

    /// Visual: while this is true, stamping occurs at the pointer position.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Pointer position in canvas coordinates, clamped to the window.
    pub fn canvas_pos(&self) -> Option<(f32, f32)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x / self.scale, y / self.scale))
    }

    /// Everything typed since the last call, in order.
    pub fn typed_chars(&self) -> Vec<char> {
        self.typed.try_iter().collect()
    }
}

/* ---------- Software drawing: bars and a tiny bitmap font ---------- */

/// Fill an axis-aligned rectangle, clipped to the buffer.
pub fn fill_rect(fb: &mut Canvas, x: i32, y: i32, w: i32, h: i32, color: Color) {
    for dy in 0..h {
        for dx in 0..w {
            fb.set(x + dx, y + dy, color);
        }
    }
}

/* ---------- 5x7 bitmap font (A-Z, digits, HUD/prompt punctuation) ---------- */

/// Return a 5x7 glyph bitmap for the supported character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase alphabet
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b11011,0b10001),
        'X' => g!(0b10001,0b01010,0b00100,0b00100,0b00100,0b01010,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        // Punctuation the HUD and prompts use
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        ',' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b01000),
        '#' => g!(0b01010,0b01010,0b11111,0b01010,0b11111,0b01010,0b01010),
        '(' => g!(0b00010,0b00100,0b01000,0b01000,0b01000,0b00100,0b00010),
        ')' => g!(0b01000,0b00100,0b00010,0b00010,0b00010,0b00100,0b01000),
        '/' => g!(0b00001,0b00010,0b00010,0b00100,0b01000,0b01000,0b10000),
        '-' => g!(0b00000,0b00000,0b00000,0b01110,0b00000,0b00000,0b00000),
        '_' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b11111),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a tiny glyph appears with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut Canvas, x: i32, y: i32, ch: char, color: Color) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass: offset by (1,1) in black to improve readability
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    fb.set(x + rx as i32 + 1, y + ry as i32 + 1, Color::new(0, 0, 0));
                }
            }
        }

        // Foreground pass: actual glyph in chosen color
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    fb.set(x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs. Letters render uppercased; a
/// character without a glyph advances the pen and leaves a blank cell.
pub fn draw_text_5x7(fb: &mut Canvas, mut x: i32, y: i32, text: &str, color: Color) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch.to_ascii_uppercase(), color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_clips_to_buffer() {
        let mut fb = Canvas::new(10, 10, Color::new(0, 0, 0));
        fill_rect(&mut fb, 6, 6, 8, 8, Color::new(1, 1, 1));
        assert_eq!(fb.get(6, 6), Some(Color::new(1, 1, 1)));
        assert_eq!(fb.get(9, 9), Some(Color::new(1, 1, 1)));
        assert_eq!(fb.get(5, 5), Some(Color::new(0, 0, 0)));
    }

    #[test]
    fn text_renders_lowercase_via_uppercase_glyphs() {
        let mut upper = Canvas::new(40, 10, Color::new(0, 0, 0));
        let mut lower = Canvas::new(40, 10, Color::new(0, 0, 0));
        draw_text_5x7(&mut upper, 1, 1, "SAVE", Color::new(255, 255, 255));
        draw_text_5x7(&mut lower, 1, 1, "save", Color::new(255, 255, 255));
        assert_eq!(upper.pixels, lower.pixels);
        // something was actually drawn
        assert!(upper.pixels.iter().any(|&p| p != 0));
    }

    #[test]
    fn unknown_characters_leave_a_blank_cell() {
        let mut fb = Canvas::new(20, 10, Color::new(0, 0, 0));
        draw_text_5x7(&mut fb, 1, 1, "\u{263a}", Color::new(255, 255, 255));
        assert!(fb.pixels.iter().all(|&p| p == 0));
    }
}
