// What you SEE now:
// • A white canvas; hold Left Mouse to draw with the current brush.
// • C / W / S / L open a text prompt (color, brush width, save path,
//   load path); Enter submits, Escape cancels, Backspace edits.
// • F fills the canvas with the draw color, X clears it, B cycles the
//   brush shape. ESC (with no prompt open) quits.

mod brush;
mod color;
mod draw;
mod error;
mod file;
mod prompt;
mod stroke;
mod types;

use log::{info, warn};
use minifb::Key;

use brush::Brush;
use draw::{Drawer, draw_text_5x7};
use error::Error;
use prompt::{PromptKind, TextPrompt};
use stroke::StrokeSession;
use types::{Canvas, Color};

const WIDTH: usize = 1400;
const HEIGHT: usize = 750;
const BACKGROUND: Color = Color::new(255, 255, 255);

fn main() -> Result<(), Error> {
    env_logger::init();

    /* --- Window + canvas setup ---
       Visual: window opens showing a blank white canvas. */
    let mut drawer = Drawer::new("Easel", WIDTH, HEIGHT)?;
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND);
    let mut brush = Brush::default();
    let mut session = StrokeSession::new();
    let mut prompt: Option<TextPrompt> = None;

    /* --- Reusable frame buffer ---
       Visual: the canvas plus HUD/prompt overlays, rebuilt every frame. */
    let mut screen = Canvas::new(WIDTH, HEIGHT, BACKGROUND);

    info!("easel started, canvas {WIDTH}x{HEIGHT}");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() {
        /* 1) Drain everything typed since the last frame. Only an open
           prompt consumes it; otherwise keystrokes act as commands below. */
        let typed = drawer.typed_chars();

        if let Some(active) = prompt.as_mut() {
            /* 2a) Prompt open: all keys belong to the text field. */
            for ch in typed {
                active.push(ch);
            }
            if drawer.key_typed(Key::Backspace) {
                active.backspace();
            }
            if drawer.key_pressed(Key::Enter) {
                let active = prompt.take().unwrap();
                apply_submission(active, &mut canvas, &mut brush);
            } else if drawer.key_pressed(Key::Escape) {
                prompt = None; // visual: the bar disappears, nothing changes
            }
        } else {
            /* 2b) No prompt: command keys, then the brush. */
            if drawer.key_pressed(Key::Escape) {
                break;
            }
            if let Some(kind) = prompt_key(&drawer) {
                session.reset(); // a stroke never spans a prompt interaction
                prompt = Some(TextPrompt::open(kind));
            }
            if drawer.key_pressed(Key::F) {
                canvas.fill(brush.color); // visual: whole canvas turns the draw color
            }
            if drawer.key_pressed(Key::X) {
                canvas.fill(BACKGROUND); // visual: back to a blank page
            }
            if drawer.key_pressed(Key::B) {
                brush.shape = brush.shape.next();
            }

            /* 3) Paint. One stamp on first contact, an interpolated chain
               while dragging, nothing on release. */
            if let Some(pos) = drawer.canvas_pos() {
                for center in session.tick(drawer.left_mouse_down(), pos) {
                    brush.stamp(&mut canvas, center);
                }
            }
        }

        /* 4) Compose the frame: canvas first, overlays on top. The canvas
           itself never contains HUD or prompt pixels. */
        screen.pixels.copy_from_slice(&canvas.pixels);
        let hud = format!(
            "W:{} {} #{:02X}{:02X}{:02X} | C:COLOR W:WIDTH S:SAVE L:LOAD F:FILL X:CLEAR B:SHAPE",
            brush.width,
            brush.shape.label(),
            brush.color.r,
            brush.color.g,
            brush.color.b,
        );
        draw_text_5x7(&mut screen, 4, HEIGHT as i32 - 12, &hud, Color::new(64, 64, 64));
        if let Some(active) = &prompt {
            active.render(&mut screen);
        }

        /* 5) Present to the window. */
        drawer.present(&screen)?;
    }

    Ok(())
}

/// Which prompt, if any, the command keys ask to open this frame.
fn prompt_key(drawer: &Drawer) -> Option<PromptKind> {
    if drawer.key_pressed(Key::C) {
        Some(PromptKind::Color)
    } else if drawer.key_pressed(Key::W) {
        Some(PromptKind::BrushWidth)
    } else if drawer.key_pressed(Key::S) {
        Some(PromptKind::SaveFile)
    } else if drawer.key_pressed(Key::L) {
        Some(PromptKind::LoadFile)
    } else {
        None
    }
}

/// Route a submitted prompt to its destination. Every failure here is
/// recovered the same way: log it and keep the previous state.
fn apply_submission(active: TextPrompt, canvas: &mut Canvas, brush: &mut Brush) {
    let kind = active.kind();
    let text = active.submit();
    match kind {
        PromptKind::Color => match color::parse(&text) {
            Ok(c) => brush.color = c,
            Err(e) => warn!("color {text:?} rejected ({e}), keeping current color"),
        },
        PromptKind::BrushWidth => match text.trim().parse::<u32>() {
            Ok(w) if w > 0 => brush.width = w,
            _ => warn!("width {text:?} rejected, keeping current width"),
        },
        PromptKind::SaveFile => {
            if let Err(e) = file::save(canvas, text.trim()) {
                warn!("{e}");
            }
        }
        PromptKind::LoadFile => {
            // Recoverable, symmetric with save: a bad path leaves the
            // canvas untouched.
            if let Err(e) = file::load(canvas, text.trim()) {
                warn!("{e}");
            }
        }
    }
}
