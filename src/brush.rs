// Brush state and the stamp shapes it paints.
// A stamp overwrites pixels with the draw color, so restamping the same
// spot is idempotent and overlapping stamps along a stroke are harmless.

use crate::types::{Canvas, Color};

/// The closed set of stamp shapes, cycled in order by the shape command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BrushShape {
    #[default]
    Square,
    Circle,
}

impl BrushShape {
    /// Next shape in the fixed cycle, wrapping at the end.
    pub fn next(self) -> Self {
        match self {
            BrushShape::Square => BrushShape::Circle,
            BrushShape::Circle => BrushShape::Square,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BrushShape::Square => "SQUARE",
            BrushShape::Circle => "CIRCLE",
        }
    }
}

/// Current draw color, width (pixels) and shape. No history.
pub struct Brush {
    pub color: Color,
    pub width: u32,
    pub shape: BrushShape,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Color::new(0, 0, 0),
            width: 5,
            shape: BrushShape::Square,
        }
    }
}

impl Brush {
    /// Paint one stamp centered on `center` (canvas coordinates).
    /// Visual: a filled square or disc appears under the cursor; anything
    /// hanging past the canvas edge is clipped by the bounds check in `set`.
    pub fn stamp(&self, canvas: &mut Canvas, center: (f32, f32)) {
        let cx = center.0.round() as i32;
        let cy = center.1.round() as i32;
        match self.shape {
            BrushShape::Square => self.stamp_square(canvas, cx, cy),
            BrushShape::Circle => self.stamp_circle(canvas, cx, cy),
        }
    }

    // A w x w axis-aligned block centered on (cx, cy).
    fn stamp_square(&self, canvas: &mut Canvas, cx: i32, cy: i32) {
        let w = self.width as i32;
        let half = w / 2;
        for dy in 0..w {
            for dx in 0..w {
                canvas.set(cx - half + dx, cy - half + dy, self.color);
            }
        }
    }

    // A filled disc of radius w/2 (integer division) centered on (cx, cy).
    // Width 1 degenerates to radius 0: a single pixel.
    fn stamp_circle(&self, canvas: &mut Canvas, cx: i32, cy: i32) {
        let r = (self.width / 2) as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    canvas.set(cx + dx, cy + dy, self.color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Color = Color::new(200, 10, 10);
    const PAPER: Color = Color::new(255, 255, 255);

    fn painted(canvas: &Canvas) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..canvas.height as i32 {
            for x in 0..canvas.width as i32 {
                if canvas.get(x, y) == Some(INK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn square_stamp_covers_centered_block() {
        let mut canvas = Canvas::new(9, 9, PAPER);
        let brush = Brush {
            color: INK,
            width: 3,
            shape: BrushShape::Square,
        };
        brush.stamp(&mut canvas, (4.0, 4.0));
        let mut expect = Vec::new();
        for y in 3..=5 {
            for x in 3..=5 {
                expect.push((x, y));
            }
        }
        assert_eq!(painted(&canvas), expect);
    }

    #[test]
    fn width_one_circle_is_a_single_pixel() {
        let mut canvas = Canvas::new(9, 9, PAPER);
        let brush = Brush {
            color: INK,
            width: 1,
            shape: BrushShape::Circle,
        };
        brush.stamp(&mut canvas, (4.0, 4.0));
        assert_eq!(painted(&canvas), vec![(4, 4)]);
    }

    #[test]
    fn circle_stamp_stays_within_its_radius() {
        let mut canvas = Canvas::new(21, 21, PAPER);
        let brush = Brush {
            color: INK,
            width: 8,
            shape: BrushShape::Circle,
        };
        brush.stamp(&mut canvas, (10.0, 10.0));
        let r = 4_i32;
        for (x, y) in painted(&canvas) {
            let (dx, dy) = (x - 10, y - 10);
            assert!(dx * dx + dy * dy <= r * r, "({x},{y}) outside the disc");
        }
        // the four axis extremes are filled
        assert_eq!(canvas.get(10 + r, 10), Some(INK));
        assert_eq!(canvas.get(10 - r, 10), Some(INK));
        assert_eq!(canvas.get(10, 10 + r), Some(INK));
        assert_eq!(canvas.get(10, 10 - r), Some(INK));
    }

    #[test]
    fn stamps_clip_at_the_edges() {
        let mut canvas = Canvas::new(8, 8, PAPER);
        let brush = Brush {
            color: INK,
            width: 6,
            shape: BrushShape::Square,
        };
        brush.stamp(&mut canvas, (0.0, 0.0));
        brush.stamp(&mut canvas, (7.0, 7.0));
        // only the in-bounds corner of each stamp landed
        assert_eq!(canvas.get(0, 0), Some(INK));
        assert_eq!(canvas.get(7, 7), Some(INK));
        assert_eq!(canvas.get(3, 3), Some(PAPER));
    }

    #[test]
    fn shape_cycle_wraps() {
        assert_eq!(BrushShape::Square.next(), BrushShape::Circle);
        assert_eq!(BrushShape::Circle.next(), BrushShape::Square);
    }

    #[test]
    fn restamping_is_idempotent() {
        let mut canvas = Canvas::new(9, 9, PAPER);
        let brush = Brush {
            color: INK,
            width: 3,
            shape: BrushShape::Square,
        };
        brush.stamp(&mut canvas, (4.0, 4.0));
        let once = canvas.pixels.clone();
        brush.stamp(&mut canvas, (4.0, 4.0));
        assert_eq!(canvas.pixels, once);
    }
}
