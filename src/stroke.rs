// Stroke session: turns per-frame mouse samples into brush stamp centers.
//
// Two states. Idle (button up, no previous point) and Stroking (button
// held, previous point recorded). The first held tick stamps once; every
// later held tick interpolates a chain of stamps from the previous sample
// to the current one, so fast drags still read as a continuous line.

/// Fixed sampling rate along a segment: the step is `distance / DENSITY`,
/// so a segment gets about this many stamps regardless of its length.
pub const DENSITY: f32 = 100.0;

/// Transient per-stroke state. Holds the previous pointer sample while the
/// button stays down; cleared on release, so two separate presses never get
/// a connecting line.
#[derive(Default)]
pub struct StrokeSession {
    prev: Option<(f32, f32)>,
}

impl StrokeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's mouse sample. Returns the stamp centers to paint
    /// this tick, in canvas coordinates.
    pub fn tick(&mut self, held: bool, pos: (f32, f32)) -> Vec<(f32, f32)> {
        if !held {
            self.prev = None;
            return Vec::new();
        }
        let stamps = match self.prev {
            // First contact: one stamp, even for a stationary click.
            None => vec![pos],
            // Still held: chain of stamps along the dragged segment.
            // A zero-length drag yields nothing; the point is already inked.
            Some(prev) => interpolate(prev, pos),
        };
        self.prev = Some(pos);
        stamps
    }

    /// Abandon the current stroke (used when a text prompt opens).
    pub fn reset(&mut self) {
        self.prev = None;
    }
}

/// Stamp centers along the straight segment from `start` to `end`.
/// Walks offset `i` from 0 by `distance / DENSITY` in the direction
/// `atan2(dy, dx)`, stopping once `i` reaches the distance. Overlap with
/// stamps of neighboring ticks is fine; stamping is idempotent.
pub fn interpolate(start: (f32, f32), end: (f32, f32)) -> Vec<(f32, f32)> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist == 0.0 {
        return Vec::new();
    }
    let step = dist / DENSITY;
    let angle = dy.atan2(dx);
    let (sin, cos) = angle.sin_cos();
    let mut out = Vec::new();
    let mut i = 0.0;
    while i < dist {
        out.push((start.0 + i * cos, start.1 + i * sin));
        i += step;
    }
    out
}
