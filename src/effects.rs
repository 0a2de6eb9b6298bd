//! Target-independent UI helpers: the pointer-reactive grid math, the
//! typewriter headline stepper, and keyboard activation rules. Kept free of
//! browser types so everything runs under plain `cargo test`; the components
//! feed in container sizes, cursor positions, key names and a random source.

/// Spacing between grid points, in CSS pixels.
pub const GRID_PITCH: f64 = 40.0;
/// Radius inside which points react to the cursor.
pub const GLOW_RADIUS: f64 = 200.0;

#[derive(Clone, PartialEq, Debug)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
    /// Opacity while the cursor is outside the container.
    pub rest_opacity: f64,
}

/// Lays out a full grid over the container, one point per `GRID_PITCH` cell
/// including both edges. `random` supplies values in `[0, 1)`.
pub fn build_grid(width: f64, height: f64, mut random: impl FnMut() -> f64) -> Vec<GridPoint> {
    let cols = (width / GRID_PITCH).floor().max(0.0) as usize;
    let rows = (height / GRID_PITCH).floor().max(0.0) as usize;
    let mut points = Vec::with_capacity((cols + 1) * (rows + 1));
    for col in 0..=cols {
        for row in 0..=rows {
            points.push(GridPoint {
                x: col as f64 * GRID_PITCH,
                y: row as f64 * GRID_PITCH,
                rest_opacity: random() * 0.5 + 0.1,
            });
        }
    }
    points
}

/// Resting opacity after the cursor leaves: dimmer than the initial spread.
pub fn settle_opacity(random: f64) -> f64 {
    random * 0.2 + 0.1
}

/// Inverse-distance intensity in `[0, 1]`; zero at and beyond `GLOW_RADIUS`.
pub fn glow_intensity(point: &GridPoint, cursor_x: f64, cursor_y: f64) -> f64 {
    let distance = ((point.x - cursor_x).powi(2) + (point.y - cursor_y).powi(2)).sqrt();
    if distance >= GLOW_RADIUS {
        0.0
    } else {
        1.0 - distance / GLOW_RADIUS
    }
}

/// Rendered appearance of one point given the cursor position (if any).
/// Returns `(opacity, scale, blur)`.
pub fn point_appearance(point: &GridPoint, cursor: Option<(f64, f64)>) -> (f64, f64, f64) {
    let Some((cx, cy)) = cursor else {
        return (point.rest_opacity, 1.0, 0.5);
    };
    let intensity = glow_intensity(point, cx, cy);
    if intensity <= 0.0 {
        (0.1, 1.0, 0.5)
    } else {
        (
            (0.1 + intensity * 0.9).min(1.0),
            1.0 + intensity * 0.6,
            (0.5 - intensity).max(0.0),
        )
    }
}

/// Ticks between finishing a phrase and starting to delete it. At the 80 ms
/// tick the hero uses, this holds the full phrase for about two seconds.
pub const TYPEWRITER_HOLD_TICKS: u16 = 25;
/// Tick period for the typewriter interval.
pub const TYPEWRITER_TICK_MS: u32 = 80;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TypePhase {
    Typing,
    Holding(u16),
    Deleting,
}

/// Character-at-a-time typewriter over a phrase list: type, hold, delete,
/// move to the next phrase, wrap.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Typewriter {
    pub phrase: usize,
    pub shown: usize,
    pub phase: TypePhase,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self {
            phrase: 0,
            shown: 0,
            phase: TypePhase::Typing,
        }
    }
}

impl Typewriter {
    pub fn step(self, phrases: &[String]) -> Self {
        if phrases.is_empty() {
            return Self::default();
        }
        let phrase = self.phrase % phrases.len();
        let len = phrases[phrase].chars().count();
        match self.phase {
            TypePhase::Typing if self.shown < len => Self {
                phrase,
                shown: self.shown + 1,
                phase: TypePhase::Typing,
            },
            TypePhase::Typing => Self {
                phrase,
                shown: len,
                phase: TypePhase::Holding(TYPEWRITER_HOLD_TICKS),
            },
            TypePhase::Holding(0) => Self {
                phrase,
                shown: self.shown.min(len),
                phase: TypePhase::Deleting,
            },
            TypePhase::Holding(remaining) => Self {
                phrase,
                shown: self.shown.min(len),
                phase: TypePhase::Holding(remaining - 1),
            },
            TypePhase::Deleting if self.shown > 0 => Self {
                phrase,
                shown: self.shown - 1,
                phase: TypePhase::Deleting,
            },
            TypePhase::Deleting => Self {
                phrase: (phrase + 1) % phrases.len(),
                shown: 0,
                phase: TypePhase::Typing,
            },
        }
    }

    pub fn visible<'a>(&self, phrases: &'a [String]) -> &'a str {
        let Some(phrase) = phrases.get(self.phrase % phrases.len().max(1)) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((index, _)) => &phrase[..index],
            None => phrase,
        }
    }
}

/// Keys that activate an element carrying a button role, per the standard
/// button interaction model: Enter and Space.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_both_edges() {
        let points = build_grid(120.0, 80.0, || 0.5);
        // 120/40 = 3 columns plus the edge, 80/40 = 2 rows plus the edge.
        assert_eq!(points.len(), 4 * 3);
        assert!(points.iter().any(|p| p.x == 120.0 && p.y == 80.0));
        assert!(points.iter().all(|p| p.rest_opacity > 0.0));
    }

    #[test]
    fn intensity_is_full_at_cursor_and_zero_at_radius() {
        let point = GridPoint {
            x: 100.0,
            y: 100.0,
            rest_opacity: 0.2,
        };
        assert_eq!(glow_intensity(&point, 100.0, 100.0), 1.0);
        assert_eq!(glow_intensity(&point, 300.0, 100.0), 0.0);
        let near = glow_intensity(&point, 150.0, 100.0);
        let far = glow_intensity(&point, 190.0, 100.0);
        assert!(near > far && far > 0.0);
    }

    #[test]
    fn appearance_is_bounded() {
        let point = GridPoint {
            x: 0.0,
            y: 0.0,
            rest_opacity: 0.3,
        };
        let (opacity, scale, blur) = point_appearance(&point, Some((10.0, 0.0)));
        assert!(opacity <= 1.0 && opacity >= 0.1);
        assert!((1.0..=1.6).contains(&scale));
        assert!((0.0..=0.5).contains(&blur));

        let resting = point_appearance(&point, None);
        assert_eq!(resting, (0.3, 1.0, 0.5));
    }

    #[test]
    fn typewriter_types_holds_deletes_and_wraps() {
        let phrases = vec!["ab".to_string(), "c".to_string()];
        let mut tw = Typewriter::default();

        tw = tw.step(&phrases);
        assert_eq!(tw.visible(&phrases), "a");
        tw = tw.step(&phrases);
        assert_eq!(tw.visible(&phrases), "ab");

        // Enter and exhaust the hold.
        tw = tw.step(&phrases);
        assert!(matches!(tw.phase, TypePhase::Holding(_)));
        for _ in 0..=TYPEWRITER_HOLD_TICKS {
            tw = tw.step(&phrases);
        }
        assert_eq!(tw.phase, TypePhase::Deleting);

        // Delete both characters, then wrap to the next phrase.
        tw = tw.step(&phrases);
        tw = tw.step(&phrases);
        assert_eq!(tw.visible(&phrases), "");
        tw = tw.step(&phrases);
        assert_eq!(tw.phrase, 1);
        assert_eq!(tw.phase, TypePhase::Typing);
    }

    #[test]
    fn typewriter_survives_an_empty_phrase_list() {
        let tw = Typewriter::default().step(&[]);
        assert_eq!(tw, Typewriter::default());
        assert_eq!(tw.visible(&[]), "");
    }

    #[test]
    fn enter_and_space_activate_a_button_role() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(is_activation_key("Spacebar"));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("a"));
    }
}
