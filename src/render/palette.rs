//! Color tokens used by mission content and the map builder

/// Tokens offered by the interactive builder's color picker
pub const BUILDER_COLORS: [&str; 11] = [
    "bg-red-600",
    "bg-orange-600",
    "bg-amber-600",
    "bg-yellow-600",
    "bg-lime-600",
    "bg-green-600",
    "bg-cyan-600",
    "bg-blue-600",
    "bg-violet-600",
    "bg-fuchsia-600",
    "exclusion-zone",
];

/// Paint for a zone, object or swatch
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub rgb: (u8, u8, u8),
    pub opacity: f64,
}

impl Fill {
    const fn solid(r: u8, g: u8, b: u8) -> Self {
        Fill { rgb: (r, g, b), opacity: 1.0 }
    }

    const fn translucent(r: u8, g: u8, b: u8, opacity: f64) -> Self {
        Fill { rgb: (r, g, b), opacity }
    }

    /// `rgb(r,g,b)` like the renderer's other color output
    pub fn to_rgb_string(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("rgb({},{},{})", r, g, b)
    }
}

/// Fallback for empty or unknown tokens
pub const NEUTRAL: Fill = Fill::solid(168, 162, 158);
pub const INK: Fill = Fill::solid(0, 0, 0);
pub const TABLE: Fill = Fill::solid(231, 229, 228);
pub const DOOR: Fill = Fill::solid(34, 211, 238);

fn token_fill(token: &str) -> Option<Fill> {
    Some(match token {
        "bg-red-600" => Fill::solid(220, 38, 38),
        "bg-orange-600" => Fill::solid(234, 88, 12),
        "bg-amber-600" => Fill::solid(217, 119, 6),
        "bg-yellow-600" => Fill::solid(202, 138, 4),
        "bg-lime-600" => Fill::solid(101, 163, 13),
        "bg-green-600" => Fill::solid(22, 163, 74),
        "bg-cyan-600" => Fill::solid(8, 145, 178),
        "bg-blue-600" => Fill::solid(37, 99, 235),
        "bg-violet-600" => Fill::solid(124, 58, 237),
        "bg-fuchsia-600" => Fill::solid(192, 38, 211),
        "bg-black" => INK,
        "bg-white" => Fill::solid(255, 255, 255),
        "exclusion-zone" => Fill::translucent(0, 0, 0, 0.35),
        "obj-room" => Fill::translucent(120, 113, 108, 0.6),
        _ => return None,
    })
}

/// Resolve a color string (one or more space-separated tokens) to a fill.
///
/// The first recognized token wins; unknown strings fall back to [`NEUTRAL`].
pub fn resolve_color(color: &str) -> Fill {
    color
        .split_whitespace()
        .find_map(token_fill)
        .unwrap_or(NEUTRAL)
}
