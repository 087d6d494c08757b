//! A collection of constants.

/// Typographic points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Inches per metre, as used by the physical unit table.
pub const INCHES_PER_M: f64 = 39.37;
/// Inches per foot.
pub const INCHES_PER_FT: f64 = 12.0;
/// Inches per centimetre.
pub const INCHES_PER_CM: f64 = 0.3937;
/// Inches per millimetre.
pub const INCHES_PER_MM: f64 = 0.03937;

/// An ex-square is roughly half an em-square.
pub const EX_PER_EM: f64 = 0.5;
/// Default line spacing is 1.2 em-squares.
pub const LINE_HEIGHT_PER_EM: f64 = 1.2;

/// `figure.dpi` when nothing else is configured.
pub const DEFAULT_FIGURE_DPI: f64 = 100.0;
/// `savefig.dpi` when nothing else is configured.
pub const DEFAULT_SAVEFIG_DPI: f64 = 300.0;
/// `font.size` in points when nothing else is configured.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Relative font size names and their scaling against `font.size`.
pub const FONT_SCALINGS: &[(&str, f64)] = &[
    ("xx-small", 0.579),
    ("x-small", 0.694),
    ("small", 0.833),
    ("medium", 1.0),
    ("large", 1.2),
    ("x-large", 1.44),
    ("xx-large", 1.728),
    ("larger", 1.2),
    ("smaller", 0.833),
];
