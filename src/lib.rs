//! Public-facing crate root – re-exports.
//!
//! * [`units`] turns sizes written with arbitrary units into inches.
//! * [`journals`] returns the figure size standards of several journals.
//! * [`arange`] and [`edges`] help build contour levels, tick positions and
//!   bin boundaries.
//! * [`deprecation`] keeps old names working while pointing users at new ones.

pub mod arrays;
pub mod core;
pub mod deprecation;
pub mod sizing;

pub use arrays::{arange, arange_between, arange_step, arange_to, edges, edges_1d};
pub use crate::core::{
    error::{FigError, RcError, Result},
    rc::{self, FontSize, RcBuilder, RcParams},
};
pub use sizing::{
    JournalSize, SizeSpec, Unit, journal_codes, journal_size, journals, to_inches, units,
    units_value, units_value_with, units_with,
};
