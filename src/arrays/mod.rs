//! Array helpers for contour levels, tick positions and bin boundaries.

pub mod arange;
pub mod edges;

pub use arange::{arange, arange_between, arange_step, arange_to};
pub use edges::{edges, edges_1d};
