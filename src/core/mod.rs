//! Settings, constants and errors shared by every helper.

pub mod constants;
pub mod error;
pub mod rc;

// re-export frequently-used items for convenience
pub use error::{FigError, RcError, Result};
pub use rc::{FontSize, RcBuilder, RcParams};
