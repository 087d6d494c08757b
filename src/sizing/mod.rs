pub mod journals;
pub mod units;

pub use journals::{JournalSize, journal_codes, journal_size, journals};
pub use units::{
    SizeSpec, Unit, parse_unit_spec, to_inches, unit_codes, units, units_value, units_value_with,
    units_with,
};
