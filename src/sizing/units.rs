//! Flexible size units.
//!
//! Sizes are either plain numbers, taken to be inches, or strings of the form
//! `"123.456unit"`. The recognised units are
//!
//! | code | meaning                                              |
//! |------|------------------------------------------------------|
//! | `m`  | metres                                               |
//! | `cm` | centimetres                                          |
//! | `mm` | millimetres                                          |
//! | `ft` | feet                                                 |
//! | `in` | inches                                               |
//! | `pt` | points (1/72 inch)                                   |
//! | `px` | pixels on screen, at `figure.dpi`                    |
//! | `pp` | pixels once printed, at `savefig.dpi`                |
//! | `em` | em-square for `font.size`                            |
//! | `ex` | ex-square for `font.size`                            |
//! | `lh` | line height (1.2 em-squares) for `font.size`         |
//! | `EM` | em-square for `axes.titlesize`                       |
//! | `EX` | ex-square for `axes.titlesize`                       |
//! | `LH` | line height (1.2 em-squares) for `axes.titlesize`    |
//!
//! Display and font units depend on [`RcParams`], which is consulted afresh on
//! every conversion.

use std::{borrow::Cow, fmt};

use serde_json::Value;

use crate::core::{
    constants::{
        EX_PER_EM, INCHES_PER_CM, INCHES_PER_FT, INCHES_PER_M, INCHES_PER_MM, LINE_HEIGHT_PER_EM,
        POINTS_PER_INCH,
    },
    error::{FigError, Result},
    rc::{self, RcParams},
};

/// One entry of the unit table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unit {
    Inch,
    Metre,
    Foot,
    Centimetre,
    Millimetre,
    Point,
    ScreenPixel,
    PrintPixel,
    Em,
    Ex,
    LineHeight,
    TitleEm,
    TitleEx,
    TitleLineHeight,
}

impl Unit {
    /// Table order, which is also the order used in error messages.
    pub const ALL: [Unit; 14] = [
        Self::Inch,
        Self::Metre,
        Self::Foot,
        Self::Centimetre,
        Self::Millimetre,
        Self::Point,
        Self::ScreenPixel,
        Self::PrintPixel,
        Self::Em,
        Self::Ex,
        Self::LineHeight,
        Self::TitleEm,
        Self::TitleEx,
        Self::TitleLineHeight,
    ];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Inch => "in",
            Self::Metre => "m",
            Self::Foot => "ft",
            Self::Centimetre => "cm",
            Self::Millimetre => "mm",
            Self::Point => "pt",
            Self::ScreenPixel => "px",
            Self::PrintPixel => "pp",
            Self::Em => "em",
            Self::Ex => "ex",
            Self::LineHeight => "lh",
            Self::TitleEm => "EM",
            Self::TitleEx => "EX",
            Self::TitleLineHeight => "LH",
        }
    }

    /// Codes are case-sensitive: `em` follows `font.size`, `EM` the title size.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.code() == code)
    }

    /// Inches per one of this unit under `rc`.
    #[must_use]
    pub fn inches(self, rc: &RcParams) -> f64 {
        let em = rc.font_size() / POINTS_PER_INCH;
        let title_em = rc.title_size() / POINTS_PER_INCH;
        match self {
            Self::Inch => 1.0,
            Self::Metre => INCHES_PER_M,
            Self::Foot => INCHES_PER_FT,
            Self::Centimetre => INCHES_PER_CM,
            Self::Millimetre => INCHES_PER_MM,
            Self::Point => 1.0 / POINTS_PER_INCH,
            Self::ScreenPixel => 1.0 / rc.figure_dpi(),
            Self::PrintPixel => 1.0 / rc.savefig_dpi(),
            Self::Em => em,
            Self::Ex => EX_PER_EM * em,
            Self::LineHeight => LINE_HEIGHT_PER_EM * em,
            Self::TitleEm => title_em,
            Self::TitleEx => EX_PER_EM * title_em,
            Self::TitleLineHeight => LINE_HEIGHT_PER_EM * title_em,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// All unit codes in table order.
#[must_use]
pub fn unit_codes() -> Vec<&'static str> {
    Unit::ALL.iter().map(|u| u.code()).collect()
}

/// A size as written by the user: inches, or a unit string.
#[derive(Clone, Debug, PartialEq)]
pub enum SizeSpec {
    Inches(f64),
    Unit(Cow<'static, str>),
}

impl SizeSpec {
    /// Borrowing constructor usable in `const` tables.
    #[must_use]
    pub const fn unit(spec: &'static str) -> Self {
        Self::Unit(Cow::Borrowed(spec))
    }

    /// Convert to inches using the unit table built from `rc`.
    pub fn inches(&self, rc: &RcParams) -> Result<f64> {
        match self {
            Self::Inches(v) => Ok(*v),
            Self::Unit(spec) => parse_unit_spec(spec, rc),
        }
    }
}

impl From<f64> for SizeSpec {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Inches(v)
    }
}

impl From<i32> for SizeSpec {
    #[inline]
    fn from(v: i32) -> Self {
        Self::Inches(f64::from(v))
    }
}

impl From<&str> for SizeSpec {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Unit(Cow::Owned(s.to_owned()))
    }
}

impl From<String> for SizeSpec {
    #[inline]
    fn from(s: String) -> Self {
        Self::Unit(Cow::Owned(s))
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inches(v) => write!(f, "{v}"),
            Self::Unit(s) => f.write_str(s),
        }
    }
}

impl TryFrom<&Value> for SizeSpec {
    type Error = FigError;

    /// Accepts JSON numbers and strings; `null` has no `SizeSpec` form and is
    /// rejected here (see [`units_value`] for the `None` pass-through).
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(Self::Inches)
                .ok_or(FigError::InvalidSizeType { found: "number" }),
            Value::String(s) => Ok(Self::from(s.as_str())),
            other => Err(FigError::InvalidSizeType {
                found: json_type_name(other),
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Split `"12.5cm"` into `("12.5", "cm")`. The numeral may be empty.
#[inline]
fn split_spec(spec: &str) -> (&str, &str) {
    let end = spec
        .bytes()
        .position(|b| !(b.is_ascii_digit() || b == b'.'))
        .unwrap_or(spec.len());
    spec.split_at(end)
}

/// Parse a `"<number><unit>"` string into inches.
pub fn parse_unit_spec(spec: &str, rc: &RcParams) -> Result<f64> {
    let (num, code) = split_spec(spec);
    let invalid = || FigError::InvalidUnitSpec {
        spec: spec.to_owned(),
        valid: unit_codes(),
    };
    let unit = Unit::from_code(code).ok_or_else(invalid)?;
    let value = lexical_core::parse::<f64>(num.as_bytes()).map_err(|_| invalid())?;
    Ok(value * unit.inches(rc))
}

/// Convert a size to inches against the process-wide settings.
///
/// `None` stays `None`; numbers are already inches.
pub fn units(value: Option<SizeSpec>) -> Result<Option<f64>> {
    units_with(value, &rc::current())
}

/// [`units`] against an explicit settings snapshot.
pub fn units_with(value: Option<SizeSpec>, rc: &RcParams) -> Result<Option<f64>> {
    value.map(|spec| spec.inches(rc)).transpose()
}

/// Convert a size that must be present.
pub fn to_inches(value: impl Into<SizeSpec>) -> Result<f64> {
    value.into().inches(&rc::current())
}

/// Convert a dynamically typed size: `null`, a number or a unit string.
pub fn units_value(value: &Value) -> Result<Option<f64>> {
    units_value_with(value, &rc::current())
}

pub fn units_value_with(value: &Value, rc: &RcParams) -> Result<Option<f64>> {
    if value.is_null() {
        return Ok(None);
    }
    SizeSpec::try_from(value)?.inches(rc).map(Some)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{SizeSpec, Unit, parse_unit_spec, split_spec, units_value_with, units_with};
    use crate::core::{error::FigError, rc::RcParams};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn split_keeps_empty_numeral() {
        assert_eq!(split_spec("12.5cm"), ("12.5", "cm"));
        assert_eq!(split_spec("cm"), ("", "cm"));
        assert_eq!(split_spec("3"), ("3", ""));
        assert_eq!(split_spec("-2cm"), ("", "-2cm"));
    }

    #[test]
    fn physical_units() {
        let rc = RcParams::default();
        assert!(close(parse_unit_spec("2cm", &rc).unwrap(), 2.0 * 0.3937));
        assert!(close(parse_unit_spec("1in", &rc).unwrap(), 1.0));
        assert!(close(parse_unit_spec("72pt", &rc).unwrap(), 1.0));
        assert!(close(parse_unit_spec("10mm", &rc).unwrap(), 0.3937));
        assert!(close(parse_unit_spec("0.5ft", &rc).unwrap(), 6.0));
        assert!(close(parse_unit_spec(".5m", &rc).unwrap(), 0.5 * 39.37));
    }

    #[test]
    fn display_and_font_units_follow_rc() {
        let rc = RcParams::builder()
            .figure_dpi(50.0)
            .savefig_dpi(200.0)
            .font_size(9.0)
            .title_size(18.0)
            .build()
            .unwrap();
        assert!(close(parse_unit_spec("100px", &rc).unwrap(), 2.0));
        assert!(close(parse_unit_spec("100pp", &rc).unwrap(), 0.5));
        assert!(close(parse_unit_spec("8em", &rc).unwrap(), 1.0));
        assert!(close(parse_unit_spec("16ex", &rc).unwrap(), 1.0));
        assert!(close(parse_unit_spec("1lh", &rc).unwrap(), 1.2 * 9.0 / 72.0));
        assert!(close(parse_unit_spec("4EM", &rc).unwrap(), 1.0));
        assert!(close(parse_unit_spec("8EX", &rc).unwrap(), 1.0));
        assert!(close(parse_unit_spec("1LH", &rc).unwrap(), 1.2 * 18.0 / 72.0));
    }

    #[test]
    fn every_factor_is_positive() {
        let rc = RcParams::default();
        assert!(Unit::ALL.iter().all(|u| u.inches(&rc) > 0.0));
    }

    #[test]
    fn none_and_numbers_pass_through() {
        let rc = RcParams::default();
        assert_eq!(units_with(None, &rc).unwrap(), None);
        assert_eq!(units_with(Some(SizeSpec::from(5)), &rc).unwrap(), Some(5.0));
        assert_eq!(units_with(Some(2.5.into()), &rc).unwrap(), Some(2.5));
    }

    #[test]
    fn rejects_bad_specs() {
        let rc = RcParams::default();
        for spec in ["5xyz", "cm", "1.2.3cm", "-2cm", "", "5 cm", "5CM"] {
            let err = parse_unit_spec(spec, &rc).unwrap_err();
            assert!(
                matches!(&err, FigError::InvalidUnitSpec { spec: s, .. } if s == spec),
                "{spec:?} gave {err}"
            );
        }
    }

    #[test]
    fn invalid_spec_lists_units() {
        let err = parse_unit_spec("5xyz", &RcParams::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid size spec \"5xyz\"; valid units are in, m, ft, cm, mm, pt, px, pp, em, ex, lh, EM, EX, LH"
        );
    }

    #[test]
    fn dynamic_values() {
        let rc = RcParams::default();
        assert_eq!(units_value_with(&json!(null), &rc).unwrap(), None);
        assert_eq!(units_value_with(&json!(3), &rc).unwrap(), Some(3.0));
        assert_eq!(units_value_with(&json!("144pt"), &rc).unwrap(), Some(2.0));
        assert!(matches!(
            units_value_with(&json!(true), &rc),
            Err(FigError::InvalidSizeType { found: "bool" })
        ));
        assert!(matches!(
            units_value_with(&json!([1, 2]), &rc),
            Err(FigError::InvalidSizeType { found: "array" })
        ));
    }
}
