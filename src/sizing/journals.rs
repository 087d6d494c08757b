//! Figure size standards for academic journals.
//!
//! | code    | size                   | organisation                                   |
//! |---------|------------------------|------------------------------------------------|
//! | `pnas1` | 1-column               | Proceedings of the National Academy of Sciences |
//! | `pnas2` | 2-column               | "                                              |
//! | `pnas3` | landscape page         | "                                              |
//! | `ams1`  | 1-column               | American Meteorological Society                |
//! | `ams2`  | small 2-column         | "                                              |
//! | `ams3`  | medium 2-column        | "                                              |
//! | `ams4`  | full 2-column          | "                                              |
//! | `agu1`  | 1-column               | American Geophysical Union                     |
//! | `agu2`  | 2-column               | "                                              |
//! | `agu3`  | 1-column, full height  | "                                              |
//! | `agu4`  | 2-column, full height  | "                                              |

use crate::{
    core::{
        error::{FigError, Result},
        rc::RcParams,
    },
    sizing::units::SizeSpec,
};

/// A table entry: width alone, or width and height.
#[derive(Clone, Debug, PartialEq)]
pub enum JournalSize {
    Width(SizeSpec),
    WidthHeight(SizeSpec, SizeSpec),
}

impl JournalSize {
    /// `(width, height)` with `None` for a height the standard leaves open.
    #[must_use]
    pub fn pair(&self) -> (Option<SizeSpec>, Option<SizeSpec>) {
        match self {
            Self::Width(w) => (Some(w.clone()), None),
            Self::WidthHeight(w, h) => (Some(w.clone()), Some(h.clone())),
        }
    }
}

const fn w(spec: &'static str) -> JournalSize {
    JournalSize::Width(SizeSpec::unit(spec))
}

const fn wi(inches: f64) -> JournalSize {
    JournalSize::Width(SizeSpec::Inches(inches))
}

const fn wh(width: &'static str, height: &'static str) -> JournalSize {
    JournalSize::WidthHeight(SizeSpec::unit(width), SizeSpec::unit(height))
}

static JOURNALS: [(&str, JournalSize); 11] = [
    ("pnas1", w("8.7cm")),
    ("pnas2", w("11.4cm")),
    ("pnas3", w("17.8cm")),
    ("ams1", wi(3.2)),
    ("ams2", wi(4.5)),
    ("ams3", wi(5.5)),
    ("ams4", wi(6.5)),
    ("agu1", wh("95mm", "115mm")),
    ("agu2", wh("190mm", "115mm")),
    ("agu3", wh("95mm", "230mm")),
    ("agu4", wh("190mm", "230mm")),
];

/// Known journal codes in table order.
pub fn journal_codes() -> impl Iterator<Item = &'static str> {
    JOURNALS.iter().map(|(code, _)| *code)
}

/// Raw `(width, height)` specs for `code`; unit strings are left unconverted.
pub fn journals(code: &str) -> Result<(Option<SizeSpec>, Option<SizeSpec>)> {
    JOURNALS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, size)| size.pair())
        .ok_or_else(|| FigError::UnknownJournal {
            code: code.to_owned(),
            valid: journal_codes().collect(),
        })
}

/// `(width, height)` for `code` in inches.
pub fn journal_size(code: &str, rc: &RcParams) -> Result<(Option<f64>, Option<f64>)> {
    let (width, height) = journals(code)?;
    Ok((
        width.map(|s| s.inches(rc)).transpose()?,
        height.map(|s| s.inches(rc)).transpose()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::{journal_codes, journal_size, journals};
    use crate::{
        core::{error::FigError, rc::RcParams},
        sizing::units::SizeSpec,
    };

    #[test]
    fn single_entry_is_width_only() {
        let (w, h) = journals("pnas1").unwrap();
        assert_eq!(w, Some(SizeSpec::from("8.7cm")));
        assert_eq!(h, None);

        let (w, h) = journals("ams3").unwrap();
        assert_eq!(w, Some(SizeSpec::Inches(5.5)));
        assert_eq!(h, None);
    }

    #[test]
    fn pair_entry_has_height() {
        let (w, h) = journals("agu4").unwrap();
        assert_eq!(w, Some(SizeSpec::from("190mm")));
        assert_eq!(h, Some(SizeSpec::from("230mm")));
    }

    #[test]
    fn unknown_code_lists_options() {
        let err = journals("bogus").unwrap_err();
        let FigError::UnknownJournal { code, valid } = &err else {
            panic!("unexpected error {err}");
        };
        assert_eq!(code, "bogus");
        assert_eq!(valid, &journal_codes().collect::<Vec<_>>());
        assert!(err.to_string().contains("pnas1, pnas2, pnas3, ams1"));
    }

    #[test]
    fn sizes_convert_to_inches() {
        let rc = RcParams::default();
        assert_eq!(journal_size("ams1", &rc).unwrap(), (Some(3.2), None));

        let (w, h) = journal_size("agu1", &rc).unwrap();
        assert!((w.unwrap() - 95.0 * 0.03937).abs() < 1e-12);
        assert!((h.unwrap() - 115.0 * 0.03937).abs() < 1e-12);
    }
}
