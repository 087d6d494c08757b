//! Run-time style settings read by the unit table, plus the process-wide store.
//!
//! Settings use the plotting framework's dotted names (`figure.dpi`,
//! `savefig.dpi`, `font.size`, `axes.titlesize`), which TOML maps onto the
//! nested sections below without any renaming:
//!
//! ```toml
//! figure.dpi = 120
//! font.size = 9
//! axes.titlesize = "large"
//! ```
//!
//! Keys outside [`RC_KEYS`] are rejected when loading, so a misspelt key
//! fails instead of silently keeping its default.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{LazyLock, PoisonError, RwLock},
};

use log::debug;
use serde::Deserialize;

use crate::core::{
    constants::{DEFAULT_FIGURE_DPI, DEFAULT_FONT_SIZE, DEFAULT_SAVEFIG_DPI, FONT_SCALINGS},
    error::RcError,
};

/// Every key understood by [`RcParams::get`] and [`RcParams::set`].
pub const RC_KEYS: [&str; 4] = ["figure.dpi", "savefig.dpi", "font.size", "axes.titlesize"];

/// A font size in points, or a name relative to `font.size`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FontSize {
    Points(f64),
    Named(String),
}

impl FontSize {
    /// Size in points, resolving names against `base`.
    #[must_use]
    pub fn resolve(&self, base: f64) -> Option<f64> {
        match self {
            Self::Points(pt) => Some(*pt),
            Self::Named(name) => {
                let name = name.trim().to_ascii_lowercase();
                FONT_SCALINGS
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, scale)| base * scale)
            }
        }
    }
}

impl From<f64> for FontSize {
    #[inline]
    fn from(pt: f64) -> Self {
        Self::Points(pt)
    }
}

impl From<&str> for FontSize {
    #[inline]
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct FigureRc {
    dpi: f64,
}

impl Default for FigureRc {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_FIGURE_DPI,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct SavefigRc {
    dpi: f64,
}

impl Default for SavefigRc {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_SAVEFIG_DPI,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct FontRc {
    size: f64,
}

impl Default for FontRc {
    fn default() -> Self {
        Self {
            size: DEFAULT_FONT_SIZE,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct AxesRc {
    titlesize: FontSize,
}

impl Default for AxesRc {
    fn default() -> Self {
        Self {
            titlesize: FontSize::from("large"),
        }
    }
}

/// Validated snapshot of the settings the unit table depends on.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RcParams {
    figure: FigureRc,
    savefig: SavefigRc,
    font: FontRc,
    axes: AxesRc,
}

impl RcParams {
    #[inline]
    #[must_use]
    pub fn builder() -> RcBuilder {
        RcBuilder::default()
    }

    /// Screen resolution, used by the `px` unit.
    #[inline]
    #[must_use]
    pub fn figure_dpi(&self) -> f64 {
        self.figure.dpi
    }

    /// Saved-figure resolution, used by the `pp` unit.
    #[inline]
    #[must_use]
    pub fn savefig_dpi(&self) -> f64 {
        self.savefig.dpi
    }

    /// Base font size in points.
    #[inline]
    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font.size
    }

    /// Title font size in points.
    ///
    /// Validation guarantees the name resolves; the base size is the fallback
    /// for a snapshot that bypassed it.
    #[must_use]
    pub fn title_size(&self) -> f64 {
        self.axes
            .titlesize
            .resolve(self.font.size)
            .unwrap_or(self.font.size)
    }

    /// Look a setting up by its dotted name.
    pub fn get(&self, key: &str) -> Result<f64, RcError> {
        match key {
            "figure.dpi" => Ok(self.figure_dpi()),
            "savefig.dpi" => Ok(self.savefig_dpi()),
            "font.size" => Ok(self.font_size()),
            "axes.titlesize" => Ok(self.title_size()),
            _ => Err(RcError::UnknownKey(key.to_owned())),
        }
    }

    /// Change a setting by its dotted name. Rejected values leave `self` untouched.
    pub fn set(&mut self, key: &str, value: f64) -> Result<(), RcError> {
        let (key, slot) = match key {
            "figure.dpi" => ("figure.dpi", &mut self.figure.dpi),
            "savefig.dpi" => ("savefig.dpi", &mut self.savefig.dpi),
            "font.size" => ("font.size", &mut self.font.size),
            "axes.titlesize" => {
                positive("axes.titlesize", value)?;
                self.axes.titlesize = FontSize::Points(value);
                return Ok(());
            }
            _ => return Err(RcError::UnknownKey(key.to_owned())),
        };
        *slot = positive(key, value)?;
        Ok(())
    }

    /// Replace the title size, accepting relative names such as `"x-large"`.
    pub fn set_title_size(&mut self, size: impl Into<FontSize>) -> Result<(), RcError> {
        let size = size.into();
        check_font_size(&size, self.font.size)?;
        self.axes.titlesize = size;
        Ok(())
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self, RcError> {
        let Some(path) = default_rc_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, RcError> {
        let path = path.as_ref();
        if !path.is_file() {
            debug!("no rc file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| RcError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| RcError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded rc settings from {}", path.display());
        parsed.validated()
    }

    fn validated(self) -> Result<Self, RcError> {
        positive("figure.dpi", self.figure.dpi)?;
        positive("savefig.dpi", self.savefig.dpi)?;
        positive("font.size", self.font.size)?;
        check_font_size(&self.axes.titlesize, self.font.size)?;
        Ok(self)
    }
}

fn positive(key: &'static str, value: f64) -> Result<f64, RcError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RcError::NonPositive { key, value })
    }
}

fn check_font_size(size: &FontSize, base: f64) -> Result<f64, RcError> {
    match size.resolve(base) {
        Some(pt) => positive("axes.titlesize", pt),
        None => match size {
            FontSize::Named(name) => Err(RcError::InvalidFontSize(name.clone())),
            FontSize::Points(pt) => Err(RcError::InvalidFontSize(pt.to_string())),
        },
    }
}

/// Fluent builder; every value is checked in `build`.
#[derive(Debug, Default)]
pub struct RcBuilder {
    figure_dpi: Option<f64>,
    savefig_dpi: Option<f64>,
    font_size: Option<f64>,
    title_size: Option<FontSize>,
}

impl RcBuilder {
    #[inline]
    #[must_use]
    pub fn figure_dpi(mut self, dpi: f64) -> Self {
        self.figure_dpi = Some(dpi);
        self
    }
    #[inline]
    #[must_use]
    pub fn savefig_dpi(mut self, dpi: f64) -> Self {
        self.savefig_dpi = Some(dpi);
        self
    }
    #[inline]
    #[must_use]
    pub fn font_size(mut self, pt: f64) -> Self {
        self.font_size = Some(pt);
        self
    }
    #[inline]
    #[must_use]
    pub fn title_size(mut self, size: impl Into<FontSize>) -> Self {
        self.title_size = Some(size.into());
        self
    }

    pub fn build(self) -> Result<RcParams, RcError> {
        let mut rc = RcParams::default();
        if let Some(dpi) = self.figure_dpi {
            rc.figure.dpi = dpi;
        }
        if let Some(dpi) = self.savefig_dpi {
            rc.savefig.dpi = dpi;
        }
        if let Some(pt) = self.font_size {
            rc.font.size = pt;
        }
        if let Some(size) = self.title_size {
            rc.axes.titlesize = size;
        }
        rc.validated()
    }
}

/// Ergonomic `?` on a builder chain.
impl From<RcBuilder> for Result<RcParams, RcError> {
    fn from(b: RcBuilder) -> Self {
        b.build()
    }
}

/// `FIGUTIL_RC_PATH`, then the XDG / home config directories.
#[must_use]
pub fn default_rc_path() -> Option<PathBuf> {
    let non_empty = |key: &str| std::env::var_os(key).filter(|v| !v.is_empty());

    if let Some(explicit) = non_empty("FIGUTIL_RC_PATH") {
        return Some(PathBuf::from(explicit));
    }
    if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join("figutil").join("rc.toml"));
    }
    non_empty("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("figutil")
            .join("rc.toml")
    })
}

// --- Process-wide store ---

static GLOBAL: LazyLock<RwLock<RcParams>> = LazyLock::new(|| RwLock::new(RcParams::default()));

/// Snapshot of the process-wide settings.
#[must_use]
pub fn current() -> RcParams {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Install `params` as the process-wide settings, returning the previous ones.
pub fn replace(params: RcParams) -> RcParams {
    let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *guard, params)
}

/// Edit a copy of the process-wide settings and store it once validated;
/// nothing is stored if `edit` fails.
///
/// No lock is held while `edit` runs, so it may read the settings itself.
/// Concurrent updates are last-writer-wins.
pub fn update<F>(edit: F) -> Result<(), RcError>
where
    F: FnOnce(&mut RcParams) -> Result<(), RcError>,
{
    let mut next = current();
    edit(&mut next)?;
    let next = next.validated()?;
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = next;
    Ok(())
}
