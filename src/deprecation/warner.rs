//! Warning emission pointed at the user's own code.
//!
//! A warning is reported against the first call frame that lies outside the
//! [`Boundary`] (this crate and its host plotting framework by default).
//! Frames are handed in explicitly, innermost first; the deprecation wrappers
//! build them with `#[track_caller]` so the reported site is the caller's.
//! If every frame is internal the innermost one is used.

use std::{
    borrow::Cow,
    fmt,
    panic::Location,
    sync::{Arc, LazyLock, Mutex, PoisonError, RwLock},
};

use log::warn;

/// Namespaces skipped when no other boundary is configured.
pub const DEFAULT_BOUNDARY: [&str; 2] = ["figutil", "plotters"];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WarningCategory {
    Deprecation,
    User,
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deprecation => f.write_str("FigutilDeprecationWarning"),
            Self::User => f.write_str("FigutilWarning"),
        }
    }
}

/// One emitted warning.
#[derive(Clone, Debug, PartialEq)]
pub struct Warning {
    pub message: String,
    pub category: WarningCategory,
    /// 1-based position of the reported frame, counted from the innermost.
    pub stack_level: usize,
    pub location: Option<&'static Location<'static>>,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = self.location {
            write!(f, "{}:{}: ", loc.file(), loc.line())?;
        }
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Where warnings end up.
pub trait WarningSink: Send + Sync {
    fn emit(&self, warning: &Warning);
}

/// Forwards to the `log` facade at `warn` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn emit(&self, warning: &Warning) {
        warn!(target: "figutil::warnings", "{warning}");
    }
}

/// Keeps every warning for later inspection. Clones share storage.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink(Arc<Mutex<Vec<Warning>>>);

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far.
    #[must_use]
    pub fn take(&self) -> Vec<Warning> {
        std::mem::take(&mut *self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|w| w.message.clone())
            .collect()
    }
}

impl WarningSink for CollectingSink {
    fn emit(&self, warning: &Warning) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning.clone());
    }
}

/// A call site and the namespace it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct CallFrame {
    pub namespace: Cow<'static, str>,
    pub location: &'static Location<'static>,
}

impl CallFrame {
    pub fn new(namespace: impl Into<Cow<'static, str>>, location: &'static Location<'static>) -> Self {
        Self {
            namespace: namespace.into(),
            location,
        }
    }

    /// The caller's site; its namespace is the source path.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location)
    }
}

/// Namespace prefixes whose frames are never reported.
///
/// A prefix matches a module path or a relative source path by whole leading
/// segments: `figutil` covers `figutil::units` and `figutil/src/lib.rs`, not
/// `figutils`. Absolute source paths, as recorded for dependencies, match when
/// they pass through the crate's directory, either `<prefix>-<version>/` as
/// unpacked from a registry or `<prefix>/src/` for a local checkout.
#[derive(Clone, Debug, PartialEq)]
pub struct Boundary {
    prefixes: Vec<Cow<'static, str>>,
}

impl Boundary {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_internal(&self, namespace: &str) -> bool {
        self.prefixes
            .iter()
            .any(|p| leads_with(namespace, p) || in_crate_dir(namespace, p))
    }
}

fn leads_with(namespace: &str, prefix: &str) -> bool {
    namespace.strip_prefix(prefix).is_some_and(|rest| {
        rest.is_empty() || rest.starts_with("::") || rest.starts_with('/')
    })
}

fn in_crate_dir(path: &str, prefix: &str) -> bool {
    let mut parts = path.split(['/', '\\']).peekable();
    while let Some(part) = parts.next() {
        let versioned = part
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|version| version.starts_with(|c: char| c.is_ascii_digit()));
        if versioned || (part == prefix && parts.peek() == Some(&"src")) {
            return true;
        }
    }
    false
}

impl Default for Boundary {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDARY)
    }
}

/// Emits warnings through a sink, locating the reported frame via a boundary.
#[derive(Clone)]
pub struct Warner {
    boundary: Arc<Boundary>,
    sink: Arc<dyn WarningSink>,
}

impl fmt::Debug for Warner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Warner")
            .field("boundary", &self.boundary)
            .finish_non_exhaustive()
    }
}

impl Default for Warner {
    fn default() -> Self {
        Self::new(Boundary::default(), LogSink)
    }
}

static GLOBAL: LazyLock<RwLock<Warner>> = LazyLock::new(|| RwLock::new(Warner::default()));

impl Warner {
    pub fn new(boundary: Boundary, sink: impl WarningSink + 'static) -> Self {
        Self {
            boundary: Arc::new(boundary),
            sink: Arc::new(sink),
        }
    }

    /// Default boundary, custom sink.
    pub fn with_sink(sink: impl WarningSink + 'static) -> Self {
        Self::new(Boundary::default(), sink)
    }

    #[must_use]
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// The process-wide warner used when no explicit one is given.
    #[must_use]
    pub fn global() -> Self {
        GLOBAL
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the process-wide warner, returning the previous one.
    pub fn install_global(warner: Self) -> Self {
        let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, warner)
    }

    /// 1-based level and frame to report for `stack` (innermost first).
    #[must_use]
    pub fn locate<'a>(&self, stack: &'a [CallFrame]) -> (usize, Option<&'a CallFrame>) {
        stack
            .iter()
            .position(|f| !self.boundary.is_internal(&f.namespace))
            .map_or((1, stack.first()), |i| (i + 1, stack.get(i)))
    }

    /// Emit `message` against the first external frame of `stack`.
    pub fn warn(&self, message: impl Into<String>, category: WarningCategory, stack: &[CallFrame]) {
        let (stack_level, frame) = self.locate(stack);
        self.sink.emit(&Warning {
            message: message.into(),
            category,
            stack_level,
            location: frame.map(|f| f.location),
        });
    }

    /// Emit a deprecation warning attributed to the caller.
    #[track_caller]
    pub fn deprecated(&self, message: impl Into<String>) {
        let stack = [
            CallFrame::new(module_path!(), shim_location()),
            CallFrame::caller(),
        ];
        self.warn(message, WarningCategory::Deprecation, &stack);
    }
}

fn shim_location() -> &'static Location<'static> {
    Location::caller()
}

#[cfg(test)]
mod tests {
    use std::panic::Location;

    use super::{Boundary, CallFrame, CollectingSink, Warner, WarningCategory};

    fn frame(ns: &'static str) -> CallFrame {
        CallFrame::new(ns, Location::caller())
    }

    #[test]
    fn boundary_matches_whole_segments() {
        let b = Boundary::default();
        assert!(b.is_internal("figutil"));
        assert!(b.is_internal("figutil::deprecation::warner"));
        assert!(b.is_internal("plotters::chart"));
        assert!(b.is_internal("figutil/src/lib.rs"));
        assert!(!b.is_internal("figutils::x"));
        assert!(!b.is_internal("my_app::plots"));
        assert!(!b.is_internal("tests/deprecation.rs"));
    }

    #[test]
    fn boundary_matches_dependency_source_paths() {
        let b = Boundary::default();
        let registry = "/home/ann/.cargo/registry/src/index.crates.io-1949cf8c6b5b557f";
        assert!(b.is_internal(&format!("{registry}/plotters-0.3.7/src/chart/mod.rs")));
        assert!(b.is_internal(&format!("{registry}/figutil-0.1.0/src/deprecation/renamed.rs")));
        assert!(b.is_internal("/work/figutil/src/sizing/units.rs"));
        assert!(b.is_internal(
            r"C:\Users\ann\.cargo\registry\src\index\plotters-0.3.7\src\lib.rs"
        ));

        assert!(!b.is_internal(&format!("{registry}/plotters-extra-0.1.0/src/lib.rs")));
        assert!(!b.is_internal(&format!("{registry}/figutils-0.2.0/src/lib.rs")));
        assert!(!b.is_internal("/home/ann/figutil/examples/demo.rs"));
        assert!(!b.is_internal("/home/ann/app/src/main.rs"));
    }

    #[test]
    fn skips_registry_frames_of_host_framework() {
        let registry = "/home/ann/.cargo/registry/src/index.crates.io-1949cf8c6b5b557f";
        let stack = [
            CallFrame::new(
                format!("{registry}/figutil-0.1.0/src/deprecation/kwargs.rs"),
                Location::caller(),
            ),
            CallFrame::new(
                format!("{registry}/plotters-0.3.7/src/chart/builder.rs"),
                Location::caller(),
            ),
            CallFrame::new("/home/ann/app/src/main.rs", Location::caller()),
        ];
        let warner = Warner::with_sink(CollectingSink::new());
        let (level, frame) = warner.locate(&stack);
        assert_eq!(level, 3);
        assert_eq!(
            frame.map(|f| &*f.namespace),
            Some("/home/ann/app/src/main.rs")
        );
    }

    #[test]
    fn reports_first_external_frame() {
        let sink = CollectingSink::new();
        let warner = Warner::with_sink(sink.clone());
        let stack = [
            frame("figutil::deprecation"),
            frame("plotters::axes"),
            frame("my_app::figure"),
            frame("my_app::main"),
        ];
        warner.warn("careful", WarningCategory::User, &stack);

        let got = sink.take();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].stack_level, 3);
        assert_eq!(got[0].message, "careful");
        assert_eq!(got[0].category, WarningCategory::User);
    }

    #[test]
    fn falls_back_to_innermost_when_all_internal() {
        let warner = Warner::with_sink(CollectingSink::new());
        let stack = [frame("figutil::a"), frame("figutil::b")];
        let (level, found) = warner.locate(&stack);
        assert_eq!(level, 1);
        assert_eq!(found, stack.first());

        let (level, found) = warner.locate(&[]);
        assert_eq!(level, 1);
        assert!(found.is_none());
    }

    #[test]
    fn injected_boundary_changes_reported_level() {
        let warner = Warner::new(Boundary::new(["my_app::internals"]), CollectingSink::new());
        let stack = [frame("figutil::x"), frame("my_app::internals::y")];
        assert_eq!(warner.locate(&stack).0, 1);
    }

    #[test]
    fn deprecated_points_at_caller() {
        let sink = CollectingSink::new();
        let warner = Warner::with_sink(sink.clone());
        let line = line!() + 1;
        warner.deprecated("old thing");

        let got = sink.take();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].stack_level, 2);
        assert_eq!(got[0].category, WarningCategory::Deprecation);
        let loc = got[0].location.expect("caller location");
        assert_eq!(loc.file(), file!());
        assert_eq!(loc.line(), line);
    }

    #[test]
    fn display_includes_site_and_category() {
        let sink = CollectingSink::new();
        Warner::with_sink(sink.clone()).deprecated("gone");
        let shown = sink.take()[0].to_string();
        assert!(shown.starts_with(file!()));
        assert!(shown.ends_with("FigutilDeprecationWarning: gone"));
    }
}
