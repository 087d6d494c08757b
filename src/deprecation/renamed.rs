//! Old names for renamed functions.
//!
//! A [`RenamedFn`] keeps the new callable and forwards every call to it
//! unchanged, warning once per call. Arguments travel as a tuple so any arity
//! up to six is passed straight through:
//!
//! ```
//! use figutil::deprecation::RenamedFn;
//!
//! fn hypot(a: f64, b: f64) -> f64 {
//!     a.hypot(b)
//! }
//!
//! let old = RenamedFn::new("0.5", "distance", "hypot", hypot);
//! assert_eq!(old.call((3.0, 4.0)), 5.0);
//! ```

use crate::deprecation::warner::Warner;

/// A callable invoked with its arguments packed into a tuple.
pub trait Delegate<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_delegate {
    ($($arg:ident),*) => {
        impl<Func, R, $($arg),*> Delegate<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> R,
        {
            type Output = R;

            #[allow(non_snake_case)]
            #[inline]
            fn invoke(&self, ($($arg,)*): ($($arg,)*)) -> R {
                self($($arg),*)
            }
        }
    };
}

impl_delegate!();
impl_delegate!(A);
impl_delegate!(A, B);
impl_delegate!(A, B, C);
impl_delegate!(A, B, C, D);
impl_delegate!(A, B, C, D, E);
impl_delegate!(A, B, C, D, E, G);

/// A deprecated alias that warns and delegates to its replacement.
#[derive(Clone, Debug)]
pub struct RenamedFn<F> {
    version: &'static str,
    old_name: &'static str,
    new_name: &'static str,
    func: F,
    warner: Option<Warner>,
}

impl<F> RenamedFn<F> {
    pub fn new(version: &'static str, old_name: &'static str, new_name: &'static str, func: F) -> Self {
        Self {
            version,
            old_name,
            new_name,
            func,
            warner: None,
        }
    }

    /// Warn through `warner` instead of [`Warner::global`].
    #[must_use]
    pub fn with_warner(mut self, warner: Warner) -> Self {
        self.warner = Some(warner);
        self
    }

    #[must_use]
    pub fn old_name(&self) -> &'static str {
        self.old_name
    }

    #[must_use]
    pub fn new_name(&self) -> &'static str {
        self.new_name
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "'{}' was deprecated in version {} and will be removed in the next major release. \
             Please use '{}' instead.",
            self.old_name, self.version, self.new_name
        )
    }

    /// Warn, then return whatever the replacement returns.
    #[track_caller]
    pub fn call<Args>(&self, args: Args) -> F::Output
    where
        F: Delegate<Args>,
    {
        match &self.warner {
            Some(warner) => warner.deprecated(self.message()),
            None => Warner::global().deprecated(self.message()),
        }
        self.func.invoke(args)
    }
}

/// Build several aliases sharing one deprecation version.
pub fn rename_fns<F, I>(version: &'static str, renames: I) -> Vec<RenamedFn<F>>
where
    I: IntoIterator<Item = (&'static str, &'static str, F)>,
{
    renames
        .into_iter()
        .map(|(old, new, func)| RenamedFn::new(version, old, new, func))
        .collect()
}
