//! Deprecated `get_*` / `set_*` accessors for properties that became plain
//! read-only fields.
//!
//! The accessors are written out at definition time with
//! [`deprecate_getter_setter!`](crate::deprecate_getter_setter):
//!
//! ```
//! use figutil::deprecate_getter_setter;
//!
//! pub struct Panel {
//!     pub aspect: f64,
//! }
//!
//! deprecate_getter_setter! {
//!     Panel {
//!         get_aspect, set_aspect => aspect: f64, since "0.6";
//!     }
//! }
//!
//! let panel = Panel { aspect: 1.5 };
//! assert_eq!(panel.get_aspect(), 1.5); // warns, reads the field
//! panel.set_aspect(3.0); // warns, writes nothing
//! assert_eq!(panel.aspect, 1.5);
//! ```

use crate::deprecation::warner::Warner;

/// Name and version of a property whose accessors were deprecated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeprecatedProperty {
    pub name: &'static str,
    pub version: &'static str,
}

impl DeprecatedProperty {
    #[must_use]
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }

    #[must_use]
    pub fn getter_message(&self, owner: &str) -> String {
        format!(
            "get_{}() was deprecated in {}. Please use {owner}.{} instead.",
            self.name, self.version, self.name
        )
    }

    #[must_use]
    pub fn setter_message(&self) -> String {
        format!(
            "set_{}() was deprecated in {}. The property is now read-only.",
            self.name, self.version
        )
    }

    /// Warn, then hand back the stored value.
    #[track_caller]
    pub fn get<'a, T: ?Sized>(&self, warner: &Warner, owner: &str, value: &'a T) -> &'a T {
        warner.deprecated(self.getter_message(owner));
        value
    }

    /// Warn and drop `value`; the property is read-only.
    #[track_caller]
    pub fn set<T>(&self, warner: &Warner, value: T) {
        warner.deprecated(self.setter_message());
        drop(value);
    }
}

/// Generate deprecated `get_*` / `set_*` methods over existing fields.
///
/// Each line reads `getter, setter => field: Type, since "version";`. The
/// getter clones the field; the setter accepts a value and ignores it. Both
/// warn through [`Warner::global`].
#[macro_export]
macro_rules! deprecate_getter_setter {
    ($owner:ident { $($get:ident, $set:ident => $field:ident : $ty:ty, since $version:literal;)+ }) => {
        impl $owner {
            $(
                #[track_caller]
                pub fn $get(&self) -> $ty {
                    const PROPERTY: $crate::deprecation::DeprecatedProperty =
                        $crate::deprecation::DeprecatedProperty::new(stringify!($field), $version);
                    let warner = $crate::deprecation::Warner::global();
                    ::std::clone::Clone::clone(PROPERTY.get(&warner, stringify!($owner), &self.$field))
                }

                #[track_caller]
                pub fn $set(&self, value: $ty) {
                    const PROPERTY: $crate::deprecation::DeprecatedProperty =
                        $crate::deprecation::DeprecatedProperty::new(stringify!($field), $version);
                    PROPERTY.set(&$crate::deprecation::Warner::global(), value);
                }
            )+
        }
    };
}
