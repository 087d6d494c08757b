//! Legacy keyword aliasing at the call boundary.
//!
//! Keyword arguments are carried in a [`Kwargs`] record. A [`RenamedKwargs`]
//! holds a static table of `(old_key, replacement)` pairs; each replacement is
//! either the new key (an identifier) or free-form instructions, where `{}`
//! is filled with the value the caller passed.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::deprecation::warner::Warner;

/// Ordered keyword arguments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Kwargs(IndexMap<String, Value>);

impl Kwargs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove `key`, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Deserialize into a typed options record.
    pub fn into_options<T: DeserializeOwned>(self) -> serde_json::Result<T> {
        serde_json::from_value(Value::Object(self.0.into_iter().collect()))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Kwargs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// What an old keyword turns into.
#[derive(Clone, Debug, PartialEq)]
pub enum Replacement<'a> {
    /// Move the value under a new key.
    Rename(&'a str),
    /// No automatic replacement; tell the caller what to do instead.
    Instruction(Cow<'a, str>),
}

impl<'a> Replacement<'a> {
    /// Identifiers rename; anything else is instructions, with `{}` filled
    /// from `old_value`.
    #[must_use]
    pub fn classify(replacement: &'a str, old_value: &Value) -> Self {
        if is_identifier(replacement) {
            Self::Rename(replacement)
        } else if replacement.contains("{}") {
            Self::Instruction(Cow::Owned(
                replacement.replace("{}", &plain_text(old_value)),
            ))
        } else {
            Self::Instruction(Cow::Borrowed(replacement))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rename(key) => key,
            Self::Instruction(text) => text,
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Strings without JSON quotes, everything else as JSON.
fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A static table of deprecated keywords.
#[derive(Clone, Debug)]
pub struct RenamedKwargs {
    version: &'static str,
    table: &'static [(&'static str, &'static str)],
    warner: Option<Warner>,
}

impl RenamedKwargs {
    #[must_use]
    pub const fn new(version: &'static str, table: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            version,
            table,
            warner: None,
        }
    }

    /// Warn through `warner` instead of [`Warner::global`].
    #[must_use]
    pub fn with_warner(mut self, warner: Warner) -> Self {
        self.warner = Some(warner);
        self
    }

    fn message(&self, old: &str, replacement: &Replacement<'_>) -> String {
        format!(
            "Keyword arg '{old}' was deprecated in {} and will be removed in the next major \
             release. Please use '{}' instead.",
            self.version,
            replacement.as_str()
        )
    }

    /// Rewrite every deprecated key present in `kwargs`, one warning per key.
    /// Returns how many keys were handled.
    #[track_caller]
    pub fn apply(&self, kwargs: &mut Kwargs) -> usize {
        let global;
        let warner = if let Some(w) = &self.warner {
            w
        } else {
            global = Warner::global();
            &global
        };

        let mut handled = 0;
        for &(old, new) in self.table {
            let Some(value) = kwargs.remove(old) else {
                continue;
            };
            let replacement = Replacement::classify(new, &value);
            if let Replacement::Rename(key) = replacement {
                kwargs.insert(key, value);
            }
            warner.deprecated(self.message(old, &replacement));
            handled += 1;
        }
        handled
    }

    /// Wrap `func` so its keywords are rewritten before every call.
    pub fn wrap<F>(self, func: F) -> KwargsFn<F> {
        KwargsFn {
            renames: self,
            func,
        }
    }
}

/// A callable behind a keyword alias table.
#[derive(Clone, Debug)]
pub struct KwargsFn<F> {
    renames: RenamedKwargs,
    func: F,
}

impl<F> KwargsFn<F> {
    #[track_caller]
    pub fn call<R>(&self, mut kwargs: Kwargs) -> R
    where
        F: Fn(Kwargs) -> R,
    {
        self.renames.apply(&mut kwargs);
        (self.func)(kwargs)
    }
}
