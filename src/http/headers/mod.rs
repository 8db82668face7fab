//! HTTP headers abstraction for [`HttpRequest`](crate::http::request::HttpRequest) and
//! [`HttpResponse`](crate::http::response::HttpResponse)
//!
//! Headers are stored in an ordered map keyed by their lowercased name, so
//! lookups are case-insensitive while iteration follows insertion order.
//! Each entry also keeps the casing it was created with, exposed through
//! [`HeaderStore::raw`].
//!
//! Names and values are stored as raw strings, without validation or
//! restrictions on which headers are allowed. A header appended several
//! times reads back as its values joined with `", "`. The only way to see
//! the values separately is [`HeaderStore::get_set_cookie`], since
//! `Set-Cookie` values cannot be joined on the wire.
//!
//! Rendering a header block is left to the message types wrapping this
//! structure.

use std::borrow::Cow;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::log::debug;

mod entry;
mod init;
mod iter;

#[cfg(test)]
mod test;

use entry::HeaderEntry;

pub use entry::SEPARATOR;
pub use init::{HeaderInit, HeaderSource, HeaderValues};
pub use iter::{Entries, Keys, Values};

/// Normalized key of the `Set-Cookie` header.
pub const SET_COOKIE: &str = "set-cookie";

/// Folds a header name into the key used for lookups.
///
/// Surrounding whitespace is kept as is.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// Case-insensitive, insertion ordered header multimap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderStore {
    entries: IndexMap<String, HeaderEntry>,
}

impl HeaderStore {
    /// Create new empty [`HeaderStore`].
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create a [`HeaderStore`] from any [`HeaderInit`] shape.
    ///
    /// Every pair is [appended](Self::append) in order, so names differing
    /// only by casing accumulate values under one header.
    ///
    /// ```
    /// use headerstore::HeaderStore;
    ///
    /// let headers = HeaderStore::with_init([
    ///     ("accept-encoding", "gzip"),
    ///     ("Accept-Encoding", "br"),
    /// ]);
    /// assert_eq!(headers.get("accept-encoding").as_deref(), Some("gzip, br"));
    /// assert_eq!(headers.raw()["accept-encoding"], "gzip, br");
    /// ```
    pub fn with_init(init: impl Into<HeaderInit>) -> Self {
        let init = init.into();
        debug!("building headers from {} initializer", init.shape());

        let mut store = Self::new();
        store.extend(init.into_pairs());
        store
    }

    /// Returns the number of distinct headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value of a header, matched case-insensitively.
    ///
    /// Multiple values are joined with [`SEPARATOR`]; an empty value is
    /// returned as an empty string.
    pub fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        self.entries.get(&normalize(name)).map(HeaderEntry::joined)
    }

    /// Replaces every value of a header with `value`.
    ///
    /// The header keeps its position but takes `name` as its original casing.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let entry = HeaderEntry::new(name, value.into());
        // `IndexMap::insert` keeps the slot of an existing key
        if let Some(old) = self.entries.insert(normalize(name), entry) {
            if old.original_name() != name {
                debug!("header {:?} renamed to {name:?}", old.original_name());
            }
        }
    }

    /// Adds `value` to a header, creating it if missing.
    ///
    /// The original casing of an existing header is left untouched.
    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.entry(normalize(name)) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value),
            Entry::Vacant(entry) => {
                entry.insert(HeaderEntry::new(name, value));
            }
        }
    }

    /// Returns `true` if a header with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize(name))
    }

    /// Removes a header with all of its values. Does nothing if absent.
    pub fn delete(&mut self, name: &str) {
        self.entries.shift_remove(&normalize(name));
    }

    /// Returns every header keyed by its normalized name.
    pub fn all(&self) -> IndexMap<String, String> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.joined().into_owned()))
            .collect()
    }

    /// Returns every header keyed by the casing it was created with.
    pub fn raw(&self) -> IndexMap<String, String> {
        self.entries
            .values()
            .map(|entry| (entry.original_name().to_string(), entry.joined().into_owned()))
            .collect()
    }

    /// Calls `f(value, name, self)` once per header, in order.
    ///
    /// `name` is normalized and `value` is always equal to what
    /// [`get(name)`](Self::get) returns.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &str, &Self),
    {
        for (name, value) in self {
            f(&value, name, self);
        }
    }

    /// Same as [`for_each`](Self::for_each), with `this` handed to every call.
    pub fn for_each_with<T, F>(&self, this: &mut T, mut f: F)
    where
        T: ?Sized,
        F: FnMut(&mut T, &str, &str, &Self),
    {
        for (name, value) in self {
            f(this, &value, name, self);
        }
    }

    /// Returns an iterator of `(normalized name, joined value)` pairs.
    pub fn iter(&self) -> Entries<'_> {
        Entries::new(self.entries.iter())
    }

    /// Alias of [`iter`](Self::iter).
    pub fn entries(&self) -> Entries<'_> {
        self.iter()
    }

    /// Returns an iterator of normalized header names.
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self.entries.keys())
    }

    /// Returns an iterator of joined header values.
    pub fn values(&self) -> Values<'_> {
        Values::new(self.entries.values())
    }

    /// Returns every `Set-Cookie` value separately, in append order.
    ///
    /// Returns an empty slice when no cookie was set.
    pub fn get_set_cookie(&self) -> &[String] {
        self.entries
            .get(SET_COOKIE)
            .map(HeaderEntry::values)
            .unwrap_or_default()
    }

    /// Copies the headers of `other` that are missing here, values and
    /// casing included.
    pub(crate) fn fill_missing(&mut self, other: &HeaderStore) {
        for (key, entry) in &other.entries {
            if !self.entries.contains_key(key) {
                self.entries.insert(key.clone(), entry.clone());
            }
        }
    }

    /// Yields `(normalized name, original name, values)` for every header.
    pub(crate) fn raw_lines(&self) -> impl Iterator<Item = (&str, &str, &[String])> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry.original_name(), entry.values()))
    }
}

impl<'a> IntoIterator for &'a HeaderStore {
    type Item = (&'a str, Cow<'a, str>);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Extend<(K, V)> for HeaderStore
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name.as_ref(), value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderStore
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl Serialize for HeaderStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for HeaderStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        HeaderInit::deserialize(deserializer).map(HeaderStore::with_init)
    }
}
