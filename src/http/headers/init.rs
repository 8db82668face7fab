use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Deserialize;

use super::HeaderStore;
use super::entry::SEPARATOR;

/// Value side of an initializer pair: one string or a list of strings.
///
/// A list is joined with `", "` before being appended.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HeaderValues {
    One(String),
    Many(Vec<String>),
}

impl HeaderValues {
    pub fn into_joined(self) -> String {
        match self {
            HeaderValues::One(value) => value,
            HeaderValues::Many(values) => values.join(SEPARATOR),
        }
    }
}

impl From<String> for HeaderValues {
    fn from(value: String) -> Self {
        HeaderValues::One(value)
    }
}

impl From<&str> for HeaderValues {
    fn from(value: &str) -> Self {
        HeaderValues::One(value.to_string())
    }
}

impl From<Vec<String>> for HeaderValues {
    fn from(values: Vec<String>) -> Self {
        HeaderValues::Many(values)
    }
}

impl From<Vec<&str>> for HeaderValues {
    fn from(values: Vec<&str>) -> Self {
        HeaderValues::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for HeaderValues {
    fn from(values: [&str; N]) -> Self {
        HeaderValues::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Anything that can hand out `(name, value)` header pairs in its own
/// iteration order.
///
/// This is how a header container other than [`HeaderStore`] is copied into
/// a new store, see [`HeaderInit::from_source`].
pub trait HeaderSource {
    fn header_pairs(&self) -> impl Iterator<Item = (String, String)> + '_;
}

impl HeaderSource for HeaderStore {
    fn header_pairs(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.into_owned()))
    }
}

/// Every shape a [`HeaderStore`] can be built from.
///
/// Resolved once by [`HeaderStore::with_init`], which appends each pair in
/// order. Names are never deduplicated by casing: `accept` followed by
/// `Accept` ends up as two values of one header.
///
/// Deserializing accepts a table (the `Map` shape, in document order) or a
/// list of `[name, value]` pairs where `value` is a string or a list of
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HeaderInit {
    #[default]
    #[serde(skip)]
    Empty,
    /// Pairs read from another header container.
    #[serde(skip)]
    Store(Vec<(String, String)>),
    Pairs(Vec<(String, HeaderValues)>),
    Map(IndexMap<String, HeaderValues>),
}

impl HeaderInit {
    pub fn from_source<S: HeaderSource + ?Sized>(source: &S) -> Self {
        HeaderInit::Store(source.header_pairs().collect())
    }

    /// Flattens the initializer into the `(name, value)` pairs to append.
    pub(crate) fn into_pairs(self) -> Vec<(String, String)> {
        match self {
            HeaderInit::Empty => Vec::new(),
            HeaderInit::Store(pairs) => pairs,
            HeaderInit::Pairs(pairs) => pairs
                .into_iter()
                .map(|(name, values)| (name, values.into_joined()))
                .collect(),
            HeaderInit::Map(map) => map
                .into_iter()
                .map(|(name, values)| (name, values.into_joined()))
                .collect(),
        }
    }

    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            HeaderInit::Empty => "empty",
            HeaderInit::Store(_) => "store",
            HeaderInit::Pairs(_) => "pairs",
            HeaderInit::Map(_) => "map",
        }
    }
}

impl<T: Into<HeaderInit>> From<Option<T>> for HeaderInit {
    fn from(init: Option<T>) -> Self {
        init.map(Into::into).unwrap_or_default()
    }
}

impl From<&HeaderStore> for HeaderInit {
    fn from(store: &HeaderStore) -> Self {
        HeaderInit::from_source(store)
    }
}

impl From<HeaderStore> for HeaderInit {
    fn from(store: HeaderStore) -> Self {
        HeaderInit::from_source(&store)
    }
}

impl<K, V> From<Vec<(K, V)>> for HeaderInit
where
    K: Into<String>,
    V: Into<HeaderValues>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        HeaderInit::Pairs(
            pairs
                .into_iter()
                .map(|(name, values)| (name.into(), values.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for HeaderInit
where
    K: Into<String>,
    V: Into<HeaderValues>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        HeaderInit::Pairs(
            pairs
                .into_iter()
                .map(|(name, values)| (name.into(), values.into()))
                .collect(),
        )
    }
}

impl<K, V, S> From<IndexMap<K, V, S>> for HeaderInit
where
    K: Into<String>,
    V: Into<HeaderValues>,
{
    fn from(map: IndexMap<K, V, S>) -> Self {
        HeaderInit::Map(
            map.into_iter()
                .map(|(name, values)| (name.into(), values.into()))
                .collect(),
        )
    }
}

impl<K, V> From<BTreeMap<K, V>> for HeaderInit
where
    K: Into<String>,
    V: Into<HeaderValues>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        HeaderInit::Map(
            map.into_iter()
                .map(|(name, values)| (name.into(), values.into()))
                .collect(),
        )
    }
}
