use std::borrow::Cow;
use std::iter::FusedIterator;

use indexmap::map;

use super::entry::HeaderEntry;

/// Iterator of `(normalized name, joined value)` pairs.
///
/// Created by [`HeaderStore::iter`](super::HeaderStore::iter) and
/// [`HeaderStore::entries`](super::HeaderStore::entries).
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: map::Iter<'a, String, HeaderEntry>,
}

impl<'a> Entries<'a> {
    pub(crate) fn new(inner: map::Iter<'a, String, HeaderEntry>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, Cow<'a, str>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, entry)| (key.as_str(), entry.joined()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(key, entry)| (key.as_str(), entry.joined()))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

/// Iterator of normalized header names.
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    inner: map::Keys<'a, String, HeaderEntry>,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(inner: map::Keys<'a, String, HeaderEntry>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Keys<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}

/// Iterator of joined header values.
#[derive(Debug, Clone)]
pub struct Values<'a> {
    inner: map::Values<'a, String, HeaderEntry>,
}

impl<'a> Values<'a> {
    pub(crate) fn new(inner: map::Values<'a, String, HeaderEntry>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Values<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(HeaderEntry::joined)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(HeaderEntry::joined)
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}
