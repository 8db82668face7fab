use std::borrow::Cow;

/// Separator used when a header holding several values is read as one string.
pub const SEPARATOR: &str = ", ";

/// A single header as stored in [`HeaderStore`](super::HeaderStore).
///
/// Always holds at least one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeaderEntry {
    original_name: String,
    values: Vec<String>,
}

impl HeaderEntry {
    pub(crate) fn new(name: &str, value: String) -> Self {
        Self {
            original_name: name.to_string(),
            values: vec![value],
        }
    }

    /// The casing the entry was created with.
    pub(crate) fn original_name(&self) -> &str {
        &self.original_name
    }

    pub(crate) fn values(&self) -> &[String] {
        &self.values
    }

    pub(crate) fn push(&mut self, value: String) {
        self.values.push(value);
    }

    /// Returns all values joined with [`SEPARATOR`].
    ///
    /// Single valued entries are borrowed as is.
    pub(crate) fn joined(&self) -> Cow<'_, str> {
        match self.values.as_slice() {
            [one] => Cow::Borrowed(one.as_str()),
            many => Cow::Owned(many.join(SEPARATOR)),
        }
    }
}
