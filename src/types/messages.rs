use crate::types::alloc_type::Vec;
use crate::types::error_formatter::{MessageFormatConfig, MessageFormatter};
use crate::types::{ErrorVec, InvalidArgument};
use core::fmt::{self, Display};
use core::ops::Deref;
use smallvec::smallvec;

/// The ordered, non-empty message list carried by a failed [`Rail`](crate::Rail).
///
/// A `Messages` can only be built with at least one item, and it never grows
/// in place: merging two lists with [`Messages::concat`] consumes both and
/// yields a new one. Read access goes through `Deref<Target = [M]>`, so the
/// usual slice API (`len`, `iter`, indexing, `contains`, ...) is available.
///
/// # Examples
///
/// ```
/// use rail_track::Messages;
///
/// let first = Messages::one("name blank");
/// let second = Messages::try_from_iter(["email blank", "too young"]).unwrap();
/// let merged = first.concat(second);
///
/// assert_eq!(merged.as_slice(), &["name blank", "email blank", "too young"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Messages<M> {
    items: ErrorVec<M>,
}

#[allow(clippy::len_without_is_empty)]
impl<M> Messages<M> {
    /// Creates a list holding a single message.
    #[inline]
    pub fn one(message: M) -> Self {
        Self {
            items: smallvec![message],
        }
    }

    /// Collects messages from an iterator, rejecting an empty one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyMessages`] when the iterator yields nothing.
    #[inline]
    pub fn try_from_iter<I>(messages: I) -> Result<Self, InvalidArgument>
    where
        I: IntoIterator<Item = M>,
    {
        let items: ErrorVec<M> = messages.into_iter().collect();
        if items.is_empty() {
            Err(InvalidArgument::EmptyMessages)
        } else {
            Ok(Self { items })
        }
    }

    /// Appends `other` after `self`, keeping both orders intact.
    #[must_use]
    #[inline]
    pub fn concat(self, other: Messages<M>) -> Self {
        let mut items = self.items;
        items.extend(other.items);
        Self { items }
    }

    /// Number of messages; always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The first message recorded.
    #[inline]
    pub fn first(&self) -> &M {
        &self.items[0]
    }

    /// The most recently appended message.
    #[inline]
    pub fn last(&self) -> &M {
        &self.items[self.items.len() - 1]
    }

    #[inline]
    pub fn as_slice(&self) -> &[M] {
        &self.items
    }

    /// Transforms every message, preserving order and length.
    #[inline]
    pub fn map<N, F>(self, f: F) -> Messages<N>
    where
        F: FnMut(M) -> N,
    {
        Messages {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Consumes the list and returns its first message.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_track::Messages;
    ///
    /// let messages = Messages::try_from_iter(["first", "second"]).unwrap();
    /// assert_eq!(messages.into_first(), "first");
    /// ```
    #[inline]
    pub fn into_first(self) -> M {
        // index 0 always exists, and the rest is dropped
        let mut items = self.items;
        items.swap_remove(0)
    }

    #[inline]
    pub fn into_vec(self) -> Vec<M> {
        self.items.into_vec()
    }

    /// Consumes the list and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<M> {
        self.items
    }

    /// Renders the messages with the given formatter.
    pub fn render<F>(&self, formatter: &F) -> crate::types::alloc_type::String
    where
        F: MessageFormatter,
        M: Display,
    {
        formatter.format_messages(self.items.iter().map(|m| m as &dyn Display))
    }
}

impl<M> Deref for Messages<M> {
    type Target = [M];

    #[inline]
    fn deref(&self) -> &[M] {
        &self.items
    }
}

impl<M> AsRef<[M]> for Messages<M> {
    #[inline]
    fn as_ref(&self) -> &[M] {
        &self.items
    }
}

impl<M> TryFrom<Vec<M>> for Messages<M> {
    type Error = InvalidArgument;

    fn try_from(messages: Vec<M>) -> Result<Self, Self::Error> {
        Self::try_from_iter(messages)
    }
}

impl<M> From<Messages<M>> for Vec<M> {
    fn from(messages: Messages<M>) -> Self {
        messages.into_vec()
    }
}

impl<M> IntoIterator for Messages<M> {
    type Item = M;
    type IntoIter = smallvec::IntoIter<[M; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a Messages<M> {
    type Item = &'a M;
    type IntoIter = core::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<M: Display> Display for Messages<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&MessageFormatConfig::default()))
    }
}

#[cfg(feature = "serde")]
impl<M: serde::Serialize> serde::Serialize for Messages<M> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_slice().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, M: serde::Deserialize<'de>> serde::Deserialize<'de> for Messages<M> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<M>::deserialize(deserializer)?;
        Self::try_from_iter(items).map_err(serde::de::Error::custom)
    }
}
