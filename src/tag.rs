//! # Tag Value Type
//!
//! [`Tag<T>`] wraps exactly one raw value and scopes it to the entity type `T` it
//! belongs to. The scoping is a phantom parameter: it exists only at the type
//! level, so a `Tag<Article>` cannot be passed where a `Tag<User>` is expected,
//! and the wrapper costs nothing at runtime beyond the raw value itself.
//!
//! Equality, hashing, and ordering all delegate to the raw value alone. The
//! trait impls here are hand-written rather than derived: a derive would bound
//! the entity type `T` (which never needs to be `Clone`, `Eq`, etc.) instead of
//! the raw value that actually carries the data.

use crate::taggable::Taggable;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// An immutable, type-safe tag scoped to the entity type `T`.
///
/// Two tags are equal iff their raw values are equal; the hash is derived from
/// the raw value alone. Construct one with [`Tag::new`], or lean on the `From`
/// conversions for literal-style sugar:
///
/// ```
/// use tagging::{Tag, Taggable, Tags};
///
/// struct Track { tags: Tags<Self> }
/// impl Taggable for Track {
///     type Raw = String;
///     fn tags(&self) -> &[Tag<Self>] { &self.tags }
/// }
///
/// let a: Tag<Track> = "live".into();
/// let b = Tag::new("live".to_string());
/// assert_eq!(a, b);
/// ```
pub struct Tag<T: Taggable> {
    raw: T::Raw,
    // fn() -> T keeps Tag Send + Sync + covariant no matter what T is
    _entity: PhantomData<fn() -> T>,
}

impl<T: Taggable> Tag<T> {
    /// Wraps a raw value as a tag for entity type `T`.
    pub fn new(raw: T::Raw) -> Self {
        Self {
            raw,
            _entity: PhantomData,
        }
    }

    /// The wrapped raw value, read-only.
    pub fn raw(&self) -> &T::Raw {
        &self.raw
    }

    /// Unwraps the tag back into its raw value.
    pub fn into_raw(self) -> T::Raw {
        self.raw
    }
}

// Literal-construction sugar. A blanket `From<T::Raw>` would collide with the
// reflexive `From<T> for T` impl (nothing rules out a `Raw = Tag<T>` impl
// downstream), so the conversions are spelled per raw kind instead.
impl<T: Taggable<Raw = String>> From<&str> for Tag<T> {
    fn from(raw: &str) -> Self {
        Self::new(raw.to_owned())
    }
}

impl<T: Taggable<Raw = String>> From<String> for Tag<T> {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

macro_rules! int_sugar {
    ($($ty:ty),* $(,)?) => {$(
        impl<T: Taggable<Raw = $ty>> From<$ty> for Tag<T> {
            fn from(raw: $ty) -> Self {
                Self::new(raw)
            }
        }
    )*};
}

int_sugar!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl<T: Taggable> Clone for Tag<T> {
    fn clone(&self) -> Self {
        Self::new(self.raw.clone())
    }
}

impl<T: Taggable> PartialEq for Tag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T: Taggable> Eq for Tag<T> {}

impl<T: Taggable> Hash for Tag<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T: Taggable> fmt::Debug for Tag<T>
where
    T::Raw: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&self.raw).finish()
    }
}

impl<T: Taggable> fmt::Display for Tag<T>
where
    T::Raw: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

// Serde treats a tag as a bare scalar: `Tag<T>` round-trips exactly as its raw
// value would on its own, so a `tags` field encodes as a plain array of
// scalars. Decode failures come from the raw value's own Deserialize impl,
// unchanged.
#[cfg(feature = "serde")]
impl<T: Taggable> serde::Serialize for Tag<T>
where
    T::Raw: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.raw.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Taggable> serde::Deserialize<'de> for Tag<T>
where
    T::Raw: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::Raw::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taggable::Tags;
    use std::collections::HashSet;

    struct Note {
        tags: Tags<Self>,
    }

    impl Taggable for Note {
        type Raw = String;
        fn tags(&self) -> &[Tag<Self>] {
            &self.tags
        }
    }

    struct Issue {
        tags: Tags<Self>,
    }

    impl Taggable for Issue {
        type Raw = i64;
        fn tags(&self) -> &[Tag<Self>] {
            &self.tags
        }
    }

    #[test]
    fn equality_follows_raw_value() {
        let a: Tag<Note> = "foo".into();
        let b = Tag::<Note>::new("foo".to_string());
        let c: Tag<Note> = "bar".into();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_follows_raw_value() {
        let mut set = HashSet::new();
        set.insert(Tag::<Note>::from("foo"));
        set.insert(Tag::<Note>::from("foo"));
        set.insert(Tag::<Note>::from("bar"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn integer_literals_wrap_through_from() {
        let tag: Tag<Issue> = 7.into();
        assert_eq!(*tag.raw(), 7);
        assert_eq!(tag.into_raw(), 7);
    }

    #[test]
    fn display_and_debug_show_the_raw_value() {
        let tag: Tag<Note> = "foo".into();
        assert_eq!(tag.to_string(), "foo");
        assert_eq!(format!("{:?}", tag), "Tag(\"foo\")");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_a_bare_scalar() {
        let tag: Tag<Note> = "foo".into();
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"foo\"");

        let back: Tag<Note> = serde_json::from_str("\"foo\"").unwrap();
        assert_eq!(back, tag);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decode_failure_is_the_raw_values_own_error() {
        let err = serde_json::from_str::<Tag<Issue>>("\"not a number\"");
        assert!(err.is_err());
    }
}
