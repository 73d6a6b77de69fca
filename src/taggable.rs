//! # Taggable Capability
//!
//! [`Taggable`] is the contract an entity type implements to participate in
//! collection-level tag queries: expose an ordered sequence of your own tags,
//! nothing more. The sequence's order is caller-defined and significant (it is
//! what "first" and "last" mean downstream), and duplicates are permitted.
//!
//! Each implementor names its raw tag kind through the `Raw` associated type.
//! Text tags are the conventional choice, but any clonable, hashable value
//! works—integers, UUIDs, interned symbols. Rust has no associated-type
//! defaults on stable, so the kind is spelled out at each impl site.

use crate::tag::Tag;
use std::hash::Hash;

/// The conventional storage type for a taggable entity's tag field.
pub type Tags<T> = Vec<Tag<T>>;

/// Capability trait: this entity type carries an ordered sequence of tags.
///
/// ```
/// use tagging::{Tag, Taggable, Tags};
///
/// struct Photo {
///     tags: Tags<Self>,
/// }
///
/// impl Taggable for Photo {
///     type Raw = String;
///     fn tags(&self) -> &[Tag<Self>] {
///         &self.tags
///     }
/// }
///
/// let photo = Photo { tags: vec!["sunset".into(), "beach".into()] };
/// assert_eq!(photo.tags().first().unwrap().raw(), "sunset");
/// assert_eq!(photo.tags().last().unwrap().raw(), "beach");
/// ```
pub trait Taggable: Sized {
    /// The raw value kind identifying a tag for this entity type.
    type Raw: Clone + Eq + Hash;

    /// This entity's own tags, in caller-defined order. Duplicates allowed.
    fn tags(&self) -> &[Tag<Self>];
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Model {
        tags: Tags<Self>,
    }

    impl Taggable for Model {
        type Raw = String;
        fn tags(&self) -> &[Tag<Self>] {
            &self.tags
        }
    }

    struct IntModel {
        tags: Tags<Self>,
    }

    impl Taggable for IntModel {
        type Raw = i64;
        fn tags(&self) -> &[Tag<Self>] {
            &self.tags
        }
    }

    #[test]
    fn string_based_tags_keep_their_order() {
        let model = Model {
            tags: vec!["foo".into(), "bar".into()],
        };
        assert_eq!(model.tags().first().unwrap().raw(), "foo");
        assert_eq!(model.tags().last().unwrap().raw(), "bar");
    }

    #[test]
    fn int_based_tags_keep_their_order() {
        let model = IntModel {
            tags: vec![7.into(), 9.into()],
        };
        assert_eq!(*model.tags().first().unwrap().raw(), 7);
        assert_eq!(*model.tags().last().unwrap().raw(), 9);
    }

    #[test]
    fn duplicate_tags_are_preserved() {
        let model = Model {
            tags: vec!["foo".into(), "foo".into(), "bar".into()],
        };
        assert_eq!(model.tags().len(), 3);
    }
}
