//! # Collection Engine
//!
//! Aggregation, ranking, and filtering over any slice of [`Taggable`] entities.
//!
//! [`TagCollection`] is a blanket extension trait on `[E]`, so every slice,
//! array, or `Vec` of taggable entities picks the queries up for free. All
//! operations are pure reads: they walk the slice, build a fresh derived value,
//! and return it. Nothing is cached and nothing is mutated, so repeated calls
//! over a stable slice always agree, and concurrent read-only calls are safe.
//!
//! ## Derived Views
//!
//! - **Flattening**: [`all_tags`](TagCollection::all_tags) concatenates every
//!   entity's tag sequence in entity order, then intra-entity order.
//! - **Uniqueness**: [`unique_tags`](TagCollection::unique_tags) is the set of
//!   distinct tags in the flattened view.
//! - **Frequency**: [`tags_frequency`](TagCollection::tags_frequency) counts
//!   occurrences; repeat appearances accumulate additively, and keys sit in
//!   first-seen order.
//! - **Ranking**: [`most_used_tags`](TagCollection::most_used_tags) /
//!   [`least_used_tags`](TagCollection::least_used_tags) sort the frequency
//!   table by count and truncate. Equal counts keep first-seen order: the sort
//!   is stable over the frequency table's insertion order, so rankings are
//!   deterministic rather than at the mercy of hash iteration.
//! - **Filtering**: [`tagged_with`](TagCollection::tagged_with) and
//!   [`tagged_matching`](TagCollection::tagged_matching) select entities by
//!   tag membership, preserving input order and borrowing rather than cloning.
//!
//! Every raw-value variant (`all_raw_tags`, `raw_tags_frequency`, …) mirrors
//! its tag-based counterpart, differing only in projecting out the raw value.

use crate::tag::Tag;
use crate::taggable::Taggable;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Conventional cutoff for [`TagCollection::most_used_tags`] and friends.
///
/// Rust has no default arguments, so the customary limit of 20 is a named
/// constant for callers to pass explicitly.
pub const DEFAULT_RANKING_LIMIT: usize = 20;

/// How a multi-tag query decides whether an entity matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Match {
    /// Entity must carry every query tag.
    All,
    /// Entity must carry at least one query tag. An empty query matches
    /// nothing under this mode.
    #[default]
    Any,
    /// Entity must carry no query tag. An empty query matches everything.
    None,
}

/// Tag queries over a slice of taggable entities.
///
/// Implemented for `[E]` wherever `E: Taggable`, so it is available on slices,
/// arrays, and `Vec`s alike. An empty collection yields empty results from
/// every operation; entities with empty tag sequences contribute nothing.
pub trait TagCollection {
    /// The taggable entity type this collection holds.
    type Entity: Taggable;

    /// Every tag of every entity, in entity order then intra-entity order.
    fn all_tags(&self) -> Vec<Tag<Self::Entity>>;

    /// [`all_tags`](Self::all_tags) projected to raw values.
    fn all_raw_tags(&self) -> Vec<<Self::Entity as Taggable>::Raw>;

    /// The distinct tags appearing anywhere in the collection.
    fn unique_tags(&self) -> HashSet<Tag<Self::Entity>>;

    /// The distinct raw tag values appearing anywhere in the collection.
    fn unique_raw_tags(&self) -> HashSet<<Self::Entity as Taggable>::Raw>;

    /// Occurrence count per tag, keyed in first-seen order. Counts from
    /// multiple entities (or repeats within one entity) sum.
    fn tags_frequency(&self) -> IndexMap<Tag<Self::Entity>, usize>;

    /// Occurrence count per raw value, keyed in first-seen order.
    fn raw_tags_frequency(&self) -> IndexMap<<Self::Entity as Taggable>::Raw, usize>;

    /// The `limit` most frequent tags, most frequent first. Equal counts keep
    /// first-seen order. Returns all distinct tags when `limit` exceeds them;
    /// returns nothing when `limit` is zero.
    fn most_used_tags(&self, limit: usize) -> Vec<Tag<Self::Entity>>;

    /// [`most_used_tags`](Self::most_used_tags) projected to raw values.
    fn most_used_raw_tags(&self, limit: usize) -> Vec<<Self::Entity as Taggable>::Raw>;

    /// The `limit` least frequent tags, least frequent first. Same clamping
    /// and tie-break rules as [`most_used_tags`](Self::most_used_tags).
    fn least_used_tags(&self, limit: usize) -> Vec<Tag<Self::Entity>>;

    /// [`least_used_tags`](Self::least_used_tags) projected to raw values.
    fn least_used_raw_tags(&self, limit: usize) -> Vec<<Self::Entity as Taggable>::Raw>;

    /// The entities whose tag sequence contains `tag`, in input order.
    fn tagged_with(&self, tag: &Tag<Self::Entity>) -> Vec<&Self::Entity>;

    /// Raw-value sugar for [`tagged_with`](Self::tagged_with): wraps the raw
    /// value into a tag first.
    fn tagged_with_raw(&self, raw: <Self::Entity as Taggable>::Raw) -> Vec<&Self::Entity>;

    /// The entities matching all, any, or none of `tags`, in input order.
    fn tagged_matching(&self, tags: &[Tag<Self::Entity>], mode: Match) -> Vec<&Self::Entity>;

    /// Raw-value sugar for [`tagged_matching`](Self::tagged_matching).
    fn tagged_matching_raw(
        &self,
        raws: &[<Self::Entity as Taggable>::Raw],
        mode: Match,
    ) -> Vec<&Self::Entity>;
}

impl<E: Taggable> TagCollection for [E] {
    type Entity = E;

    fn all_tags(&self) -> Vec<Tag<E>> {
        self.iter().flat_map(|e| e.tags().iter().cloned()).collect()
    }

    fn all_raw_tags(&self) -> Vec<E::Raw> {
        self.iter()
            .flat_map(|e| e.tags().iter().map(|t| t.raw().clone()))
            .collect()
    }

    fn unique_tags(&self) -> HashSet<Tag<E>> {
        self.all_tags().into_iter().collect()
    }

    fn unique_raw_tags(&self) -> HashSet<E::Raw> {
        self.all_raw_tags().into_iter().collect()
    }

    fn tags_frequency(&self) -> IndexMap<Tag<E>, usize> {
        count_occurrences(self.all_tags())
    }

    fn raw_tags_frequency(&self) -> IndexMap<E::Raw, usize> {
        count_occurrences(self.all_raw_tags())
    }

    fn most_used_tags(&self, limit: usize) -> Vec<Tag<E>> {
        ranked(self.tags_frequency(), limit, Order::Descending)
    }

    fn most_used_raw_tags(&self, limit: usize) -> Vec<E::Raw> {
        ranked(self.raw_tags_frequency(), limit, Order::Descending)
    }

    fn least_used_tags(&self, limit: usize) -> Vec<Tag<E>> {
        ranked(self.tags_frequency(), limit, Order::Ascending)
    }

    fn least_used_raw_tags(&self, limit: usize) -> Vec<E::Raw> {
        ranked(self.raw_tags_frequency(), limit, Order::Ascending)
    }

    fn tagged_with(&self, tag: &Tag<E>) -> Vec<&E> {
        self.iter().filter(|e| e.tags().contains(tag)).collect()
    }

    fn tagged_with_raw(&self, raw: E::Raw) -> Vec<&E> {
        self.tagged_with(&Tag::new(raw))
    }

    fn tagged_matching(&self, tags: &[Tag<E>], mode: Match) -> Vec<&E> {
        self.iter().filter(|e| matches(*e, tags, mode)).collect()
    }

    fn tagged_matching_raw(&self, raws: &[E::Raw], mode: Match) -> Vec<&E> {
        let tags: Vec<Tag<E>> = raws.iter().cloned().map(Tag::new).collect();
        self.tagged_matching(&tags, mode)
    }
}

fn count_occurrences<K: Eq + std::hash::Hash>(items: Vec<K>) -> IndexMap<K, usize> {
    let mut counts = IndexMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

#[derive(Clone, Copy)]
enum Order {
    Descending,
    Ascending,
}

// Stable sort over the map's first-seen insertion order, so equal counts
// keep a deterministic tie-break.
fn ranked<K>(frequency: IndexMap<K, usize>, limit: usize, order: Order) -> Vec<K> {
    let mut entries: Vec<(K, usize)> = frequency.into_iter().collect();
    match order {
        Order::Descending => entries.sort_by(|a, b| b.1.cmp(&a.1)),
        Order::Ascending => entries.sort_by(|a, b| a.1.cmp(&b.1)),
    }
    entries.truncate(limit);
    entries.into_iter().map(|(key, _)| key).collect()
}

// Scans the query tags in order and short-circuits on the first decisive one.
// Exhausting the query without a decision accepts for All ("every tag was
// present") and None ("no tag was present"), and rejects for Any—which is why
// an empty query under Any matches nothing.
fn matches<E: Taggable>(entity: &E, query: &[Tag<E>], mode: Match) -> bool {
    let own = entity.tags();
    for tag in query {
        let present = own.contains(tag);
        match mode {
            Match::All if !present => return false,
            Match::Any if present => return true,
            Match::None if present => return false,
            _ => {}
        }
    }
    mode != Match::Any
}
