//! # Tagging Architecture
//!
//! Tagging is a **pure, in-memory tagging library**. Any entity type can expose an
//! ordered sequence of type-safe tags, and any slice of such entities can be queried
//! for aggregate tag statistics or filtered by tag membership. There is no storage,
//! no I/O, and no runtime state—every operation is a read over data the caller
//! already holds.
//!
//! ## The Two Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection Engine (collection.rs)                          │
//! │  - Extension trait over slices of taggable entities         │
//! │  - Flattening, uniqueness, frequency, most/least-used       │
//! │  - Match-mode filtering (All / Any / None)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Tag Model (tag.rs, taggable.rs)                            │
//! │  - Tag<T>: immutable wrapper around one raw value           │
//! │  - Taggable: "has an ordered tag sequence" capability       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Everything Is a Derived View
//!
//! The collection engine never mutates its input and never caches. Flattened tag
//! lists, frequency tables, rankings, and filtered subsets are all recomputed from
//! the live slice on every call and have no identity of their own. Inputs are
//! treated as immutable snapshots for the duration of a call; the `&[E]` receivers
//! make that precondition a type-level fact.
//!
//! ## Type-Safe Scoping
//!
//! `Tag<T>` is parameterized by the entity type it belongs to, so tags meant for
//! one entity kind cannot be handed to another—a compile-time-only guarantee with
//! zero runtime cost. The raw value inside a tag can be any clonable, hashable
//! type: text, integers, UUIDs, whatever identifies a tag in your domain.
//!
//! ## Quick Start
//!
//! ```
//! use tagging::{Tag, Taggable, TagCollection, Tags};
//!
//! struct Article {
//!     tags: Tags<Self>,
//! }
//!
//! impl Taggable for Article {
//!     type Raw = String;
//!     fn tags(&self) -> &[Tag<Self>] {
//!         &self.tags
//!     }
//! }
//!
//! let articles = vec![
//!     Article { tags: vec!["rust".into(), "parsing".into()] },
//!     Article { tags: vec!["rust".into()] },
//! ];
//!
//! assert_eq!(articles.all_raw_tags(), ["rust", "parsing", "rust"]);
//! assert_eq!(articles.raw_tags_frequency()["rust"], 2);
//! assert_eq!(articles.tagged_with_raw("parsing".into()).len(), 1);
//! ```
//!
//! ## Serialization
//!
//! With the default `serde` feature, a `Tag<T>` encodes as its bare raw value—a
//! tag of `"foo"` serializes to the JSON string `"foo"`, so an entity's `tags`
//! field is a plain array of scalars on the wire, never an array of objects.
//! Decoding fails only when the raw value itself fails to parse; the wrapper adds
//! no failure mode of its own.
//!
//! ## Module Overview
//!
//! - [`tag`]: The [`Tag`] value type and its conversions
//! - [`taggable`]: The [`Taggable`] capability trait
//! - [`collection`]: The [`TagCollection`] engine and [`Match`] modes

pub mod collection;
pub mod tag;
pub mod taggable;

pub use collection::{Match, TagCollection, DEFAULT_RANKING_LIMIT};
pub use tag::Tag;
pub use taggable::{Taggable, Tags};
