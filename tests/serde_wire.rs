#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};
use serde_json::json;
use tagging::{Tag, Taggable, Tags};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
struct Article {
    title: String,
    tags: Tags<Self>,
}

impl Taggable for Article {
    type Raw = String;
    fn tags(&self) -> &[Tag<Self>] {
        &self.tags
    }
}

#[derive(Serialize, Deserialize)]
struct Asset {
    tags: Tags<Self>,
}

impl Taggable for Asset {
    type Raw = Uuid;
    fn tags(&self) -> &[Tag<Self>] {
        &self.tags
    }
}

#[test]
fn tags_encode_as_a_plain_array_of_scalars() {
    let article = Article {
        title: "hello".to_string(),
        tags: vec!["foo".into(), "bar".into()],
    };

    let encoded = serde_json::to_value(&article).unwrap();
    assert_eq!(
        encoded,
        json!({ "title": "hello", "tags": ["foo", "bar"] })
    );
}

#[test]
fn string_tagged_entity_round_trips() {
    let article = Article {
        title: "hello".to_string(),
        tags: vec!["foo".into(), "bar".into()],
    };

    let encoded = serde_json::to_string(&article).unwrap();
    let decoded: Article = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.tags, article.tags);
}

#[test]
fn uuid_tagged_entity_round_trips() {
    let asset = Asset {
        tags: vec![Tag::new(Uuid::new_v4()), Tag::new(Uuid::new_v4())],
    };

    let encoded = serde_json::to_string(&asset).unwrap();
    let decoded: Asset = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.tags.first(), asset.tags.first());
    assert_eq!(decoded.tags.last(), asset.tags.last());
}

#[test]
fn decoding_rejects_a_scalar_of_the_wrong_kind() {
    let result = serde_json::from_value::<Asset>(json!({ "tags": ["not-a-uuid"] }));
    assert!(result.is_err());
}
