//! Domain DTOs for the todo API.
//!
//! # Design
//! `TodoItem` serializes with camelCase names but decodes field names
//! case-insensitively, so `Id`, `id` and `ID` all land in the same field.
//! Decoding is lenient: unknown fields are skipped and missing or `null`
//! fields keep their default value. The id may arrive as a JSON number or as
//! a string holding an integer.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub is_done: bool,
}

/// Request payload for creating a new item. Identity and completion are
/// assigned by the server, so only the title is sent.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewTodoItem {
    pub title: String,
}

enum Field {
    Id,
    Title,
    IsDone,
    Other,
}

impl Field {
    fn from_key(key: &str) -> Self {
        if key.eq_ignore_ascii_case("id") {
            Field::Id
        } else if key.eq_ignore_ascii_case("title") {
            Field::Title
        } else if key.eq_ignore_ascii_case("isDone") {
            Field::IsDone
        } else {
            Field::Other
        }
    }
}

impl<'de> Deserialize<'de> for TodoItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TodoItemVisitor)
    }
}

struct TodoItemVisitor;

impl<'de> Visitor<'de> for TodoItemVisitor {
    type Value = TodoItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a todo item object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<TodoItem, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut item = TodoItem::default();
        while let Some(key) = map.next_key::<String>()? {
            match Field::from_key(&key) {
                Field::Id => {
                    item.id = map.next_value::<Option<ItemId>>()?.map(|id| id.0).unwrap_or_default();
                }
                Field::Title => {
                    item.title = map.next_value::<Option<String>>()?.unwrap_or_default();
                }
                Field::IsDone => {
                    item.is_done = map.next_value::<Option<bool>>()?.unwrap_or_default();
                }
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(item)
    }
}

/// Server id as either a JSON integer or a numeric string.
struct ItemId(i64);

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ItemIdVisitor)
    }
}

struct ItemIdVisitor;

impl<'de> Visitor<'de> for ItemIdVisitor {
    type Value = ItemId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer id or a string holding one")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ItemId, E> {
        Ok(ItemId(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ItemId, E> {
        i64::try_from(v)
            .map(ItemId)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ItemId, E> {
        v.trim()
            .parse()
            .map(ItemId)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}
