//! Records kept by the memories/notes collaborator and the store seam.

use crate::error::StoreError;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// `video/*` and `audio/*` map to their kinds; anything else is an image.
    pub fn from_content_type(content_type: &str) -> Self {
        let ct = content_type.trim().to_ascii_lowercase();
        if ct.starts_with("video/") {
            MediaKind::Video
        } else if ct.starts_with("audio/") {
            MediaKind::Audio
        } else {
            MediaKind::Image
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    Jude,
    Sam,
}

pub trait Record: Clone {
    type Draft;

    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
    fn id(&self) -> RecordId;
    /// Listing order key, newest (largest) first.
    fn timestamp(&self) -> i64;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub id: RecordId,
    pub media_url: String,
    pub caption: String,
    pub timestamp: i64,
    pub media_type: MediaKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMemory {
    pub media_url: String,
    pub caption: String,
    pub timestamp: i64,
    pub media_type: MediaKind,
}

impl Record for Memory {
    type Draft = NewMemory;

    fn from_draft(id: RecordId, d: NewMemory) -> Self {
        Self {
            id,
            media_url: d.media_url,
            caption: d.caption,
            timestamp: d.timestamp,
            media_type: d.media_type,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    pub content: String,
    pub sender: Sender,
    pub created_at: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub content: String,
    pub sender: Sender,
    pub created_at: i64,
}

impl Record for Note {
    type Draft = NewNote;

    fn from_draft(id: RecordId, d: NewNote) -> Self {
        Self {
            id,
            content: d.content,
            sender: d.sender,
            created_at: d.created_at,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn timestamp(&self) -> i64 {
        self.created_at
    }
}

pub trait RecordStore<R: Record> {
    fn insert(&mut self, draft: R::Draft) -> Result<R, StoreError>;
    /// All records, newest first.
    fn list(&self) -> Result<Vec<R>, StoreError>;
    fn get(&self, id: RecordId) -> Result<R, StoreError>;
    fn delete(&mut self, id: RecordId) -> Result<(), StoreError>;
}

/// In-process store with monotonically increasing ids.
pub struct MemoryStore<R> {
    records: FnvHashMap<RecordId, R>,
    next_id: u64,
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self {
            records: FnvHashMap::default(),
            next_id: 1,
        }
    }
}

impl<R> MemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> RecordStore<R> for MemoryStore<R> {
    fn insert(&mut self, draft: R::Draft) -> Result<R, StoreError> {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        let record = R::from_draft(id, draft);
        self.records.insert(id, record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<R>, StoreError> {
        let mut out: Vec<R> = self.records.values().cloned().collect();
        // Ties broken by id so equal timestamps list newest-inserted first.
        out.sort_by(|a, b| {
            b.timestamp()
                .cmp(&a.timestamp())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(out)
    }

    fn get(&self, id: RecordId) -> Result<R, StoreError> {
        self.records
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn delete(&mut self, id: RecordId) -> Result<(), StoreError> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_classification() {
        assert_eq!(MediaKind::from_content_type("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_content_type("Audio/MPEG"), MediaKind::Audio);
        assert_eq!(MediaKind::from_content_type("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::from_content_type(""), MediaKind::Image);
    }

    #[test]
    fn memory_serializes_with_camel_case() {
        let m = Memory {
            id: RecordId(3),
            media_url: "https://cdn/x.jpg".into(),
            caption: "first".into(),
            timestamp: 10,
            media_type: MediaKind::Image,
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["mediaUrl"], "https://cdn/x.jpg");
        assert_eq!(v["mediaType"], "image");
        assert_eq!(v["id"], 3);
    }
}
