//! Publishing media through a signed-URL broker.
//!
//! The broker hands out short-lived PUT URLs; bytes go straight to the object
//! store and the resulting public URL is recorded as a [`Memory`]. Failures
//! are returned to the caller untouched; the only retry is asking the broker
//! again when a URL expired before it could be used.

use crate::constants::{MAX_UPLOAD_BYTES, OBJECT_KEY_SUFFIX_LEN, SIGNED_URL_TTL_SEC};
use crate::error::MediaError;
use crate::media::{MediaKind, Memory, NewMemory, RecordId, RecordStore};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    pub filename: String,
    pub content_type: String,
}

fn default_ttl() -> u64 {
    SIGNED_URL_TTL_SEC
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrl {
    pub url: String,
    #[serde(default = "default_ttl")]
    pub expires_in_seconds: u64,
}

/// A signed URL pinned to the moment it was issued.
#[derive(Clone, Debug, PartialEq)]
pub struct SignedUpload {
    pub url: String,
    pub expires_at: f64,
}

impl SignedUpload {
    pub fn issued(signed: SignedUrl, now: f64) -> Self {
        Self {
            url: signed.url,
            expires_at: now + signed.expires_in_seconds as f64,
        }
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now >= self.expires_at
    }
}

pub trait UploadBroker {
    fn sign(&mut self, request: &SignRequest) -> Result<SignedUrl, MediaError>;
}

pub trait ObjectStore {
    fn put(&mut self, url: &str, content_type: &str, bytes: &[u8]) -> Result<(), MediaError>;
    fn public_url(&self, key: &str) -> String;
    fn delete(&mut self, key: &str) -> Result<(), MediaError>;
}

/// Caller-side wall clock in seconds. Kept abstract so tests can move time.
pub trait Clock {
    fn now(&self) -> f64;
}

#[derive(Clone, Debug)]
pub struct MediaFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Object key `<timestamp_ms>_<suffix>.<ext>`; suffix is base-36.
pub fn object_key(file_name: &str, timestamp_ms: i64, rng: &mut impl RandomSource) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let suffix: String = (0..OBJECT_KEY_SUFFIX_LEN)
        .map(|_| ALPHABET[rng.index(ALPHABET.len())] as char)
        .collect();
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, e)| e)
        .filter(|e| !e.is_empty() && !e.contains('/'))
        .unwrap_or("bin");
    format!("{}_{}.{}", timestamp_ms, suffix, ext.to_ascii_lowercase())
}

/// Last path segment of a public URL, i.e. the object key.
pub fn key_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().filter(|k| !k.is_empty())
}

pub struct MediaUploader<B, O, S, C> {
    pub broker: B,
    pub objects: O,
    pub store: S,
    pub clock: C,
    pub max_bytes: u64,
}

impl<B, O, S, C> MediaUploader<B, O, S, C>
where
    B: UploadBroker,
    O: ObjectStore,
    S: RecordStore<Memory>,
    C: Clock,
{
    pub fn new(broker: B, objects: O, store: S, clock: C) -> Self {
        Self {
            broker,
            objects,
            store,
            clock,
            max_bytes: MAX_UPLOAD_BYTES,
        }
    }

    fn sign(&mut self, request: &SignRequest) -> Result<SignedUpload, MediaError> {
        let signed = self.broker.sign(request)?;
        Ok(SignedUpload::issued(signed, self.clock.now()))
    }

    /// Upload `file` and record it. `timestamp` is the memory's own date
    /// (milliseconds) and also prefixes the object key.
    pub fn publish(
        &mut self,
        file: &MediaFile,
        caption: &str,
        timestamp: i64,
        rng: &mut impl RandomSource,
    ) -> Result<Memory, MediaError> {
        let size = file.bytes.len() as u64;
        if size == 0 {
            return Err(MediaError::Empty);
        }
        if size > self.max_bytes {
            return Err(MediaError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        let kind = MediaKind::from_content_type(&file.content_type);
        let key = object_key(&file.name, timestamp, rng);
        let request = SignRequest {
            filename: key.clone(),
            content_type: file.content_type.clone(),
        };

        let mut upload = self.sign(&request)?;
        if upload.is_expired(self.clock.now()) {
            log::warn!("[upload] signed URL for {} expired before use, re-signing", key);
            upload = self.sign(&request)?;
            if upload.is_expired(self.clock.now()) {
                return Err(MediaError::Expired);
            }
        }

        self.objects
            .put(&upload.url, &file.content_type, &file.bytes)
            .map_err(|e| {
                log::warn!("[upload] PUT {} failed: {}", key, e);
                e
            })?;

        let memory = self.store.insert(NewMemory {
            media_url: self.objects.public_url(&key),
            caption: caption.to_string(),
            timestamp,
            media_type: kind,
        })?;
        log::info!("[upload] stored memory {} ({:?}, {} bytes)", memory.id, kind, size);
        Ok(memory)
    }

    /// Delete the record, then its object.
    pub fn remove(&mut self, id: RecordId) -> Result<(), MediaError> {
        let memory = self.store.get(id)?;
        self.store.delete(id)?;
        if let Some(key) = key_from_url(&memory.media_url) {
            self.objects.delete(key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedRandom;

    #[test]
    fn object_key_keeps_extension() {
        let key = object_key("Beach Day.JPG", 1700, &mut FixedRandom(0.0));
        assert_eq!(key, "1700_000000.jpg");
        let key = object_key("noext", 5, &mut FixedRandom(0.5));
        assert_eq!(key, "5_iiiiii.bin");
    }

    #[test]
    fn key_from_url_takes_last_segment() {
        assert_eq!(key_from_url("https://cdn.example/m/1_abc.png"), Some("1_abc.png"));
        assert_eq!(key_from_url("https://cdn.example/m/1_abc.png?x=1"), Some("1_abc.png"));
        assert_eq!(key_from_url("https://cdn.example/"), None);
    }

    #[test]
    fn signed_url_defaults_to_sixty_seconds() {
        let s: SignedUrl = serde_json::from_str(r#"{"url":"https://put"}"#).unwrap();
        assert_eq!(s.expires_in_seconds, 60);
        let up = SignedUpload::issued(s, 100.0);
        assert!(!up.is_expired(159.9));
        assert!(up.is_expired(160.0));
    }

    #[test]
    fn sign_request_uses_camel_case() {
        let req = SignRequest {
            filename: "a.png".into(),
            content_type: "image/png".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["contentType"], "image/png");
    }
}
