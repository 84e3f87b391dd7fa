//! QR image caching
//!
//! QR encoding is done by an external encoder. All cards of a batch carry the
//! same payload, so the renderer asks this cache instead of the encoder: each
//! distinct payload is encoded once and the image is shared afterwards.
//! Encoder errors are returned as-is and nothing is cached for that payload.

use crate::composer::CardDescriptor;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Turns a payload string into a QR image
pub trait QrEncoder {
    type Image;
    type Error;

    fn encode(&self, payload: &str) -> Result<Self::Image, Self::Error>;
}

impl<F, I, E> QrEncoder for F
where
    F: Fn(&str) -> Result<I, E>,
{
    type Image = I;
    type Error = E;

    fn encode(&self, payload: &str) -> Result<I, E> {
        self(payload)
    }
}

/// Encode-once cache of QR images, keyed by payload
pub struct QrImageCache<E: QrEncoder> {
    encoder: E,
    images: RwLock<HashMap<String, Arc<E::Image>>>,
}

impl<E: QrEncoder> QrImageCache<E> {
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            images: RwLock::new(HashMap::new()),
        }
    }

    /// The image for `payload`, encoding it on first request
    pub fn image(&self, payload: &str) -> Result<Arc<E::Image>, E::Error> {
        {
            let images = self.images.read().unwrap_or_else(|e| e.into_inner());
            if let Some(image) = images.get(payload) {
                return Ok(Arc::clone(image));
            }
        }

        let mut images = self.images.write().unwrap_or_else(|e| e.into_inner());
        // Another thread may have encoded it while we waited for the lock
        if let Some(image) = images.get(payload) {
            return Ok(Arc::clone(image));
        }

        let image = Arc::new(self.encoder.encode(payload)?);
        images.insert(payload.to_string(), Arc::clone(&image));
        tracing::debug!(target: "card_batch::qr", payload, "QR image encoded");
        Ok(image)
    }

    /// The image for a card's payload
    pub fn image_for(&self, card: &CardDescriptor) -> Result<Arc<E::Image>, E::Error> {
        self.image(&card.qr_payload)
    }

    /// Number of distinct payloads encoded so far
    pub fn len(&self) -> usize {
        self.images.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.images.write().unwrap_or_else(|e| e.into_inner()).clear();
    }
}
