//! Artist types

use serde::{Deserialize, Serialize};

pub type ArtistId = i64;

/// An artist as returned by the remote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub image_path: Option<String>,
}

/// Compact artist reference embedded in track records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: ArtistId,
    pub name: String,
}
