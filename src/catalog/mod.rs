//! Catalog lookup for films, materials and rooms.
//!
//! Catalogs are fetched by the caller before a calculation runs; the
//! engine only ever sees the snapshot slices.

mod suggest;

pub use suggest::{suggest_rooms, TtlCache};

use crate::error::{QuoteError, Result};
use crate::model::{Film, Material, Room};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Read access to the reference catalogs.
pub trait Catalog {
    /// Films, optionally only active ones.
    fn get_films(&self, active_only: bool) -> Vec<Film>;
    /// Materials, optionally only active ones.
    fn get_materials(&self, active_only: bool) -> Vec<Material>;
    /// All rooms.
    fn get_rooms(&self) -> Vec<Room>;
}

/// In-memory catalog contents, usually loaded from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub films: Vec<Film>,
    pub materials: Vec<Material>,
    pub rooms: Vec<Room>,
}

impl CatalogSnapshot {
    /// Create a snapshot from catalog lists.
    pub fn new(films: Vec<Film>, materials: Vec<Material>, rooms: Vec<Room>) -> Self {
        Self {
            films,
            materials,
            rooms,
        }
    }

    /// Load a snapshot from a JSON file with `films`, `materials` and `rooms` arrays.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuoteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let snapshot: CatalogSnapshot =
            serde_json::from_str(&content).map_err(|source| QuoteError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(
            "Loaded catalog: {} films, {} materials, {} rooms",
            snapshot.films.len(),
            snapshot.materials.len(),
            snapshot.rooms.len()
        );
        Ok(snapshot)
    }

    /// Find a film by id.
    pub fn find_film(&self, id: &str) -> Option<&Film> {
        self.films.iter().find(|f| f.id == id)
    }
}

impl Catalog for CatalogSnapshot {
    fn get_films(&self, active_only: bool) -> Vec<Film> {
        self.films
            .iter()
            .filter(|f| !active_only || f.active)
            .cloned()
            .collect()
    }

    fn get_materials(&self, active_only: bool) -> Vec<Material> {
        self.materials
            .iter()
            .filter(|m| !active_only || m.active)
            .cloned()
            .collect()
    }

    fn get_rooms(&self) -> Vec<Room> {
        self.rooms.clone()
    }
}

/// Index films by id for constant-time resolution.
pub fn film_index(films: &[Film]) -> HashMap<&str, &Film> {
    films.iter().map(|f| (f.id.as_str(), f)).collect()
}
