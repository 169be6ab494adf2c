//! Section - A room or area grouping windows within a quote.

use super::{Room, Window};
use crate::config::UNASSIGNED_ROOM;
use serde::{Deserialize, Serialize};

/// A logical area of the job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Free-form section name.
    #[serde(default)]
    pub name: Option<String>,
    /// Link to a catalog room.
    #[serde(default)]
    pub room_id: Option<String>,
    /// Name that overrides the linked room.
    #[serde(default)]
    pub custom_name: Option<String>,
    /// Film override for every window in the section.
    #[serde(default)]
    pub film_id: Option<String>,
    /// Windows in display order.
    #[serde(default)]
    pub windows: Vec<Window>,
}

impl Section {
    /// Create an empty section.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Add a window.
    pub fn add_window(&mut self, window: Window) {
        self.windows.push(window);
    }

    /// Resolve the room label: custom name, linked room name, section name, then "Unassigned".
    pub fn room_label(&self, rooms: &[Room]) -> String {
        let linked = self
            .room_id
            .as_deref()
            .and_then(|id| rooms.iter().find(|r| r.id == id))
            .map(|r| r.name.as_str());

        [self.custom_name.as_deref(), linked, self.name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(UNASSIGNED_ROOM)
            .to_string()
    }

    /// Total quantity of openings, counting only whole positive quantities.
    pub fn total_quantity(&self) -> i64 {
        self.windows
            .iter()
            .filter_map(|w| w.whole_quantity())
            .map(i64::from)
            .sum()
    }
}
