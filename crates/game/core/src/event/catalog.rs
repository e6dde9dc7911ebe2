//! Event template pool.

use crate::env::EventOracle;
use crate::event::EventTemplate;

/// In-memory catalog of event templates.
///
/// The standard catalog ships as RON in `nation-content`; tests build small
/// catalogs directly.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventCatalog {
    pub templates: Vec<EventTemplate>,
}

impl EventCatalog {
    pub fn new(templates: Vec<EventTemplate>) -> Self {
        Self { templates }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Looks up a template by title.
    pub fn get(&self, title: &str) -> Option<&EventTemplate> {
        self.templates.iter().find(|template| template.title == title)
    }
}

impl EventOracle for EventCatalog {
    fn templates(&self) -> &[EventTemplate] {
        &self.templates
    }
}
