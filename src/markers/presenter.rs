//! The map-widget seam.
//!
//! The store owns the canonical marker list; whatever draws the map holds
//! only a rendering handle keyed by marker id and is driven through this
//! trait.

use super::types::Marker;

/// Rendering collaborator for markers.
pub trait Presenter {
    /// Render a marker as a visual point (with its popup, if the frontend
    /// has one), keyed by `marker.id`.
    fn render(&mut self, marker: &Marker);

    /// Drop the visual handle for `id`. Must tolerate unknown ids.
    fn unrender(&mut self, id: &str);
}

/// Presenter that draws nothing. Backs headless use and tests.
#[allow(dead_code)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self, _marker: &Marker) {}
    fn unrender(&mut self, _id: &str) {}
}
