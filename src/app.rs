//! Application state and command dispatch.
//!
//! The session's mutable state — the open connection, marker store, chat
//! transcript, pending clicked location, and route endpoints — lives in one
//! [`App`] struct. Every user interaction is a [`Command`] dispatched through
//! [`App::handle`], synchronously, on a single thread. Persisted state is
//! restored before the first command is accepted.

use anyhow::Result;
use rusqlite::Connection;

use crate::chat::responder;
use crate::chat::transcript::{ChatTranscript, Role};
use crate::config::MapConfig;
use crate::error::WaymarkError;
use crate::events::{self, EventRecord};
use crate::gallery;
use crate::markers::presenter::Presenter;
use crate::markers::store::MarkerStore;
use crate::markers::types::{LatLng, MapBounds};

/// Frontend seam beyond marker rendering: location previews, route drawing,
/// panels, chat display, and user-facing notices (the alerts of a graphical
/// frontend).
pub trait View: Presenter {
    /// Show the pending clicked location before it becomes a marker.
    fn preview(&mut self, location: LatLng);
    fn clear_preview(&mut self);

    /// Draw a path between two points; returns the waypoints of the found
    /// route.
    fn draw_route(&mut self, start: LatLng, end: LatLng) -> Vec<LatLng>;
    fn clear_route(&mut self);

    /// Display the photo panel for a spot. `images` may be empty — show an
    /// explicit "no images" affordance, not an error.
    fn show_photos(&mut self, name: &str, images: &[&str]);

    fn show_events(&mut self, events: &[EventRecord]);

    /// Display one chat message.
    fn say(&mut self, role: Role, text: &str);

    /// Display the restored transcript blob verbatim.
    fn show_transcript(&mut self, html: &str);

    /// Blocking user-facing notice.
    fn notify(&mut self, message: &str);
}

/// A user interaction.
#[derive(Debug, Clone)]
pub enum Command {
    /// Map clicked: remember the location (clamped into bounds) and preview
    /// it.
    MapClick { lat: f64, lng: f64 },
    /// Submit the spot form for the pending location.
    AddSpot { name: String, desc: String },
    /// Removal requested from a marker popup.
    RemoveSpot { id: String },
    /// Open the photo panel for a named spot.
    ShowPhotos { name: String },
    /// Use the pending location as the route start.
    SetStart,
    /// Use the pending location as the route end.
    SetEnd,
    /// Draw the route between the chosen endpoints.
    ShowRoute,
    ListEvents,
    AddEvent { name: String, desc: String },
    DeleteEvent { index: usize },
    Chat { text: String },
}

/// The session state. One instance per running frontend.
pub struct App {
    conn: Connection,
    markers: MarkerStore,
    transcript: ChatTranscript,
    bounds: MapBounds,
    pending: Option<LatLng>,
    route_start: Option<LatLng>,
    route_end: Option<LatLng>,
    route_open: bool,
}

impl App {
    /// Restore persisted state from an open database and replay it to the
    /// view: markers first, then the chat transcript.
    pub fn restore(conn: Connection, map: &MapConfig, view: &mut impl View) -> Result<Self> {
        let bounds = MapBounds::around(
            LatLng::new(map.base_lat, map.base_lng),
            map.bound_radius_km,
        );
        let markers = MarkerStore::restore(&conn, view)?;
        let transcript = ChatTranscript::restore(&conn)?;
        if !transcript.is_empty() {
            view.show_transcript(transcript.html());
        }

        Ok(Self {
            conn,
            markers,
            transcript,
            bounds,
            pending: None,
            route_start: None,
            route_end: None,
            route_open: false,
        })
    }

    /// Dispatch one command. The single event-processing entry point.
    pub fn handle(&mut self, command: Command, view: &mut impl View) -> Result<()> {
        match command {
            Command::MapClick { lat, lng } => {
                if !lat.is_finite() || !lng.is_finite() {
                    view.notify("Select a valid location on the map!");
                    return Ok(());
                }
                let location = self.bounds.clamp(LatLng::new(lat, lng));
                self.pending = Some(location);
                view.preview(location);
            }

            Command::AddSpot { name, desc } => {
                let Some(location) = self.pending.take() else {
                    view.notify("Click on the map to select a location first!");
                    return Ok(());
                };
                view.clear_preview();
                match self
                    .markers
                    .create(&self.conn, view, location.lat, location.lng, &name, &desc)
                {
                    Ok(_) => {}
                    Err(err @ (WaymarkError::Validation(_)
                    | WaymarkError::InvalidCoordinate { .. })) => {
                        view.notify(&err.to_string());
                    }
                    Err(err) => return Err(err.into()),
                }
            }

            Command::RemoveSpot { id } => {
                if self.markers.remove(&self.conn, view, &id)? {
                    view.notify("Marker removed successfully!");
                }
            }

            Command::ShowPhotos { name } => {
                view.show_photos(&name, gallery::images_for(&name));
            }

            Command::SetStart => match self.pending {
                Some(location) => {
                    self.route_start = Some(location);
                    view.notify("Start point set!");
                }
                None => view.notify("Select a start location on map!"),
            },

            Command::SetEnd => match self.pending {
                Some(location) => {
                    self.route_end = Some(location);
                    view.notify("End point set!");
                }
                None => view.notify("Select an end location on map!"),
            },

            Command::ShowRoute => {
                let (Some(start), Some(end)) = (self.route_start, self.route_end) else {
                    view.notify("Please set both Start and End points first!");
                    return Ok(());
                };
                if self.route_open {
                    view.clear_route();
                }
                let waypoints = view.draw_route(start, end);
                self.route_open = true;
                tracing::debug!(waypoints = waypoints.len(), "route found");
            }

            Command::ListEvents => {
                let events = events::list(&self.conn)?;
                view.show_events(&events);
            }

            Command::AddEvent { name, desc } => match events::add(&self.conn, &name, &desc) {
                Ok(_) => view.show_events(&events::list(&self.conn)?),
                Err(WaymarkError::Validation(msg)) => view.notify(&msg),
                Err(err) => return Err(err.into()),
            },

            Command::DeleteEvent { index } => {
                events::remove_at(&self.conn, index)?;
                view.show_events(&events::list(&self.conn)?);
            }

            Command::Chat { text } => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(());
                }
                view.say(Role::User, text);
                self.transcript.append(&self.conn, text, Role::User)?;

                let answer = responder::respond(text);
                self.transcript.append(&self.conn, answer, Role::Bot)?;
                view.say(Role::Bot, answer);
            }
        }

        Ok(())
    }

    pub fn markers(&self) -> &MarkerStore {
        &self.markers
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}
