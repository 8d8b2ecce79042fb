//! CLI `run` command — the interactive terminal session.
//!
//! A thin frontend over [`App`]: one line of input becomes one [`Command`],
//! dispatched synchronously; everything the user sees comes back through the
//! [`View`] trait. The map widget of a graphical frontend is reduced to
//! printed coordinates.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::app::{App, Command, View};
use crate::chat::transcript::Role;
use crate::config::WaymarkConfig;
use crate::events::EventRecord;
use crate::markers::presenter::Presenter;
use crate::markers::types::{LatLng, Marker};

const HELP: &str = "\
Commands:
  click <lat> <lng>        select a location (clamped into the campus bound)
  spot <name> [| <desc>]   add a spot at the selected location
  spots                    list spots
  remove <id>              remove a spot
  photos <name>            show the photo set for a named spot
  start / end              use the selected location as route start / end
  route                    draw the route between start and end
  events                   list events
  event <name> | <desc>    post an event
  delete <index>           delete the event at <index>
  chat <message>           talk to the assistant
  help                     show this help
  quit                     leave";

/// Terminal rendition of the map widget and panels.
struct TerminalView {
    reply_delay: Duration,
}

impl TerminalView {
    fn new(config: &WaymarkConfig) -> Self {
        Self {
            reply_delay: Duration::from_millis(config.chat.reply_delay_ms),
        }
    }
}

impl Presenter for TerminalView {
    fn render(&mut self, marker: &Marker) {
        println!(
            "📍 {}  ({:.6}, {:.6})  [{}]",
            marker.name, marker.lat, marker.lng, marker.id
        );
    }

    fn unrender(&mut self, id: &str) {
        println!("(removed point {id})");
    }
}

impl View for TerminalView {
    fn preview(&mut self, location: LatLng) {
        println!("Preview Spot {location}");
    }

    fn clear_preview(&mut self) {}

    fn draw_route(&mut self, start: LatLng, end: LatLng) -> Vec<LatLng> {
        println!("Route: {start} → {end}");
        vec![start, end]
    }

    fn clear_route(&mut self) {
        println!("(previous route cleared)");
    }

    fn show_photos(&mut self, name: &str, images: &[&str]) {
        println!("{name} Photos");
        if images.is_empty() {
            println!("  No images available for this spot.");
        } else {
            for image in images {
                println!("  {image}");
            }
        }
    }

    fn show_events(&mut self, events: &[EventRecord]) {
        if events.is_empty() {
            println!("No ongoing events.");
            return;
        }
        for (index, ev) in events.iter().enumerate() {
            println!("  [{index}] {} — {}", ev.name, ev.desc);
        }
    }

    fn say(&mut self, role: Role, text: &str) {
        match role {
            Role::User => println!("you: {text}"),
            Role::Bot => {
                // Cosmetic pause before the reply appears; nothing awaits it
                std::thread::sleep(self.reply_delay);
                println!("bot: {text}");
            }
        }
    }

    fn show_transcript(&mut self, html: &str) {
        println!("(restored chat history)");
        println!("{html}");
    }

    fn notify(&mut self, message: &str) {
        println!("! {message}");
    }
}

/// Open the database, restore state, and run the input loop until EOF or
/// `quit`.
pub fn run(config: &WaymarkConfig) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let mut view = TerminalView::new(config);
    let mut app = App::restore(conn, &config.map, &mut view)?;

    println!("waymark — campus companion. Type 'help' for commands.");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match parse(input) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => println!("{HELP}"),
            Ok(Input::Spots) => {
                if app.markers().list().is_empty() {
                    println!("(no spots yet — 'click' then 'spot' to add one)");
                }
                for marker in app.markers().list() {
                    println!(
                        "  {}  ({:.6}, {:.6})  {}",
                        marker.id, marker.lat, marker.lng, marker.name
                    );
                }
            }
            Ok(Input::Command(command)) => app.handle(command, &mut view)?,
            Err(usage) => println!("{usage}"),
        }
    }

    Ok(())
}

/// One parsed input line.
enum Input {
    Command(Command),
    Spots,
    Help,
    Quit,
}

/// Parse a line into an [`Input`]. Errors are usage strings for the user.
fn parse(input: &str) -> std::result::Result<Input, String> {
    let (word, rest) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    };

    let command = match word {
        "help" => return Ok(Input::Help),
        "quit" | "exit" => return Ok(Input::Quit),
        "spots" => return Ok(Input::Spots),

        "click" => {
            let (lat, lng) = rest
                .split_once(char::is_whitespace)
                .ok_or("usage: click <lat> <lng>")?;
            let lat: f64 = lat.trim().parse().map_err(|_| "usage: click <lat> <lng>")?;
            let lng: f64 = lng.trim().parse().map_err(|_| "usage: click <lat> <lng>")?;
            Command::MapClick { lat, lng }
        }

        "spot" => {
            let (name, desc) = split_name_desc(rest);
            Command::AddSpot { name, desc }
        }

        "remove" => {
            if rest.is_empty() {
                return Err("usage: remove <id>".into());
            }
            Command::RemoveSpot { id: rest.to_string() }
        }

        "photos" => {
            if rest.is_empty() {
                return Err("usage: photos <name>".into());
            }
            Command::ShowPhotos { name: rest.to_string() }
        }

        "start" => Command::SetStart,
        "end" => Command::SetEnd,
        "route" => Command::ShowRoute,
        "events" => Command::ListEvents,

        "event" => {
            let (name, desc) = split_name_desc(rest);
            Command::AddEvent { name, desc }
        }

        "delete" => {
            let index: usize = rest.parse().map_err(|_| "usage: delete <index>")?;
            Command::DeleteEvent { index }
        }

        "chat" => Command::Chat { text: rest.to_string() },

        other => return Err(format!("unknown command '{other}' — type 'help'")),
    };

    Ok(Input::Command(command))
}

/// Split `"name | desc"` on the first `|`; the description may be absent.
fn split_name_desc(rest: &str) -> (String, String) {
    match rest.split_once('|') {
        Some((name, desc)) => (name.trim().to_string(), desc.trim().to_string()),
        None => (rest.trim().to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_click() {
        match parse("click 13.0101 76.1205") {
            Ok(Input::Command(Command::MapClick { lat, lng })) => {
                assert!((lat - 13.0101).abs() < f64::EPSILON);
                assert!((lng - 76.1205).abs() < f64::EPSILON);
            }
            _ => panic!("expected MapClick"),
        }
    }

    #[test]
    fn parse_spot_with_and_without_desc() {
        match parse("spot Principal room | first floor") {
            Ok(Input::Command(Command::AddSpot { name, desc })) => {
                assert_eq!(name, "Principal room");
                assert_eq!(desc, "first floor");
            }
            _ => panic!("expected AddSpot"),
        }
        match parse("spot Flag") {
            Ok(Input::Command(Command::AddSpot { name, desc })) => {
                assert_eq!(name, "Flag");
                assert_eq!(desc, "");
            }
            _ => panic!("expected AddSpot"),
        }
    }

    #[test]
    fn parse_rejects_bad_numbers() {
        assert!(parse("click here please").is_err());
        assert!(parse("delete first").is_err());
    }

    #[test]
    fn parse_unknown_command() {
        assert!(parse("teleport 1 2").is_err());
    }
}
