//! Input producer: raw pointer events and stdin command lines.
//!
//! Pointer events arrive in display pixels and are mapped into logical canvas
//! coordinates before they reach the simulation.

use std::num::ParseFloatError;
use std::num::ParseIntError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bulwark_core::commands::PlayerCommand;
use bulwark_core::geometry::CanvasScale;

use crate::state::GameLoopCommand;

/// One physical tap or click on the displayed canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Producer-assigned id, increasing per physical event.
    pub event_id: u64,
    pub px: f64,
    pub py: f64,
}

/// Converts pointer events into fire commands, at most one per event id.
#[derive(Debug, Clone, Default)]
pub struct PointerMapper {
    scale: CanvasScale,
    last_event: Option<u64>,
}

impl PointerMapper {
    pub fn new(scale: CanvasScale) -> Self {
        Self {
            scale,
            last_event: None,
        }
    }

    /// Track a resized display.
    pub fn set_scale(&mut self, scale: CanvasScale) {
        self.scale = scale;
    }

    /// Map an event to a fire command. Ids at or below the last accepted one
    /// are replays and map to nothing.
    pub fn map(&mut self, event: PointerEvent) -> Option<PlayerCommand> {
        if self.last_event.is_some_and(|last| event.event_id <= last) {
            log::debug!("pointer event {} dropped as duplicate", event.event_id);
            return None;
        }
        self.last_event = Some(event.event_id);
        let target = self.scale.to_canvas(event.px, event.py);
        Some(PlayerCommand::Fire {
            x: target.x,
            y: target.y,
        })
    }
}

/// Errors from parsing a stdin command line.
#[derive(Debug, Error, PartialEq)]
pub enum LineError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` is missing argument `{argument}`")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{0}` takes no further arguments")]
    TrailingInput(&'static str),
    #[error("bad event id: {0}")]
    BadEventId(#[from] ParseIntError),
    #[error("bad coordinate: {0}")]
    BadCoordinate(#[from] ParseFloatError),
}

/// Parse one stdin line.
///
/// Accepted forms: `start`, `restart`, `quit`, `tap <id> <px> <py>` in display
/// pixels, and `fire <x> <y>` in logical canvas units. Blank lines and lines
/// starting with `#` yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<GameLoopCommand>, LineError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    if head.starts_with('#') {
        return Ok(None);
    }

    let command = match head.to_ascii_lowercase().as_str() {
        "start" => {
            no_more(&mut words, "start")?;
            GameLoopCommand::Player(PlayerCommand::Start)
        }
        "restart" => {
            no_more(&mut words, "restart")?;
            GameLoopCommand::Player(PlayerCommand::Restart)
        }
        "quit" | "exit" => {
            no_more(&mut words, "quit")?;
            GameLoopCommand::Shutdown
        }
        "tap" => {
            let event_id = arg(&mut words, "tap", "id")?.parse()?;
            let px = arg(&mut words, "tap", "px")?.parse()?;
            let py = arg(&mut words, "tap", "py")?.parse()?;
            no_more(&mut words, "tap")?;
            GameLoopCommand::Pointer(PointerEvent { event_id, px, py })
        }
        "fire" => {
            let x = arg(&mut words, "fire", "x")?.parse()?;
            let y = arg(&mut words, "fire", "y")?.parse()?;
            no_more(&mut words, "fire")?;
            GameLoopCommand::Player(PlayerCommand::Fire { x, y })
        }
        _ => return Err(LineError::UnknownCommand(head.to_string())),
    };
    Ok(Some(command))
}

fn arg<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, LineError> {
    words
        .next()
        .ok_or(LineError::MissingArgument { command, argument })
}

fn no_more<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<(), LineError> {
    match words.next() {
        Some(_) => Err(LineError::TrailingInput(command)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(event_id: u64, px: f64, py: f64) -> PointerEvent {
        PointerEvent { event_id, px, py }
    }

    #[test]
    fn test_pointer_scaled_to_canvas() {
        let mut mapper = PointerMapper::new(CanvasScale::new(400.0, 300.0));
        let cmd = mapper.map(tap(1, 100.0, 50.0));
        assert_eq!(cmd, Some(PlayerCommand::Fire { x: 200.0, y: 100.0 }));
    }

    #[test]
    fn test_pointer_default_scale_is_identity() {
        let mut mapper = PointerMapper::default();
        let cmd = mapper.map(tap(7, 123.0, 456.0));
        assert_eq!(cmd, Some(PlayerCommand::Fire { x: 123.0, y: 456.0 }));
    }

    #[test]
    fn test_pointer_duplicate_event_dropped() {
        let mut mapper = PointerMapper::default();
        assert!(mapper.map(tap(3, 10.0, 10.0)).is_some());
        assert!(mapper.map(tap(3, 10.0, 10.0)).is_none());
        assert!(mapper.map(tap(2, 50.0, 10.0)).is_none());
        assert!(mapper.map(tap(4, 10.0, 10.0)).is_some());
    }

    #[test]
    fn test_pointer_rescale() {
        let mut mapper = PointerMapper::default();
        mapper.set_scale(CanvasScale::new(1600.0, 1200.0));
        let cmd = mapper.map(tap(1, 800.0, 600.0));
        assert_eq!(cmd, Some(PlayerCommand::Fire { x: 400.0, y: 300.0 }));
    }

    #[test]
    fn test_parse_lifecycle_lines() {
        assert!(matches!(
            parse_line("start"),
            Ok(Some(GameLoopCommand::Player(PlayerCommand::Start)))
        ));
        assert!(matches!(
            parse_line("  RESTART "),
            Ok(Some(GameLoopCommand::Player(PlayerCommand::Restart)))
        ));
        assert!(matches!(parse_line("quit"), Ok(Some(GameLoopCommand::Shutdown))));
    }

    #[test]
    fn test_parse_tap_and_fire() {
        match parse_line("tap 12 300.5 200") {
            Ok(Some(GameLoopCommand::Pointer(event))) => {
                assert_eq!(event, tap(12, 300.5, 200.0));
            }
            other => panic!("unexpected parse: {other:?}"),
        }
        match parse_line("fire 400 120") {
            Ok(Some(GameLoopCommand::Player(cmd))) => {
                assert_eq!(cmd, PlayerCommand::Fire { x: 400.0, y: 120.0 });
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_parse_blank_and_comment() {
        assert!(matches!(parse_line(""), Ok(None)));
        assert!(matches!(parse_line("   "), Ok(None)));
        assert!(matches!(parse_line("# wave two"), Ok(None)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_line("launch").err(),
            Some(LineError::UnknownCommand("launch".into()))
        );
        assert_eq!(
            parse_line("tap 1 20").err(),
            Some(LineError::MissingArgument {
                command: "tap",
                argument: "py"
            })
        );
        assert_eq!(
            parse_line("start now").err(),
            Some(LineError::TrailingInput("start"))
        );
        assert!(matches!(parse_line("tap x 1 2"), Err(LineError::BadEventId(_))));
        assert!(matches!(
            parse_line("fire 10 north"),
            Err(LineError::BadCoordinate(_))
        ));
    }
}
