//! Command-recording canvas
//!
//! Keeps the draw calls of the most recent frame. Used by the native runner
//! and by render tests in place of a real surface.

use glam::Vec2;
use serde::Serialize;

use super::{Canvas, Style, TextStyle};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Path {
        points: Vec<Vec2>,
        style: Style,
    },
    Text {
        pos: Vec2,
        text: String,
        style: TextStyle,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of clears seen so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = (&[Vec2], &Style)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Path { points, style } => Some((points.as_slice(), style)),
            _ => None,
        })
    }
}

impl Canvas for Recorder {
    /// Starts a new frame, dropping the previous one
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn path(&mut self, points: &[Vec2], style: &Style) {
        if points.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            style: *style,
        });
    }

    fn text(&mut self, pos: Vec2, text: &str, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            style: *style,
        });
    }
}
