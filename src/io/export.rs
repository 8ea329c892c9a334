//! JSON messages exchanged with callers: requests in, wall collections out

use crate::algorithm::walls::Wall;
use crate::algorithm::worker::WallRequest;
use crate::io::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Complete result of one enumeration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallReport {
    /// Width of every row
    pub width: i64,
    /// Number of rows in every wall
    pub height: usize,
    /// Number of walls in `walls`
    pub count: usize,
    /// Walls in enumeration order
    pub walls: Vec<Wall>,
}

impl WallReport {
    /// Wrap enumerated walls together with their request
    pub const fn new(request: WallRequest, walls: Vec<Wall>) -> Self {
        Self {
            width: request.width,
            height: request.height,
            count: walls.len(),
            walls,
        }
    }
}

/// Decode a request message such as `{"width": 4, "height": 2}`
///
/// # Errors
///
/// Returns an error if the text is not a valid request object
pub fn parse_request(json: &str) -> Result<WallRequest> {
    Ok(serde_json::from_str(json)?)
}

/// Write a report as pretty-printed JSON followed by a newline
///
/// # Errors
///
/// Returns an error if encoding or writing fails
pub fn write_report<W: Write>(out: &mut W, report: &WallReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
