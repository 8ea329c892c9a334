//! Animated GIF that cycles through enumerated walls

use crate::algorithm::walls::Wall;
use crate::io::configuration::{BACKGROUND_COLOR, VIEWER_MIN_FRAME_DELAY_MS, WALL_GAP_PX};
use crate::io::error::{AlgorithmError, Result, WithPath};
use crate::io::image::{render_wall, wall_dimensions};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage, imageops};
use std::path::Path;

/// Collects walls to be shown one after another in a looping animation
///
/// Frames are rendered lazily while encoding, so capturing many walls only
/// holds the walls themselves in memory.
pub struct WallAnimation {
    walls: Vec<Wall>,
    frame_delay_ms: u32,
}

impl WallAnimation {
    /// Create an animation showing each wall for `frame_delay_ms`
    pub const fn new(frame_delay_ms: u32) -> Self {
        Self {
            walls: Vec::new(),
            frame_delay_ms,
        }
    }

    /// Create an animation from an existing wall collection
    pub fn from_walls(walls: &[Wall], frame_delay_ms: u32) -> Self {
        Self {
            walls: walls.to_vec(),
            frame_delay_ms,
        }
    }

    /// Append a wall as the next frame
    pub fn push(&mut self, wall: Wall) {
        self.walls.push(wall);
    }

    /// Number of frames in the animation
    pub const fn frame_count(&self) -> usize {
        self.walls.len()
    }

    /// Delay actually written to the file
    ///
    /// Delays shorter than most viewers honour are raised to the viewer minimum.
    pub const fn effective_delay_ms(&self) -> u32 {
        if self.frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS
        } else {
            self.frame_delay_ms
        }
    }

    // All frames share the size of the largest wall plus a margin
    fn canvas_size(&self) -> (u32, u32) {
        let units = self
            .walls
            .iter()
            .filter_map(Wall::width)
            .max()
            .unwrap_or(0);
        let rows = self.walls.iter().map(Wall::height).max().unwrap_or(0);
        let (width, height) = wall_dimensions(units, rows);
        (width + 2 * WALL_GAP_PX, height + 2 * WALL_GAP_PX)
    }

    fn render_frame(&self, wall: &Wall, canvas: (u32, u32)) -> Frame {
        let mut img = RgbaImage::from_pixel(canvas.0, canvas.1, Rgba(BACKGROUND_COLOR));
        imageops::overlay(
            &mut img,
            &render_wall(wall),
            i64::from(WALL_GAP_PX),
            i64::from(WALL_GAP_PX),
        );
        Frame::from_parts(
            img,
            0,
            0,
            Delay::from_numer_denom_ms(self.effective_delay_ms(), 1),
        )
    }

    /// Export the captured walls as a looping GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No walls were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path) -> Result<()> {
        if self.walls.is_empty() {
            return Err(AlgorithmError::InvalidParameter {
                parameter: "animation",
                value: String::new(),
                reason: "No walls captured for animation".to_string(),
            });
        }

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }

        let file = std::fs::File::create(output_path).with_path(output_path, "create file")?;

        let export_error = |e: image::ImageError| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };

        let canvas = self.canvas_size();
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder
            .encode_frames(self.walls.iter().map(|wall| self.render_frame(wall, canvas)))
            .map_err(export_error)?;

        tracing::info!(
            path = %output_path.display(),
            frames = self.frame_count(),
            "saved animation"
        );
        Ok(())
    }
}
