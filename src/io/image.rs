//! Raster rendering of walls and PNG contact sheet export

use crate::algorithm::walls::Wall;
use crate::algorithm::worker::WallRequest;
use crate::io::configuration::{
    BACKGROUND_COLOR, BRICK_COLOR, BRICK_UNIT_PX, MAX_SHEET_PIXELS, MORTAR_COLOR, MORTAR_PX,
    ROW_HEIGHT_PX, WALL_GAP_PX,
};
use crate::io::error::{AlgorithmError, Result, WithPath, invalid_parameter};
use image::{Rgba, RgbaImage, imageops};
use std::path::Path;

/// Pixel size of a wall with `units` brick units per row and `rows` rows
pub const fn wall_dimensions(units: usize, rows: usize) -> (u32, u32) {
    (units as u32 * BRICK_UNIT_PX, rows as u32 * ROW_HEIGHT_PX)
}

// Fills a brick rectangle and outlines it with mortar
fn draw_brick(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32) {
    for py in y..y + height {
        for px in x..x + width {
            let on_mortar = px < x + MORTAR_PX
                || px + MORTAR_PX >= x + width
                || py < y + MORTAR_PX
                || py + MORTAR_PX >= y + height;
            let color = if on_mortar { MORTAR_COLOR } else { BRICK_COLOR };
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = Rgba(color);
            }
        }
    }
}

/// Draw one wall, top row at the top of the image
pub fn render_wall(wall: &Wall) -> RgbaImage {
    let (width, height) = wall_dimensions(wall.width().unwrap_or(0), wall.height());
    let mut img = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR));

    for (row_index, row) in wall.rows().iter().enumerate() {
        let y = row_index as u32 * ROW_HEIGHT_PX;
        let mut x = 0;
        for &brick in row.bricks() {
            let brick_width = u32::from(brick) * BRICK_UNIT_PX;
            draw_brick(&mut img, x, y, brick_width, ROW_HEIGHT_PX);
            x += brick_width;
        }
    }

    img
}

/// Pixel size of a contact sheet holding `walls` walls of `units` by `rows`
///
/// Checked before any wall is enumerated or any pixel is allocated.
///
/// # Errors
///
/// Returns an error if:
/// - `columns` is zero
/// - The sheet would exceed `MAX_SHEET_PIXELS`
pub fn sheet_dimensions(
    walls: usize,
    units: usize,
    rows: usize,
    columns: usize,
) -> Result<(u32, u32)> {
    if columns == 0 {
        return Err(invalid_parameter(
            "columns",
            &columns,
            &"at least one wall per line is required",
        ));
    }

    let gap = u64::from(WALL_GAP_PX);
    let columns_used = columns.min(walls) as u64;
    let lines = walls.div_ceil(columns) as u64;
    let span = |cells: u64, cell: u64| {
        cells
            .checked_mul(cell)?
            .checked_add(cells.checked_add(1)?.checked_mul(gap)?)
    };

    let width = (units as u64)
        .checked_mul(u64::from(BRICK_UNIT_PX))
        .and_then(|cell| span(columns_used, cell));
    let height = (rows as u64)
        .checked_mul(u64::from(ROW_HEIGHT_PX))
        .and_then(|cell| span(lines, cell));
    let pixels = width.zip(height).and_then(|(w, h)| w.checked_mul(h));

    match (width, height, pixels) {
        (Some(w), Some(h), Some(pixels)) if pixels <= MAX_SHEET_PIXELS => {
            match (u32::try_from(w), u32::try_from(h)) {
                (Ok(w), Ok(h)) => Ok((w, h)),
                _ => Err(sheet_too_large(walls)),
            }
        }
        _ => Err(sheet_too_large(walls)),
    }
}

fn sheet_too_large(walls: usize) -> AlgorithmError {
    invalid_parameter(
        "png",
        &format!("{walls} walls"),
        &format!(
            "contact sheet would exceed {MAX_SHEET_PIXELS} pixels; use --sample or fewer rows"
        ),
    )
}

/// Lay walls out in a grid, `columns` walls per line, separated by gaps
///
/// # Errors
///
/// Returns an error if `columns` is zero, `walls` is empty or the sheet is too large
pub fn render_sheet(walls: &[Wall], request: WallRequest, columns: usize) -> Result<RgbaImage> {
    let Some(first) = walls.first() else {
        return Err(AlgorithmError::NoWalls {
            width: request.width,
            height: request.height,
        });
    };

    let (cell_width, cell_height) = wall_dimensions(first.width().unwrap_or(0), first.height());
    let (sheet_width, sheet_height) = sheet_dimensions(
        walls.len(),
        first.width().unwrap_or(0),
        first.height(),
        columns,
    )?;
    let mut sheet = RgbaImage::from_pixel(sheet_width, sheet_height, Rgba(BACKGROUND_COLOR));

    for (index, wall) in walls.iter().enumerate() {
        let column = (index % columns) as u32;
        let line = (index / columns) as u32;
        let x = WALL_GAP_PX + column * (cell_width + WALL_GAP_PX);
        let y = WALL_GAP_PX + line * (cell_height + WALL_GAP_PX);
        imageops::overlay(&mut sheet, &render_wall(wall), i64::from(x), i64::from(y));
    }

    Ok(sheet)
}

/// Export walls as a PNG contact sheet
///
/// # Errors
///
/// Returns an error if:
/// - `walls` is empty or `columns` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_sheet_as_png(
    walls: &[Wall],
    request: WallRequest,
    columns: usize,
    output_path: &Path,
) -> Result<()> {
    let sheet = render_sheet(walls, request, columns)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    sheet
        .save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %output_path.display(), walls = walls.len(), "saved contact sheet");
    Ok(())
}
