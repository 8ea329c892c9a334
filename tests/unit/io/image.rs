//! Tests for wall rasterisation and PNG contact sheets

#[cfg(test)]
mod tests {
    use brickwall::AlgorithmError;
    use brickwall::algorithm::rows::Row;
    use brickwall::algorithm::walls::{Wall, generate_walls};
    use brickwall::algorithm::worker::WallRequest;
    use brickwall::io::configuration::{
        BACKGROUND_COLOR, BRICK_COLOR, MAX_SHEET_PIXELS, MORTAR_COLOR,
    };
    use brickwall::io::image::{
        export_sheet_as_png, render_sheet, render_wall, sheet_dimensions, wall_dimensions,
    };

    fn sample_wall() -> Wall {
        let rows = vec![
            Row::new(vec![2, 2]).unwrap_or_default(),
            Row::new(vec![1, 3]).unwrap_or_default(),
        ];
        Wall::new(rows).unwrap_or_default()
    }

    // Tests pixel dimensions scale with units and rows
    // Verified by swapping the unit and row sizes
    #[test]
    fn test_wall_dimensions() {
        assert_eq!(wall_dimensions(4, 2), (80, 40));
        assert_eq!(wall_dimensions(0, 0), (0, 0));
    }

    // Tests brick interiors are filled and edges drawn in mortar
    // Verified by skipping the mortar outline
    #[test]
    fn test_render_wall_pixels() {
        let img = render_wall(&sample_wall());
        assert_eq!(img.dimensions(), (80, 40));

        // Interior of the first brick on the top row
        assert_eq!(img.get_pixel(10, 10).0, BRICK_COLOR);
        // Seam between the two top bricks at 40 pixels
        assert_eq!(img.get_pixel(40, 10).0, MORTAR_COLOR);
        assert_eq!(img.get_pixel(39, 10).0, MORTAR_COLOR);
        // The bottom row has its seam at 20 pixels instead
        assert_eq!(img.get_pixel(40, 30).0, BRICK_COLOR);
        assert_eq!(img.get_pixel(20, 30).0, MORTAR_COLOR);
    }

    // Tests sheet layout with a partial final line
    // Verified by sizing the sheet from the column setting alone
    #[test]
    fn test_render_sheet_dimensions() {
        let walls = generate_walls(2, 2);
        let request = WallRequest::new(2, 2);
        let Ok(sheet) = render_sheet(&walls, request, 2) else {
            unreachable!("three walls render");
        };
        // Two cells of 40x40 with three 20 pixel gaps each way
        assert_eq!(sheet.dimensions(), (140, 140));
        assert_eq!(sheet.get_pixel(5, 5).0, BACKGROUND_COLOR);
        assert_eq!(sheet.get_pixel(30, 30).0, BRICK_COLOR);

        let Ok(single_line) = render_sheet(&walls, request, 10) else {
            unreachable!("three walls render");
        };
        assert_eq!(single_line.dimensions(), (200, 80));
    }

    // Tests sheet arguments are validated
    // Verified by dividing by the column count before checking it
    #[test]
    fn test_render_sheet_errors() {
        let request = WallRequest::new(4, 2);
        assert!(matches!(
            render_sheet(&[sample_wall()], request, 0),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
        assert!(matches!(
            render_sheet(&[], request, 4),
            Err(AlgorithmError::NoWalls { width: 4, height: 2 })
        ));
    }

    // Tests sheet sizes are computed without allocating
    // Verified by counting gaps once per cell instead of once per boundary
    #[test]
    fn test_sheet_dimensions() {
        assert_eq!(sheet_dimensions(3, 2, 2, 2).ok(), Some((140, 140)));
        assert_eq!(sheet_dimensions(3, 2, 2, 10).ok(), Some((200, 80)));
        assert!(matches!(
            sheet_dimensions(3, 2, 2, 0),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
    }

    // Tests sheets past the pixel cap are refused before rendering
    // Verified by allocating the sheet before checking its size
    #[test]
    fn test_sheet_pixel_cap() {
        // 4x7 has 39304 walls; eight per line needs well over the cap
        let Err(error) = sheet_dimensions(39_304, 4, 7, 8) else {
            unreachable!("the sheet exceeds the cap");
        };
        assert!(matches!(error, AlgorithmError::InvalidParameter { .. }));

        // Products that overflow u64 are refused rather than wrapped
        assert!(sheet_dimensions(usize::MAX, 16, 256, 1).is_err());
        assert!(sheet_dimensions(usize::MAX, usize::MAX, usize::MAX, usize::MAX).is_err());

        let walls = vec![sample_wall(); 40_000];
        assert!(matches!(
            render_sheet(&walls, WallRequest::new(4, 2), 8),
            Err(AlgorithmError::InvalidParameter { .. })
        ));

        let Ok((width, height)) = sheet_dimensions(200, 4, 2, 10) else {
            unreachable!("small sheets fit");
        };
        assert!(u64::from(width) * u64::from(height) <= MAX_SHEET_PIXELS);
    }

    // Tests PNG export creates parent directories and a readable file
    // Verified by skipping directory creation
    #[test]
    fn test_export_sheet_as_png() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory");
        };
        let path = dir.path().join("sheets/walls.png");

        let result = export_sheet_as_png(&generate_walls(3, 2), WallRequest::new(3, 2), 3, &path);
        assert!(result.is_ok());

        let Ok(decoded) = image::open(&path) else {
            unreachable!("written PNG decodes");
        };
        // Three columns and three lines of 60x40 walls
        assert_eq!((decoded.width(), decoded.height()), (260, 200));
    }
}
