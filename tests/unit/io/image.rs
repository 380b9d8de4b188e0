//! Tests for PNG and GIF export of layouts

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tatami::LayoutError;
    use tatami::algorithm::{Solution, Solver};
    use tatami::io::configuration::{BORDER_COLOR, MAT_COLOR};
    use tatami::io::image::{draw_solution, export_solution_png, export_solutions_gif};
    use tatami::spatial::{Direction, Grid, Occupant};

    fn horizontal_mat() -> Solution {
        let mut grid = Grid::new(1, 2);
        assert!(grid.place([0, 0], Occupant::Mat(Direction::West), 0).is_ok());
        Solution::capture(&grid)
    }

    // Tests image size and the open side between mat halves
    // Verified by outlining the shared side as well
    #[test]
    fn test_draw_solution_outlines_mat() {
        let img = draw_solution(&horizontal_mat(), 12).expect("Failed to draw solution");
        assert_eq!(img.dimensions(), (24, 12));

        assert_eq!(img.get_pixel(0, 0), &Rgba(BORDER_COLOR));
        assert_eq!(img.get_pixel(23, 6), &Rgba(BORDER_COLOR));
        assert_eq!(img.get_pixel(6, 6), &Rgba(MAT_COLOR));
        assert_eq!(img.get_pixel(11, 6), &Rgba(MAT_COLOR));
        assert_eq!(img.get_pixel(12, 6), &Rgba(MAT_COLOR));
    }

    // Tests grid row 0 is drawn at the bottom of the image
    // Verified by drawing rows top down
    #[test]
    fn test_draw_solution_flips_rows() {
        let mut grid = Grid::new(2, 1);
        assert!(grid.set_blocked([1, 0]).is_ok());
        assert!(grid.place([0, 0], Occupant::Half, 0).is_ok());
        let img = draw_solution(&Solution::capture(&grid), 10).expect("Failed to draw solution");

        assert_eq!(img.get_pixel(5, 15), &Rgba(tatami::io::configuration::HALF_COLOR));
        assert_eq!(img.get_pixel(5, 5), &Rgba(tatami::io::configuration::BLOCKED_COLOR));
    }

    // Tests zero cell size is rejected
    // Verified by removing the cell size check
    #[test]
    fn test_draw_solution_zero_cell_size() {
        assert!(matches!(
            draw_solution(&horizontal_mat(), 0),
            Err(LayoutError::InvalidParameter { .. })
        ));
    }

    // Tests PNG file creation including missing parent directories
    // Verified by disabling directory creation
    #[test]
    fn test_export_solution_png_creates_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("layout.png");

        let result = export_solution_png(&horizontal_mat(), &path, 8);
        assert!(result.is_ok(), "PNG export should succeed: {result:?}");
        assert!(path.exists(), "PNG file should be created");
    }

    // Tests an animation with one frame per solution
    // Verified by disabling file creation
    #[test]
    fn test_export_solutions_gif_creates_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("layouts.gif");
        let outcome = Solver::new(Grid::new(2, 2)).solve();

        let result = export_solutions_gif(outcome.solutions.as_slice(), &path, 8, 10);
        assert!(result.is_ok(), "GIF export should succeed: {result:?}");
        assert!(path.exists());
    }

    // Tests an empty solution list is an error
    // Verified by ignoring empty input check
    #[test]
    fn test_export_solutions_gif_empty() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("none.gif");

        let result = export_solutions_gif(&[], &path, 8, 100);
        assert!(matches!(result, Err(LayoutError::NothingToExport { .. })));
        assert!(!path.exists());
    }
}
