//! Tests for layout constants and output defaults

#[cfg(test)]
mod tests {
    use tatami::io::configuration::{
        ANIMATION_SUFFIX, DEFAULT_CELL_SIZE, GIF_FRAME_DELAY_MS, MAX_CORNER_TOUCHES,
        MAX_INDIVIDUAL_PROGRESS_BARS, MAX_ROOM_DIMENSION, ROOM_FILE_EXTENSION, SOLUTION_SUFFIX,
        VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests the corner limit forbids four mats meeting at a point
    // Verified by raising the limit to four
    #[test]
    fn test_max_corner_touches() {
        assert_eq!(MAX_CORNER_TOUCHES, 3);
    }

    // Tests the room dimension limit
    // Verified by changing the limit
    #[test]
    fn test_max_room_dimension() {
        assert_eq!(MAX_ROOM_DIMENSION, 256);
    }

    // Tests the default frame delay is shown as configured by viewers
    // Verified by lowering the default delay below the viewer minimum
    #[test]
    fn test_frame_delay_above_viewer_minimum() {
        assert_eq!(GIF_FRAME_DELAY_MS, 600);
        assert_eq!(VIEWER_MIN_FRAME_DELAY_MS, 50);
    }

    // Tests output naming constants are distinct
    // Verified by reusing the single image suffix for animations
    #[test]
    fn test_output_suffixes() {
        assert_eq!(SOLUTION_SUFFIX, "_solution");
        assert_eq!(ANIMATION_SUFFIX, "_solutions");
        assert_eq!(ROOM_FILE_EXTENSION, "txt");
    }

    // Tests the default cell size and progress bar limit
    // Verified by changing the defaults
    #[test]
    fn test_display_defaults() {
        assert_eq!(DEFAULT_CELL_SIZE, 24);
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}
