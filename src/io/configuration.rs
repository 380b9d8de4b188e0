//! Layout constants and runtime configuration defaults

// Placement rule: four mats may never meet at a single lattice point
/// Highest corner-touch count a lattice point may reach
pub const MAX_CORNER_TOUCHES: u8 = 3;

// Safety limit to keep corner counters and recursion depth bounded
/// Maximum allowed room dimension
pub const MAX_ROOM_DIMENSION: usize = 256;

// Input settings
/// Extension of room description files picked up from a directory
pub const ROOM_FILE_EXTENSION: &str = "txt";

// Progress display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Spinner refresh interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;

// Output settings
/// Suffix added to single solution image filenames
pub const SOLUTION_SUFFIX: &str = "_solution";
/// Suffix added to the animated solution overview
pub const ANIMATION_SUFFIX: &str = "_solutions";
/// Edge length of one cell in exported images, in pixels
pub const DEFAULT_CELL_SIZE: u32 = 24;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 600;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// Image palette
/// Fill colour of two-cell mats
pub const MAT_COLOR: [u8; 4] = [196, 206, 142, 255];
/// Fill colour of the half mat
pub const HALF_COLOR: [u8; 4] = [226, 180, 110, 255];
/// Fill colour of blocked cells
pub const BLOCKED_COLOR: [u8; 4] = [64, 64, 64, 255];
/// Fill colour of cells that are still empty
pub const EMPTY_COLOR: [u8; 4] = [0, 0, 0, 0];
/// Colour of mat edges
pub const BORDER_COLOR: [u8; 4] = [40, 52, 24, 255];
