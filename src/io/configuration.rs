//! Enumeration limits, rendering geometry and runtime defaults

/// Brick widths available to every row, in ascending order
pub const BRICK_SIZES: [u8; 4] = [1, 2, 3, 4];

// Dimensions used when none are given
/// Default wall width in brick units
pub const DEFAULT_WIDTH: i64 = 4;
/// Default number of rows per wall
pub const DEFAULT_HEIGHT: usize = 2;

// Row counts grow roughly as 1.93^width, and the relation is quadratic in rows
/// Maximum accepted wall width
pub const MAX_WIDTH: i64 = 16;
/// Maximum accepted wall height
pub const MAX_HEIGHT: usize = 256;

/// Default cap on the number of walls materialised in one request
pub const DEFAULT_WALL_LIMIT: u128 = 100_000;

/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Name given to background enumeration threads
pub const WORKER_THREAD_NAME: &str = "wall-enumerator";

// Rendering geometry in pixels
/// Width of one brick unit
pub const BRICK_UNIT_PX: u32 = 20;
/// Height of one row
pub const ROW_HEIGHT_PX: u32 = 20;
/// Mortar line drawn around every brick
pub const MORTAR_PX: u32 = 1;
/// Space between walls on a contact sheet
pub const WALL_GAP_PX: u32 = 20;
/// Default number of walls per contact sheet line
pub const DEFAULT_SHEET_COLUMNS: usize = 8;
/// Largest contact sheet rendered, in pixels (200 MB of RGBA)
pub const MAX_SHEET_PIXELS: u64 = 50_000_000;

// Colours as RGBA
/// Brick fill colour
pub const BRICK_COLOR: [u8; 4] = [255, 165, 0, 255];
/// Mortar colour
pub const MORTAR_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Background colour behind walls
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

// Animation settings
/// Default time each wall is shown in an animation
pub const DEFAULT_FRAME_DELAY_MS: u32 = 500;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
