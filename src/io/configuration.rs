//! Pattern geometry constants and default theme targets

// Grid layout
/// Number of rows and columns of rectangles in one tile
pub const GRID_SIZE: usize = 17;

/// Width and height of the SVG pattern tile in user units
pub const PATTERN_SIZE: u32 = 24;

/// Width and height of each rectangle
pub const RECT_SIZE: f64 = 1.3;

// Rectangle size plus stroke width so neighbouring edges touch
/// Distance between the origins of adjacent rectangles
pub const SPACING: f64 = 1.4;

/// Stroke width drawn around each rectangle
pub const STROKE_WIDTH: f64 = 0.1;

/// Corner radius of each rectangle
pub const CORNER_RADIUS: f64 = 0.26;

/// Fill colors, darkest to lightest
pub const PALETTE: [&str; 3] = ["#006d32", "#26a641", "#39d353"];

/// `id` attribute of the pattern element that gets replaced
pub const PATTERN_ID: &str = "heatmap";

// Default theme targets
/// SVG asset used by the dark theme
pub const DARK_THEME_PATH: &str = "frontend/src/assets/heatmap-dark.svg";
/// Gap color for the dark theme
pub const DARK_GAP_COLOR: &str = "#fff";

/// SVG asset used by the light theme
pub const LIGHT_THEME_PATH: &str = "frontend/src/assets/heatmap-light.svg";
/// Gap color for the light theme
pub const LIGHT_GAP_COLOR: &str = "#000";

// Output layout
/// Indentation of the `<pattern>` opening and closing tags
pub const PATTERN_INDENT: &str = "    ";
/// Indentation of elements nested inside the pattern
pub const ELEMENT_INDENT: &str = "      ";
