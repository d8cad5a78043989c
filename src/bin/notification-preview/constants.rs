/// Window title.
pub const APP_NAME: &str = "Android Notification Previewer";

/// Initial and minimum window size in points.
pub const WINDOW_SIZE: [f32; 2] = [980.0, 620.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [920.0, 560.0];

/// Width of the input panel in pixels.
pub const INPUT_PANEL_WIDTH: f32 = 300.0;

/// Optional app logo, read from the working directory at startup.
pub const LOGO_PATH: &str = "logo.png";
pub const LOGO_SIZE: u32 = 30;

/// Embedded SVG used for the window icon, and its raster size.
pub const WINDOW_ICON: &str = "app-icon.svg";
pub const WINDOW_ICON_SIZE: u32 = 64;

/// Side of the app icon slot in a notification header.
pub const ICON_SLOT: f32 = 36.0;

/// Height of the expanded big picture. Its width follows the card.
pub const PICTURE_HEIGHT: u32 = 180;

pub const FOOTER_TEXT: &str = "Reply   •   Mark as read   •   Settings";
pub const PLACEHOLDER_TEXT: &str = "(No image / couldn't load)";

/// Initial input values.
pub const INITIAL_TITLE: &str = "Title";
pub const INITIAL_BODY: &str = "Insert text";

pub const WARNING_TOAST_SECONDS: f64 = 6.0;
