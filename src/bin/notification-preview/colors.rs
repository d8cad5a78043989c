//! Dark notification-shade palette.

use eframe::egui::Color32;

// Card
pub const CARD_FILL: Color32 = Color32::from_rgb(0x1f, 0x1f, 0x1f);
pub const CARD_STROKE: Color32 = Color32::from_rgb(0x30, 0x30, 0x30);

// Text
pub const APP_LINE: Color32 = Color32::from_rgb(0xcf, 0xcf, 0xcf);
pub const TITLE: Color32 = Color32::WHITE;
pub const BODY: Color32 = Color32::from_rgb(0xe6, 0xe6, 0xe6);
pub const FOOTER: Color32 = Color32::from_rgb(0xa9, 0xa9, 0xa9);

// Picture area
pub const PICTURE_FILL: Color32 = Color32::from_rgb(0x2a, 0x2a, 0x2a);
pub const PLACEHOLDER_TEXT: Color32 = Color32::from_rgb(0xbd, 0xbd, 0xbd);

// App icon
pub const LOGO_BACKING: Color32 = Color32::from_rgb(0x2b, 0x2b, 0x2b);
pub const GLYPH_FILL: Color32 = Color32::from_rgb(0x4a, 0x90, 0xe2);
