use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x56, 0x9c, 0xd6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DISABLED_TEXT: Color = Color::Rgb(0x5a, 0x5a, 0x5a);
pub const STATUS_OK: Color = Color::Rgb(0x4a, 0xde, 0x80);
pub const STATUS_BUSY: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
