use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x56, 0xa8, 0xda);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const GAUGE_FILL: Color = Color::Rgb(0x22, 0xc5, 0x5e);
