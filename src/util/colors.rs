use ratatui::style::Color;

pub const DAY_BACKGROUND: Color = Color::from_u32(0x00dce6f2);
pub const NIGHT_BACKGROUND: Color = Color::from_u32(0x000d0d1a);
pub const DAY_TEXT: Color = Color::from_u32(0x00303030);
pub const NIGHT_TEXT: Color = Color::from_u32(0x00e8e8f0);
pub const ACCENT: Color = Color::from_u32(0x00f7d44b);
pub const DIMMED: Color = Color::from_u32(0x00707070);
pub const ERROR: Color = Color::from_u32(0x00d4504b);

pub const fn background(night: bool) -> Color {
    if night { NIGHT_BACKGROUND } else { DAY_BACKGROUND }
}

pub const fn text(night: bool) -> Color {
    if night { NIGHT_TEXT } else { DAY_TEXT }
}
