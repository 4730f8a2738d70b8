//! Colors in ARGB8888 format and channel helpers.

pub const BACKGROUND: u32 = 0xFF000000;
pub const GRID: u32 = 0xFF333333;
pub const WIREFRAME: u32 = 0xFFFFFFFF;
pub const VERTEX: u32 = 0xFFFF0000;
pub const WHITE: u32 = 0xFFFFFFFF;

pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;
pub const YELLOW: u32 = 0xFFFFFF00;
pub const MAGENTA: u32 = 0xFFFF00FF;
pub const CYAN: u32 = 0xFF00FFFF;

/// Splits a packed color into `[a, r, g, b]` bytes.
#[inline]
pub fn unpack_argb(color: u32) -> [u8; 4] {
    color.to_be_bytes()
}

/// Packs `[a, r, g, b]` bytes into a color.
#[inline]
pub fn pack_argb(channels: [u8; 4]) -> u32 {
    u32::from_be_bytes(channels)
}
