use crate::color::Rgb;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Parse a hex color string
///
/// Accepts `#rrggbb`, `rrggbb` and the short `#rgb` form.
/// Returns `None` for anything else.
pub fn parse_color(value: &str) -> Option<Rgb> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok().map(rgb_from_u32),
        3 => {
            let short = u16::from_str_radix(hex, 16).ok()?;
            // Expand each nibble: 0xf -> 0xff
            let expand = |nibble: u16| {
                #[allow(clippy::cast_possible_truncation)]
                let nibble = (nibble & 0xF) as u8;
                (nibble << 4) | nibble
            };
            Some(Rgb {
                r: expand(short >> 8),
                g: expand(short >> 4),
                b: expand(short),
            })
        }
        _ => None,
    }
}
