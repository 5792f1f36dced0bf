//! Color parsing for user-supplied style values.
//!
//! Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, and a few CSS names the
//! original color pickers could produce.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// Opaque part as an SVG fill value.
    pub fn hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(self) -> f64 {
        self.a as f64 / 255.0
    }
}

pub fn parse_color(text: &str) -> Option<Rgba> {
    let s = text.trim().to_ascii_lowercase();
    match s.as_str() {
        "transparent" => return Some(Rgba { r: 0, g: 0, b: 0, a: 0 }),
        "white" => return Some(Rgba { r: 255, g: 255, b: 255, a: 255 }),
        "black" => return Some(Rgba { r: 0, g: 0, b: 0, a: 255 }),
        _ => {}
    }

    let hex = s.strip_prefix('#')?;
    fn hex2(b: &[u8]) -> Option<u8> {
        let hi = (*b.first()? as char).to_digit(16)? as u8;
        let lo = (*b.get(1)? as char).to_digit(16)? as u8;
        Some((hi << 4) | lo)
    }
    fn hex1(c: u8) -> Option<u8> {
        let v = (c as char).to_digit(16)? as u8;
        Some((v << 4) | v)
    }

    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => Some(Rgba {
            r: hex1(bytes[0])?,
            g: hex1(bytes[1])?,
            b: hex1(bytes[2])?,
            a: 255,
        }),
        4 => Some(Rgba {
            r: hex1(bytes[0])?,
            g: hex1(bytes[1])?,
            b: hex1(bytes[2])?,
            a: hex1(bytes[3])?,
        }),
        6 => Some(Rgba {
            r: hex2(&bytes[0..2])?,
            g: hex2(&bytes[2..4])?,
            b: hex2(&bytes[4..6])?,
            a: 255,
        }),
        8 => Some(Rgba {
            r: hex2(&bytes[0..2])?,
            g: hex2(&bytes[2..4])?,
            b: hex2(&bytes[4..6])?,
            a: hex2(&bytes[6..8])?,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(
            parse_color("#ff5733"),
            Some(Rgba { r: 0xff, g: 0x57, b: 0x33, a: 255 })
        );
        assert_eq!(
            parse_color("#fff"),
            Some(Rgba { r: 255, g: 255, b: 255, a: 255 })
        );
        assert_eq!(
            parse_color("#00000080"),
            Some(Rgba { r: 0, g: 0, b: 0, a: 0x80 })
        );
    }

    #[test]
    fn parses_names_and_rejects_garbage() {
        assert!(parse_color("White").is_some_and(Rgba::is_opaque));
        assert_eq!(parse_color("transparent").map(|c| c.a), Some(0));
        assert_eq!(parse_color("chartreuse-ish"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color(""), None);
    }
}
