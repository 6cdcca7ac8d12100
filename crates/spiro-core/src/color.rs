use serde::{Deserialize, Serialize};

/// The fixed drawing palette.
///
/// Ten named colors with 24-bit RGB codes, shared by orbits and rolling
/// circles. The set is a read-only configuration constant; the rendering
/// boundary receives the integer codes, never the names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "BLUE")]
    Blue,
    #[serde(rename = "ORANGE")]
    Orange,
    #[serde(rename = "GREEN")]
    Green,
    #[serde(rename = "PURPLE")]
    Purple,
    #[serde(rename = "BROWN")]
    Brown,
    #[serde(rename = "PINK")]
    Pink,
    #[serde(rename = "GRAY")]
    Gray,
    #[serde(rename = "YELLOW GREEN")]
    YellowGreen,
    #[serde(rename = "CYAN")]
    Cyan,
    #[serde(rename = "LIGHT RED")]
    LightRed,
}

impl Color {
    pub const ALL: [Color; 10] = [
        Color::Blue,
        Color::Orange,
        Color::Green,
        Color::Purple,
        Color::Brown,
        Color::Pink,
        Color::Gray,
        Color::YellowGreen,
        Color::Cyan,
        Color::LightRed,
    ];

    /// 24-bit RGB code consumed by the rendering boundary
    pub fn rgb(self) -> u32 {
        match self {
            Color::Blue => 0x1F77B4,
            Color::Orange => 0xFF7F0E,
            Color::Green => 0x2CA02C,
            Color::Purple => 0x9467BD,
            Color::Brown => 0x8C564B,
            Color::Pink => 0xE377C2,
            Color::Gray => 0x7F7F7F,
            Color::YellowGreen => 0xBCBD22,
            Color::Cyan => 0x17BECF,
            Color::LightRed => 0xFF9896,
        }
    }

    /// Display name, as shown in selection widgets
    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "BLUE",
            Color::Orange => "ORANGE",
            Color::Green => "GREEN",
            Color::Purple => "PURPLE",
            Color::Brown => "BROWN",
            Color::Pink => "PINK",
            Color::Gray => "GRAY",
            Color::YellowGreen => "YELLOW GREEN",
            Color::Cyan => "CYAN",
            Color::LightRed => "LIGHT RED",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_codes() {
        assert_eq!(Color::Blue.rgb(), 0x1F77B4);
        assert_eq!(Color::LightRed.rgb(), 0xFF9896);
        assert_eq!(Color::ALL.len(), 10);
    }

    #[test]
    fn test_codes_are_distinct() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in &Color::ALL[i + 1..] {
                assert_ne!(a.rgb(), b.rgb(), "{} and {} share a code", a, b);
            }
        }
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Color::YellowGreen).unwrap();
        assert_eq!(json, "\"YELLOW GREEN\"");

        let back: Color = serde_json::from_str("\"LIGHT RED\"").unwrap();
        assert_eq!(back, Color::LightRed);
    }
}
