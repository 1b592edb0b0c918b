use crate::banner::normalize_name;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{BannerError, BannerResult};

/// One of the sixteen dye colors a banner or layer can take.
///
/// Declaration order is the ordinal used by banner codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// `#F9FFFE`
    White,
    /// `#F9801D`
    Orange,
    /// `#C74EBD`
    Magenta,
    /// `#3AB3DA`
    LightBlue,
    /// `#FED83D`
    Yellow,
    /// `#80C71F`
    Lime,
    /// `#F38BAA`
    Pink,
    /// `#474F52`
    Gray,
    /// `#9D9D97`
    LightGray,
    /// `#169C9C`
    Cyan,
    /// `#8932B8`
    Purple,
    /// `#3C44AA`
    Blue,
    /// `#835432`
    Brown,
    /// `#5E7C16`
    Green,
    /// `#B02E26`
    Red,
    /// `#1D1D21`
    Black,
}

impl Color {
    /// Every color, in ordinal order.
    pub const ALL: [Color; 16] = [
        Color::White,
        Color::Orange,
        Color::Magenta,
        Color::LightBlue,
        Color::Yellow,
        Color::Lime,
        Color::Pink,
        Color::Gray,
        Color::LightGray,
        Color::Cyan,
        Color::Purple,
        Color::Blue,
        Color::Brown,
        Color::Green,
        Color::Red,
        Color::Black,
    ];

    /// 24-bit `0xRRGGBB` value of this dye.
    pub const fn hex(self) -> u32 {
        match self {
            Color::White => 0xF9FFFE,
            Color::Orange => 0xF9801D,
            Color::Magenta => 0xC74EBD,
            Color::LightBlue => 0x3AB3DA,
            Color::Yellow => 0xFED83D,
            Color::Lime => 0x80C71F,
            Color::Pink => 0xF38BAA,
            Color::Gray => 0x474F52,
            Color::LightGray => 0x9D9D97,
            Color::Cyan => 0x169C9C,
            Color::Purple => 0x8932B8,
            Color::Blue => 0x3C44AA,
            Color::Brown => 0x835432,
            Color::Green => 0x5E7C16,
            Color::Red => 0xB02E26,
            Color::Black => 0x1D1D21,
        }
    }

    /// Channels of [`Color::hex`].
    pub const fn rgb(self) -> Rgb8 {
        Rgb8::from_hex(self.hex())
    }

    /// Canonical snake_case name, e.g. `light_blue`.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Orange => "orange",
            Color::Magenta => "magenta",
            Color::LightBlue => "light_blue",
            Color::Yellow => "yellow",
            Color::Lime => "lime",
            Color::Pink => "pink",
            Color::Gray => "gray",
            Color::LightGray => "light_gray",
            Color::Cyan => "cyan",
            Color::Purple => "purple",
            Color::Blue => "blue",
            Color::Brown => "brown",
            Color::Green => "green",
            Color::Red => "red",
            Color::Black => "black",
        }
    }

    /// Position in [`Color::ALL`].
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Color::ordinal`].
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Lookup by name in any of `Red`, `red`, `LightBlue`, `light_blue` or `light-blue` form.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        Self::ALL
            .into_iter()
            .find(|c| normalize_name(c.name()) == wanted)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Color {
    type Err = BannerError;

    fn from_str(s: &str) -> BannerResult<Self> {
        Self::from_name(s).ok_or_else(|| BannerError::validation(format!("unknown color '{s}'")))
    }
}

impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/banner/color.rs"]
mod tests;
