use crate::banner::normalize_name;
use crate::foundation::error::{BannerError, BannerResult};

macro_rules! patterns {
    ($($variant:ident => $name:literal,)+) => {
        /// Named grayscale+alpha mask a layer is painted through.
        ///
        /// Declaration order is the ordinal used by banner codes; [`Pattern::Base`] is the
        /// full-canvas mask used for the banner's base color and never appears as a layer.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(missing_docs)]
        pub enum Pattern {
            $($variant,)+
        }

        impl Pattern {
            /// Every pattern, in ordinal order.
            pub const ALL: &'static [Pattern] = &[$(Pattern::$variant,)+];

            /// Canonical snake_case name, e.g. `curly_border`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Pattern::$variant => $name,)+
                }
            }
        }
    };
}

patterns! {
    Base => "base",
    Border => "border",
    Bricks => "bricks",
    Circle => "circle",
    Creeper => "creeper",
    Cross => "cross",
    CurlyBorder => "curly_border",
    DiagonalLeft => "diagonal_left",
    DiagonalRight => "diagonal_right",
    DiagonalUpLeft => "diagonal_up_left",
    DiagonalUpRight => "diagonal_up_right",
    Flow => "flow",
    Flower => "flower",
    Globe => "globe",
    Gradient => "gradient",
    GradientUp => "gradient_up",
    Guster => "guster",
    HalfHorizontal => "half_horizontal",
    HalfHorizontalBottom => "half_horizontal_bottom",
    HalfVertical => "half_vertical",
    HalfVerticalRight => "half_vertical_right",
    Mojang => "mojang",
    Piglin => "piglin",
    Rhombus => "rhombus",
    Skull => "skull",
    SmallStripes => "small_stripes",
    SquareBottomLeft => "square_bottom_left",
    SquareBottomRight => "square_bottom_right",
    SquareTopLeft => "square_top_left",
    SquareTopRight => "square_top_right",
    StraightCross => "straight_cross",
    StripeBottom => "stripe_bottom",
    StripeCenter => "stripe_center",
    StripeDownleft => "stripe_downleft",
    StripeDownright => "stripe_downright",
    StripeLeft => "stripe_left",
    StripeMiddle => "stripe_middle",
    StripeRight => "stripe_right",
    StripeTop => "stripe_top",
    TrianglesBottom => "triangles_bottom",
    TrianglesTop => "triangles_top",
    TriangleBottom => "triangle_bottom",
    TriangleTop => "triangle_top",
}

impl Pattern {
    /// Position in [`Pattern::ALL`].
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Pattern::ordinal`].
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Lookup by name in any of `CurlyBorder`, `curly_border` or `curly-border` form.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        Self::ALL
            .iter()
            .copied()
            .find(|p| normalize_name(p.name()) == wanted)
    }

    /// Path segment under which the pattern's mask asset is served.
    pub const fn url_path(self) -> &'static str {
        self.name()
    }

    /// Whether the pattern can be stacked as a layer (everything but [`Pattern::Base`]).
    pub const fn is_layer(self) -> bool {
        !matches!(self, Pattern::Base)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Pattern {
    type Err = BannerError;

    fn from_str(s: &str) -> BannerResult<Self> {
        Self::from_name(s).ok_or_else(|| BannerError::validation(format!("unknown pattern '{s}'")))
    }
}

impl serde::Serialize for Pattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for Pattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/banner/pattern.rs"]
mod tests;
