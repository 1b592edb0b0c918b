use crate::banner::color::Color;
use crate::banner::pattern::Pattern;
use crate::foundation::error::{BannerError, BannerResult};

/// Maximum number of layers a banner code carries.
pub const MAX_CODE_LAYERS: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One entry in a banner's paint stack.
pub struct Layer {
    /// Caller-chosen identifier, opaque to rendering.
    pub id: String,
    /// Mask the layer is painted through.
    pub pattern: Pattern,
    /// Hidden layers are skipped entirely when rendering.
    #[serde(default)]
    pub hidden: bool,
    /// Dye applied through the mask.
    pub color: Color,
}

impl Layer {
    /// Visible layer.
    pub fn new(id: impl Into<String>, pattern: Pattern, color: Color) -> Self {
        Self {
            id: id.into(),
            pattern,
            hidden: false,
            color,
        }
    }

    /// Return the layer with `hidden` set.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A base color plus an ordered layer stack; list order is paint order, bottom first.
pub struct Banner {
    /// Color of the implicit base layer.
    pub color: Color,
    /// Layers painted over the base, in order.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Banner {
    /// Banner with no layers.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            layers: Vec::new(),
        }
    }

    /// Append a visible layer with an id derived from its stack position.
    pub fn push(&mut self, pattern: Pattern, color: Color) -> &mut Layer {
        let id = layer_id(self.layers.len());
        self.layers.push(Layer::new(id, pattern, color));
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    /// Builder form of [`Banner::push`].
    pub fn with_layer(mut self, pattern: Pattern, color: Color) -> Self {
        self.push(pattern, color);
        self
    }

    /// Layers that take part in rendering, in paint order.
    pub fn visible_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|l| !l.hidden)
    }

    /// Decode a banner code.
    ///
    /// The first hex digit is the base color ordinal. Each following group of three hex
    /// digits is a two-digit pattern ordinal and a one-digit color ordinal. At most
    /// [`MAX_CODE_LAYERS`] groups are read and a trailing incomplete group is ignored.
    pub fn from_code(code: &str) -> BannerResult<Self> {
        if code.is_empty() {
            return Err(BannerError::validation("banner code must be non-empty"));
        }
        if !code.is_ascii() {
            return Err(BannerError::validation("banner code must be ASCII"));
        }

        let bytes = code.as_bytes();
        let mut banner = Banner::new(color_digit(bytes[0])?);

        for group in bytes[1..].chunks_exact(3).take(MAX_CODE_LAYERS) {
            let ordinal = hex_digit(group[0])? * 16 + hex_digit(group[1])?;
            let pattern = Pattern::from_ordinal(ordinal)
                .filter(|p| p.is_layer())
                .ok_or_else(|| {
                    BannerError::validation(format!(
                        "invalid pattern '{}{}' in banner code",
                        group[0] as char, group[1] as char
                    ))
                })?;
            let color = color_digit(group[2])?;
            banner.push(pattern, color);
        }

        Ok(banner)
    }

    /// Encode the base color and the first [`MAX_CODE_LAYERS`] visible layers.
    pub fn to_code(&self) -> BannerResult<String> {
        let mut out = format!("{:x}", self.color.ordinal());
        for layer in self.visible_layers().take(MAX_CODE_LAYERS) {
            if !layer.pattern.is_layer() {
                return Err(BannerError::validation(format!(
                    "layer '{}' uses the base pattern, which has no banner code",
                    layer.id
                )));
            }
            out.push_str(&format!(
                "{:02x}{:x}",
                layer.pattern.ordinal(),
                layer.color.ordinal()
            ));
        }
        Ok(out)
    }
}

/// Identifier given to the layer at `index` when layers come from codes or metadata.
pub fn layer_id(index: usize) -> String {
    format!("layer-{index}")
}

fn hex_digit(b: u8) -> BannerResult<u8> {
    (b as char)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| {
            BannerError::validation(format!("invalid hex digit '{}' in banner code", b as char))
        })
}

fn color_digit(b: u8) -> BannerResult<Color> {
    let ordinal = hex_digit(b)?;
    Color::from_ordinal(ordinal)
        .ok_or_else(|| BannerError::validation(format!("invalid color '{}'", b as char)))
}

#[cfg(test)]
#[path = "../../tests/unit/banner/model.rs"]
mod tests;
