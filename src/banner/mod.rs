//! Banner data model: dye colors, pattern masks, and the ordered layer stack.

/// Sixteen-entry dye color table.
pub mod color;
/// Layer stack and banner codes.
pub mod model;
/// Pattern mask identifiers.
pub mod pattern;

/// Fold `LightBlue`, `light_blue`, `light-blue` and `light blue` to one comparison key.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
