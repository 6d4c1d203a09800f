//! Name tables for the layer-shell enums.
//!
//! Both tables are declared once and serve parsing, help text and log output.
//! Names follow the `AnchorTop` / `LayerOverlay` spelling; the bare suffix
//! (`top`, `Overlay`) is accepted too, ignoring case.

use iced_layershell::reexport::{Anchor, Layer};

const ANCHOR_PREFIX: &str = "Anchor";
const LAYER_PREFIX: &str = "Layer";

const ANCHORS: &[(&str, Anchor)] = &[
    ("AnchorNone", Anchor::empty()),
    ("AnchorTop", Anchor::Top),
    ("AnchorBottom", Anchor::Bottom),
    ("AnchorLeft", Anchor::Left),
    ("AnchorRight", Anchor::Right),
];

const LAYERS: &[(&str, Layer)] = &[
    ("LayerBackground", Layer::Background),
    ("LayerBottom", Layer::Bottom),
    ("LayerTop", Layer::Top),
    ("LayerOverlay", Layer::Overlay),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("unknown anchor `{0}`, expected any of {expected}", expected = joined(anchor_names()))]
    UnknownAnchor(String),
    #[error("unknown layer `{0}`, expected one of {expected}", expected = joined(layer_names()))]
    UnknownLayer(String),
}

pub fn anchor_names() -> impl Iterator<Item = &'static str> {
    ANCHORS.iter().map(|(name, _)| *name)
}

pub fn layer_names() -> impl Iterator<Item = &'static str> {
    LAYERS.iter().map(|(name, _)| *name)
}

pub fn joined(names: impl Iterator<Item = &'static str>) -> String {
    names.collect::<Vec<_>>().join("|")
}

fn lookup<T: Copy>(table: &[(&'static str, T)], prefix: &str, token: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| {
            *name == token
                || name
                    .strip_prefix(prefix)
                    .is_some_and(|short| short.eq_ignore_ascii_case(token))
        })
        .map(|(_, value)| *value)
}

/// Parses a `|`-separated list of anchor names into a mask.
///
/// Empty tokens are skipped, so `""` and `"|"` yield an empty mask.
pub fn names_to_mask(names: &str) -> Result<Anchor, CodecError> {
    names
        .split('|')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .try_fold(Anchor::empty(), |mask, token| {
            lookup(ANCHORS, ANCHOR_PREFIX, token)
                .map(|anchor| mask | anchor)
                .ok_or_else(|| CodecError::UnknownAnchor(token.to_string()))
        })
}

pub fn name_to_layer(name: &str) -> Result<Layer, CodecError> {
    lookup(LAYERS, LAYER_PREFIX, name.trim())
        .ok_or_else(|| CodecError::UnknownLayer(name.to_string()))
}

pub fn mask_to_names(mask: Anchor) -> String {
    if mask.is_empty() {
        return "AnchorNone".to_string();
    }
    joined(
        ANCHORS
            .iter()
            .filter(|(_, anchor)| !anchor.is_empty() && mask.contains(*anchor))
            .map(|(name, _)| *name),
    )
}

pub fn layer_to_name(layer: Layer) -> &'static str {
    LAYERS
        .iter()
        .find(|(_, value)| *value == layer)
        .map(|(name, _)| *name)
        .unwrap_or("LayerUnknown")
}
