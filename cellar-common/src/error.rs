use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("Gallery needs at least one image")]
    EmptyImageSet,
    #[error("Image index {index} out of range (gallery has {len} images)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Layout '{layout}' has a cell for image {index}, but the gallery has {len} images")]
    CellOutOfRange {
        layout: &'static str,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("No @theme block found")]
    MissingThemeBlock,
    #[error("Theme is missing color '{0}'")]
    MissingColor(&'static str),
    #[error("Invalid hex value '{value}' for color '{token}'")]
    InvalidHex { token: &'static str, value: String },
}
