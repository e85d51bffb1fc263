//! Images shown on the gallery page

use cellar_common::{GalleryError, GridLayout, ImageSet};

/// `(asset path, alt text)` in display order
pub const GALLERY_IMAGES: [(&str, &str); 8] = [
    ("/gallery/gallery-bar.webp", "Interior 1"),
    ("/gallery/gallery-lighting.webp", "Interior 2"),
    ("/gallery/gallery-seating.webp", "Wine Selection"),
    ("/gallery/gallery-seating2.webp", "Bar Area"),
    ("/gallery/gallery-seating.webp", "Wine Bottles"),
    ("/gallery/gallery-seating.webp", "Seating"),
    ("/gallery/gallery-seating.webp", "Ambiance"),
    ("/gallery/gallery-seating.webp", "Details"),
];

pub fn gallery_images() -> Result<ImageSet, GalleryError> {
    ImageSet::from_pairs(&GALLERY_IMAGES)
}

/// Catalog checked against `layout`
pub fn load_gallery(layout: &GridLayout) -> Result<ImageSet, GalleryError> {
    let images = gallery_images()?;
    layout.validate(&images)?;
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellar_common::LayoutVariant;

    #[test]
    fn test_catalog_fits_every_layout() {
        for variant in LayoutVariant::ALL {
            let layout = variant.layout();
            let images = load_gallery(&layout).unwrap();
            assert_eq!(images.len(), 8, "{}", variant.slug());
        }
    }

    #[test]
    fn test_only_wide_image_ungridded_on_responsive() {
        let images = gallery_images().unwrap();
        assert_eq!(
            LayoutVariant::Responsive
                .layout()
                .ungridded_indices(&images),
            vec![6]
        );
        assert_eq!(images.get(6).map(|e| e.label.as_str()), Some("Ambiance"));
    }
}
