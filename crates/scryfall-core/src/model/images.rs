use serde::{Deserialize, Serialize};

use crate::vocab::ImageSize;

/// Links to every rendered image of a card or card face.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}

impl ImageUris {
    /// The link for one image size, if the API provided it.
    #[must_use]
    pub fn get(&self, size: ImageSize) -> Option<&str> {
        let uri = match size {
            ImageSize::Small => &self.small,
            ImageSize::Normal => &self.normal,
            ImageSize::Large => &self.large,
            ImageSize::Png => &self.png,
            ImageSize::ArtCrop => &self.art_crop,
            ImageSize::BorderCrop => &self.border_crop,
        };
        uri.as_deref()
    }
}
