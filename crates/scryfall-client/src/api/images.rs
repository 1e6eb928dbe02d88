use scryfall_core::vocab::ImageSize;
use scryfall_core::Card;

use crate::client::{Params, ScryfallClient};
use crate::error::{ScryfallError, ScryfallResult};
use crate::routes::{Presentation, ResponseFormat};

impl ScryfallClient {
    /// Download a card image.
    ///
    /// The card's own image link is tried first. If that fails the image is
    /// requested from `cards/:id?format=image`, which also follows the
    /// card's current image. Cards without any image link fail without a
    /// request.
    pub async fn card_image(&self, card: &Card, size: ImageSize) -> ScryfallResult<Vec<u8>> {
        let uri = card.image_uri(size).ok_or_else(|| {
            ScryfallError::InvalidRequest(format!(
                "{} ({}) has no {size} image",
                card.name, card.id
            ))
        })?;

        match self.get_bytes_url(uri, &Params::new()).await {
            Ok(bytes) => Ok(bytes),
            Err(err) => {
                log::warn!("image link {uri} failed ({err}); asking the card route instead");
                let mut params = Params::new();
                Presentation {
                    face_back: false,
                    version: Some(size),
                }
                .apply(&mut params, ResponseFormat::Image);
                self.get_bytes(&format!("cards/{}", card.id), &params).await
            }
        }
    }
}
