use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;

use crate::intake::image_file::ImageFile;

/// JSON body of the check request: `{ "base64": "<encoded image>" }`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRequest {
    pub base64: String,
}

impl CheckRequest {
    pub fn from_image(image: &ImageFile) -> Self {
        Self::from_bytes(image.bytes())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            base64: STANDARD.encode(bytes),
        }
    }
}
