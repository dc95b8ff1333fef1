use std::path::Path;

use thiserror::Error;

use crate::api::client::{ClientError, SpoofClient};
use crate::api::outcome::ApiOutcome;
use crate::intake::image_file::{ImageFile, IntakeError};
use crate::request::options::CheckOptions;
use crate::request::payload::CheckRequest;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// End-to-end check of a single photo: intake, base64 encoding, one POST.
///
/// `Err` means the photo never left the machine (rejected or unreadable);
/// server-side and network failures come back as an `ApiOutcome::Failure`.
pub struct CheckPhotoUseCase {
    client: SpoofClient,
}

impl CheckPhotoUseCase {
    pub fn new(client: SpoofClient) -> Self {
        Self { client }
    }

    pub fn execute(&self, path: &Path, options: &CheckOptions) -> Result<ApiOutcome, CheckError> {
        let image = ImageFile::open(path)?;
        log::info!(
            "checking {} ({} bytes, model={}, binary={})",
            image.file_name(),
            image.bytes().len(),
            options.model,
            options.binary
        );
        let payload = CheckRequest::from_image(&image);
        Ok(self.client.check(&payload, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rejected_file_never_reaches_the_client() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("document.pdf");
        fs::write(&path, b"%PDF-1.4").unwrap();

        // Unroutable port: if intake let the file through, check() would
        // still return an outcome rather than an error, so an Err here
        // proves the request was never attempted.
        let client = SpoofClient::with_base_url("http://127.0.0.1:1").unwrap();
        let use_case = CheckPhotoUseCase::new(client);

        let result = use_case.execute(&path, &CheckOptions::default());
        assert!(matches!(result, Err(CheckError::Intake(_))));
    }
}
