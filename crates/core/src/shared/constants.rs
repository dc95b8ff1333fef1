use std::time::Duration;

/// Base URL of the hosted anti-spoofing service.
pub const API_BASE_URL: &str = "https://abdullahsajid-antispoofing-test.hf.space";

/// Path of the face check endpoint, relative to the base URL.
pub const API_FACE_PATH: &str = "/api/face";

/// File extensions the intake accepts (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Upper bound on a single request, including connect and body read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Message shown when the server gives us nothing usable.
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";
