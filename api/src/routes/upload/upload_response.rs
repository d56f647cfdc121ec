use serde::Serialize;

/// Response payload for /upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Client-provided file name, if any.
    pub file_name: Option<String>,
    /// Sniffed image format, e.g. "image/png".
    pub content_type: String,
    /// Received payload size in bytes.
    pub size_bytes: usize,
}
