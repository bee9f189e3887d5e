use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeError {
    #[error("Barcode encoding error: {0}")]
    Barcode(String),
    #[error("QR payload exceeds capacity at maximum version {max_version}")]
    QrCapacity { max_version: i16 },
    #[error("QR encoding error: {0}")]
    Qr(String),
    #[error("Raster encoding error: {0}")]
    Image(String),
}

impl From<image::ImageError> for CodeError {
    fn from(err: image::ImageError) -> Self {
        CodeError::Image(err.to_string())
    }
}
