//! QR code rasterization with stepwise version escalation.

use crate::error::CodeError;
use crate::raster::encode_png;
use image::Luma;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode, Version};

/// Raster options for a QR code.
///
/// Encoding starts at `baseline_version` and escalates one version at a time
/// whenever the payload overflows the current version's capacity, up to
/// `max_version`. The payload is never truncated: overflowing the maximum
/// version is a hard [`CodeError::QrCapacity`] failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrOptions {
    pub baseline_version: i16,
    pub max_version: i16,
    /// Edge length of one module, in pixels.
    pub module_size: u32,
    /// Whether to surround the symbol with the standard 4-module quiet zone.
    pub quiet_zone: bool,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            baseline_version: 10,
            max_version: 40,
            module_size: 6,
            quiet_zone: true,
        }
    }
}

/// Encodes `payload` as a QR symbol (error-correction level Q) and
/// rasterizes it to PNG bytes.
pub fn qr_png(payload: impl AsRef<[u8]>, options: &QrOptions) -> Result<Vec<u8>, CodeError> {
    let code = encode_escalating(payload.as_ref(), options)?;
    let img = code
        .render::<Luma<u8>>()
        .module_dimensions(options.module_size, options.module_size)
        .quiet_zone(options.quiet_zone)
        .build();
    Ok(encode_png(&img)?)
}

fn encode_escalating(payload: &[u8], options: &QrOptions) -> Result<QrCode, CodeError> {
    let mut version = options.baseline_version;
    loop {
        match QrCode::with_version(payload, Version::Normal(version), EcLevel::Q) {
            Ok(code) => {
                if version > options.baseline_version {
                    log::debug!(
                        "qr payload of {} bytes escalated to version {}",
                        payload.len(),
                        version
                    );
                }
                return Ok(code);
            }
            Err(QrError::DataTooLong) if version < options.max_version => version += 1,
            Err(QrError::DataTooLong) => {
                return Err(CodeError::QrCapacity {
                    max_version: options.max_version,
                });
            }
            Err(err) => return Err(CodeError::Qr(err.to_string())),
        }
    }
}
