//! Peak signal to noise ratio between a carrier and its stego image.

use image::RgbImage;
use log::debug;

use crate::error::StegoError;
use crate::result::Result;

/// reported for two identical images, where the ratio would be infinite
pub const PSNR_IDENTICAL: f64 = 100.0;

/// PSNR in dB over all three color channels, rounded to 2 decimals
pub fn psnr(original: &RgbImage, stego: &RgbImage) -> Result<f64> {
    if original.dimensions() != stego.dimensions() {
        return Err(StegoError::DimensionMismatch {
            left_width: original.width(),
            left_height: original.height(),
            right_width: stego.width(),
            right_height: stego.height(),
        });
    }

    let samples = original.as_raw().len();
    if samples == 0 {
        return Ok(PSNR_IDENTICAL);
    }
    let squared_error: f64 = original
        .as_raw()
        .iter()
        .zip(stego.as_raw())
        .map(|(&a, &b)| {
            let d = f64::from(a) - f64::from(b);
            d * d
        })
        .sum();
    let mse = squared_error / samples as f64;
    if mse == 0.0 {
        return Ok(PSNR_IDENTICAL);
    }

    let psnr = 10.0 * (f64::from(u8::MAX).powi(2) / mse).log10();
    debug!("mse {mse:.4}, psnr {psnr:.4} dB");

    Ok((psnr * 100.0).round() / 100.0)
}
