use color_eyre::Result;
use opencv::{core, imgproc, prelude::*};

use crate::config::ConverterConfig;

/// Target grid geometry: keep the source aspect ratio, squashed vertically so
/// the grid looks right in terminal character cells.
pub fn target_size(orig_width: i32, orig_height: i32, new_width: i32, compression: f64) -> (i32, i32) {
    let aspect_ratio = orig_height as f64 / orig_width as f64;
    let new_height = (new_width as f64 * aspect_ratio * compression).round() as i32;

    (new_width, new_height)
}

/// Mirrors the frame horizontally so the preview behaves like a mirror.
pub fn mirror(frame: &Mat) -> Result<Mat> {
    let mut flipped = Mat::default();
    core::flip(frame, &mut flipped, 1)?;

    Ok(flipped)
}

pub fn resize_frame(frame: &Mat, config: &ConverterConfig) -> Result<Mat> {
    let size = frame.size()?;
    let (width, height) = target_size(
        size.width,
        size.height,
        config.ascii_width,
        config.vertical_compression,
    );

    let mut resized = Mat::default();
    imgproc::resize(
        frame,
        &mut resized,
        core::Size::new(width, height),
        0.0,
        0.0,
        imgproc::INTER_LINEAR,
    )?;

    Ok(resized)
}

/// Grayscale conversion plus the contrast/edge treatment that keeps the
/// character mapping legible: equalize the histogram, push the gain, then
/// blend a Canny edge overlay back on top. Every step clamps to [0, 255],
/// which is what makes the mapper total.
pub fn enhance(frame: &Mat, config: &ConverterConfig) -> Result<Mat> {
    let mut gray = Mat::default();
    imgproc::cvt_color(frame, &mut gray, imgproc::COLOR_BGR2GRAY, 0)?;

    let mut equalized = Mat::default();
    imgproc::equalize_hist(&gray, &mut equalized)?;

    let mut contrasted = Mat::default();
    core::convert_scale_abs(
        &equalized,
        &mut contrasted,
        config.contrast_gain,
        config.contrast_bias,
    )?;

    let mut edges = Mat::default();
    imgproc::canny(&contrasted, &mut edges, config.canny_low, config.canny_high, 3, false)?;

    let mut blended = Mat::default();
    core::add_weighted(
        &contrasted,
        config.base_weight,
        &edges,
        config.edge_weight,
        0.0,
        &mut blended,
        -1,
    )?;

    Ok(blended)
}

/// Flattens a single-channel Mat into its row-major byte stream.
pub fn flat_pixels(gray: &Mat) -> Result<Vec<u8>> {
    if gray.is_continuous() {
        return Ok(gray.data_bytes()?.to_vec());
    }

    let mut pixels = Vec::with_capacity((gray.rows() * gray.cols()) as usize);
    for y in 0..gray.rows() {
        for x in 0..gray.cols() {
            pixels.push(*gray.at_2d::<u8>(y, x)?);
        }
    }

    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_height_applies_vertical_compression() {
        // 640x480 down to 150 wide: 150 * 0.75 * 0.55 = 61.875, rounds to 62
        assert_eq!(target_size(640, 480, 150, 0.55), (150, 62));
    }

    #[test]
    fn target_height_rounds_rather_than_truncates() {
        // 100 * 1.0 * 0.55 = 55 exactly; 99 * ... picks the nearest integer
        assert_eq!(target_size(100, 100, 100, 0.55), (100, 55));
        assert_eq!(target_size(200, 100, 150, 0.55), (150, 41));
    }

    #[test]
    fn target_width_is_preserved() {
        let (width, _) = target_size(1920, 1080, 150, 0.55);

        assert_eq!(width, 150);
    }
}
