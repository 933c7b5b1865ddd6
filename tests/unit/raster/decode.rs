use std::io::Cursor;

use super::*;
use crate::foundation::core::Dimensions;

#[test]
fn decode_png_keeps_straight_alpha() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50, 200, 128]).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.dimensions(), Dimensions::new(1, 1));
    assert_eq!(decoded.pixel(0, 0), Some([100, 50, 200, 128]));
}

#[test]
fn decode_opaque_rgb_gets_full_alpha() {
    let img = image::RgbImage::from_pixel(2, 1, image::Rgb([1, 2, 3]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.pixel(1, 0), Some([1, 2, 3, 255]));
}

#[test]
fn decode_garbage_is_decode_error() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(matches!(err, TouchupError::Decode(_)));
}

#[test]
fn decode_missing_path_reports_path() {
    let err = decode_image_path(Path::new("target/definitely/missing.png")).unwrap_err();
    assert!(err.to_string().contains("missing.png"));
}
