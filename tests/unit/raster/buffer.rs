use super::*;

#[test]
fn new_validates_length_and_extent() {
    assert!(PixelBuffer::new(Dimensions::new(2, 2), vec![0; 16]).is_ok());
    assert!(PixelBuffer::new(Dimensions::new(2, 2), vec![0; 15]).is_err());
    assert!(PixelBuffer::new(Dimensions::new(0, 2), Vec::new()).is_err());
}

#[test]
fn pixel_access_is_row_major() {
    let mut buf = PixelBuffer::filled(Dimensions::new(3, 2), [1, 2, 3, 255]).unwrap();
    assert!(buf.set_pixel(2, 1, [9, 8, 7, 6]));
    assert_eq!(buf.pixel(2, 1), Some([9, 8, 7, 6]));
    assert_eq!(&buf.as_bytes()[20..24], &[9, 8, 7, 6]);
    assert_eq!(buf.alpha(0, 0), Some(255));
    assert_eq!(buf.pixel(3, 0), None);
    assert!(!buf.set_pixel(0, 2, [0; 4]));
}

#[test]
fn clear_pixel_zeroes_all_channels() {
    let mut buf = PixelBuffer::filled(Dimensions::new(2, 2), [10, 20, 30, 255]).unwrap();
    buf.clear_pixel(1, 1);
    assert_eq!(buf.pixel(1, 1), Some([0, 0, 0, 0]));
    assert_eq!(buf.pixel(0, 0), Some([10, 20, 30, 255]));
}

#[test]
fn copy_from_requires_matching_dimensions() {
    let mut a = PixelBuffer::filled(Dimensions::new(2, 2), [0; 4]).unwrap();
    let b = PixelBuffer::filled(Dimensions::new(2, 2), [5; 4]).unwrap();
    let c = PixelBuffer::filled(Dimensions::new(3, 2), [5; 4]).unwrap();
    a.copy_from(&b).unwrap();
    assert_eq!(a, b);
    assert!(matches!(
        a.copy_from(&c),
        Err(TouchupError::DimensionMismatch { .. })
    ));
}

#[test]
fn image_roundtrip_keeps_bytes() {
    let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([4, 5, 6, 7]));
    let buf = PixelBuffer::from_rgba_image(img.clone()).unwrap();
    assert_eq!(buf.dimensions(), Dimensions::new(2, 3));
    assert_eq!(buf.to_rgba_image().unwrap(), img);
}
