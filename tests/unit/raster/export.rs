use super::*;
use crate::foundation::core::Dimensions;
use crate::raster::decode::decode_image;

fn sample_buffer() -> PixelBuffer {
    let mut buf = PixelBuffer::filled(Dimensions::new(3, 2), [200, 100, 50, 255]).unwrap();
    buf.clear_pixel(1, 0);
    buf.set_pixel(2, 1, [1, 2, 3, 128]);
    buf
}

#[test]
fn encode_png_decodes_back_to_same_pixels() {
    let buf = sample_buffer();
    let png = encode_png(&buf).unwrap();
    assert_eq!(&png[1..4], b"PNG");
    assert_eq!(decode_image(&png).unwrap(), buf);
}

#[test]
fn export_job_encodes_snapshot_not_live_buffer() {
    let mut live = sample_buffer();
    let job = ExportJob::spawn(Arc::new(live.clone())).unwrap();

    // Mutating the live buffer after spawning must not leak into the export.
    live.set_pixel(0, 0, [0, 0, 0, 0]);

    let snapshot = Arc::clone(job.snapshot());
    let png = job.wait().unwrap();
    let decoded = decode_image(&png).unwrap();
    assert_eq!(&decoded, snapshot.as_ref());
    assert_eq!(decoded.pixel(0, 0), Some([200, 100, 50, 255]));
}
