mod common;

use image::ImageFormat;

use nailstudio_core::io::image_io::{export_file_name, load_image, save_png};
use nailstudio_core::io::{ImageMime, ImageRef};

#[test]
fn test_sniff_formats() {
    let png = common::encoded_image(4, 3, ImageFormat::Png);
    let jpeg = common::encoded_image(4, 3, ImageFormat::Jpeg);
    assert_eq!(ImageMime::sniff(&png), Some(ImageMime::Png));
    assert_eq!(ImageMime::sniff(&jpeg), Some(ImageMime::Jpeg));
    assert_eq!(ImageMime::sniff(b"not an image"), None);
}

#[test]
fn test_from_bytes_rejects_unknown() {
    assert!(ImageRef::from_bytes(b"hello world".to_vec()).is_err());
}

#[test]
fn test_info_reads_dimensions() {
    let image = common::png_ref(7, 5);
    let info = image.info().unwrap();
    assert_eq!((info.width, info.height), (7, 5));
    assert_eq!(info.mime, ImageMime::Png);
    assert_eq!(info.byte_len, image.len());
}

#[test]
fn test_data_uri_roundtrip() {
    let image = common::png_ref(2, 2);
    let uri = image.to_data_uri();
    assert!(uri.starts_with("data:image/png;base64,"));
    assert_eq!(ImageRef::from_data_uri(&uri).unwrap(), image);
}

#[test]
fn test_data_uri_accepts_jpg_alias() {
    let jpeg = common::encoded_image(3, 3, ImageFormat::Jpeg);
    let uri = format!(
        "data:image/jpg;base64,{}",
        ImageRef::with_mime(jpeg, ImageMime::Jpeg).to_base64()
    );
    let parsed = ImageRef::from_data_uri(&uri).unwrap();
    assert_eq!(parsed.mime(), ImageMime::Jpeg);
    assert_eq!(parsed.dimensions().unwrap(), (3, 3));
}

#[test]
fn test_data_uri_rejects_other_payloads() {
    assert!(ImageRef::from_data_uri("data:text/plain;base64,aGVsbG8=").is_err());
    assert!(ImageRef::from_data_uri("https://example.com/a.png").is_err());
    assert!(ImageRef::from_data_uri("data:image/png,raw").is_err());
    assert!(ImageRef::from_data_uri("data:image/png;base64,@@@").is_err());
}

#[test]
fn test_load_image_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hand.jpg");
    std::fs::write(&path, common::encoded_image(6, 4, ImageFormat::Jpeg)).unwrap();

    let image = load_image(&path).unwrap();
    assert_eq!(image.mime(), ImageMime::Jpeg);
    assert_eq!(image.dimensions().unwrap(), (6, 4));
}

#[test]
fn test_load_image_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_image(&dir.path().join("nope.png")).is_err());
}

#[test]
fn test_save_png_writes_png_bytes_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let image = common::png_ref(5, 5);

    save_png(&image, &path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), image.bytes());
}

#[test]
fn test_save_png_transcodes_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let jpeg = ImageRef::from_bytes(common::encoded_image(8, 6, ImageFormat::Jpeg)).unwrap();

    save_png(&jpeg, &path).unwrap();
    let written = load_image(&path).unwrap();
    assert_eq!(written.mime(), ImageMime::Png);
    assert_eq!(written.dimensions().unwrap(), (8, 6));
}

#[test]
fn test_export_file_name() {
    assert_eq!(
        export_file_name("nailstudio-nails", 1_700_000_000_123),
        "nailstudio-nails-1700000000123.png"
    );
}
