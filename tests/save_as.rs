use std::fs;

use tempfile::tempdir;
use xbm_color_rs::color_pipeline::{
    ColorSession, EditorConfig, EditorError, RawColor, ILLUMINATION_COLOR_MARKER,
};

fn asset_bytes(values: [f32; 4]) -> Vec<u8> {
    let mut buffer = b"XBM\x00\x01\x02\x03 some header bytes\x00".to_vec();
    buffer.extend_from_slice(ILLUMINATION_COLOR_MARKER);
    buffer.push(0x00);
    buffer.extend(values.iter().flat_map(|v| v.to_le_bytes()));
    buffer.extend((0..=255u8).cycle().take(1024));
    buffer
}

#[test]
fn test_save_as_preserves_everything_but_the_record() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("avatar.xbm");
    let output = dir.path().join("avatar_edited.xbm");
    let original = asset_bytes([0.5, 0.25, 1.0, 1.0]);
    fs::write(&input, &original).unwrap();

    let mut session = ColorSession::new(EditorConfig::default());
    session.load_file(&input).unwrap();
    let offset = session.offset().unwrap();
    session.set_color(RawColor::new(3.0, 1.5, 0.0, 1.0)).unwrap();
    session.save_to(&output).unwrap();

    // Source untouched
    assert_eq!(fs::read(&input).unwrap(), original);

    let saved = fs::read(&output).unwrap();
    assert_eq!(saved.len(), original.len());
    assert_eq!(&saved[..offset], &original[..offset]);
    assert_eq!(&saved[offset + 16..], &original[offset + 16..]);

    let mut reloaded = ColorSession::new(EditorConfig::default());
    let color = reloaded.load_file(&output).unwrap();
    assert!(color.bits_eq(&RawColor::new(3.0, 1.5, 0.0, 1.0)));
    assert_eq!(reloaded.summary().unwrap().file_name.as_deref(), Some("avatar_edited.xbm"));
}

#[test]
fn test_save_in_place() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("in_place.xbm");
    fs::write(&path, asset_bytes([4.0, 2.0, 1.0, 1.0])).unwrap();

    let mut session = ColorSession::new(EditorConfig::default());
    session.load_file(&path).unwrap();
    assert_eq!(session.normalize().unwrap(), Some(4.0));
    session.save().unwrap();

    assert_eq!(fs::read(&path).unwrap(), asset_bytes([1.0, 0.5, 0.25, 1.0]));
}

#[test]
fn test_file_without_marker_is_left_alone() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plain.bin");
    let contents = b"IlluminationColor2\x00\x00\x00\x00\x00".to_vec();
    fs::write(&path, &contents).unwrap();

    let mut session = ColorSession::new(EditorConfig::default());
    let err = session.load_file(&path).unwrap_err();
    assert!(matches!(err, EditorError::MarkerNotFound));
    assert!(!session.is_loaded());
    assert_eq!(fs::read(&path).unwrap(), contents);
}

#[test]
fn test_truncated_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.xbm");
    let mut contents = ILLUMINATION_COLOR_MARKER.to_vec();
    contents.extend_from_slice(&[0x00, 0x00, 0x00, 0x80, 0x3F]);
    fs::write(&path, &contents).unwrap();

    let mut session = ColorSession::new(EditorConfig::default());
    let err = session.load_file(&path).unwrap_err();
    assert!(matches!(err, EditorError::Truncated { offset: 19, .. }));
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let mut session = ColorSession::new(EditorConfig::default());
    let err = session.load_file(dir.path().join("missing.xbm")).unwrap_err();
    assert!(matches!(err, EditorError::InputReadError(_)));
}

#[test]
fn test_unwritable_destination() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ok.xbm");
    fs::write(&input, asset_bytes([1.0, 1.0, 1.0, 1.0])).unwrap();

    let mut session = ColorSession::new(EditorConfig::default());
    session.load_file(&input).unwrap();
    let err = session
        .save_to(dir.path().join("no_such_dir").join("out.xbm"))
        .unwrap_err();
    assert!(matches!(err, EditorError::OutputWriteError(_)));
}
