use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StickerError::input("x")
            .to_string()
            .contains("input error:")
    );
    assert!(
        StickerError::service("x")
            .to_string()
            .contains("service error:")
    );
    assert!(
        StickerError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        StickerError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StickerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
