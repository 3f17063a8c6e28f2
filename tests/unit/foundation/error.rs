use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LamellaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(LamellaError::scene("x").to_string().contains("scene error:"));
    assert!(
        LamellaError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        LamellaError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LamellaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
