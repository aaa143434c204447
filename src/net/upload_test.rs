use super::*;

#[test]
fn default_category_is_recipe() {
    assert_eq!(DEFAULT_CATEGORY, "recipe");
}

#[test]
fn rejected_error_names_the_status() {
    assert_eq!(UploadError::Rejected(413).to_string(), "upload failed: status 413");
}

#[test]
fn transport_error_carries_the_cause() {
    let err = UploadError::Transport("connection reset".to_owned());
    assert_eq!(err.to_string(), "upload transport error: connection reset");
}
