use std::path::PathBuf;

use tdl::error::{exit_codes, Error, JsonError};

#[test]
fn user_errors_exit_with_2() {
    assert_eq!(Error::EmptyTitle.exit_code(), exit_codes::USER_ERROR);
    assert_eq!(
        Error::InvalidArgument("bad".to_string()).exit_code(),
        exit_codes::USER_ERROR
    );
    assert_eq!(
        Error::InvalidConfig("bad".to_string()).exit_code(),
        exit_codes::USER_ERROR
    );
}

#[test]
fn operation_failures_exit_with_4() {
    assert_eq!(
        Error::CorruptStore(PathBuf::from("/tmp/tasks.json")).exit_code(),
        exit_codes::OPERATION_FAILED
    );

    let io = Error::Io(std::io::Error::other("boom"));
    assert_eq!(io.exit_code(), exit_codes::OPERATION_FAILED);

    let json = Error::Json(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
    assert_eq!(json.exit_code(), exit_codes::OPERATION_FAILED);
}

#[test]
fn empty_title_message_matches_the_surfaced_alert() {
    assert_eq!(Error::EmptyTitle.to_string(), "Task title cannot be empty");
}

#[test]
fn json_error_wraps_message_and_code() {
    let err = Error::EmptyTitle;
    let json = JsonError::from(&err);
    assert_eq!(json.error, "Task title cannot be empty");
    assert_eq!(json.code, exit_codes::USER_ERROR);
    assert!(json.details.is_none());
}
