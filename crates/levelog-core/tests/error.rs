//! Tests for error handling

use levelog_core::error::{LevelError, LevelResult};
use levelog_core::Severity;

#[test]
fn test_invalid_level_display()
{
    let error = LevelError::InvalidLevel(254);
    let message = format!("{}", error);
    assert!(message.contains("invalid log level"));
    assert!(message.contains("254"));
}

#[test]
fn test_unknown_level_name_display()
{
    let error = LevelError::UnknownLevelName("verbose".to_string());
    let message = format!("{}", error);
    assert!(message.contains("unknown log level name"));
    assert!(message.contains("verbose"));
}

#[test]
fn test_try_from_reports_invalid_level()
{
    match Severity::try_from(100) {
        Err(LevelError::InvalidLevel(raw)) => assert_eq!(raw, 100),
        other => panic!("Expected InvalidLevel, got {other:?}"),
    }
}

#[test]
fn test_error_is_std_error()
{
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&LevelError::InvalidLevel(9));
}

#[test]
fn test_result_type()
{
    // Test that Result type is properly aliased
    let _result: LevelResult<()> = Ok(());
    let _error_result: LevelResult<()> = Err(LevelError::InvalidLevel(7));
}
