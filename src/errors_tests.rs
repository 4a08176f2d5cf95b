//! Unit tests for error handling
//!
//! Tests error types, conversions, and error message formatting.

#[cfg(test)]
mod tests {
    use std::io;

    use crate::errors::MoodLensError;

    // ====== Error Type Tests ======

    #[test]
    fn test_empty_conversation_display() {
        let error = MoodLensError::EmptyConversation;
        assert_eq!(format!("{error}"), "No user messages to analyze");
    }

    #[test]
    fn test_report_not_found() {
        let error = MoodLensError::ReportNotFound("report_1_abc".to_string());
        assert!(matches!(error, MoodLensError::ReportNotFound(_)));
        assert!(format!("{error}").contains("report_1_abc"));
    }

    #[test]
    fn test_config_error() {
        let error = MoodLensError::Config("missing endpoint".to_string());
        assert!(format!("{error}").contains("Configuration"));
    }

    // ====== Error Conversion Tests ======

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: MoodLensError = io_err.into();
        assert!(matches!(err, MoodLensError::Io(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse_result: Result<serde_json::Value, _> = serde_json::from_str("{invalid json}");
        let json_err = parse_result.unwrap_err();
        let err: MoodLensError = json_err.into();
        assert!(matches!(err, MoodLensError::Serialization(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let parse_result: Result<toml::Value, _> = toml::from_str("= broken");
        let err: MoodLensError = parse_result.unwrap_err().into();
        assert!(matches!(err, MoodLensError::TomlParsing(_)));
    }
}
