//! Custom assertion macros for API responses

/// Assert the standard error body: `{"detail": <string>, "status": <code>}`
#[macro_export]
macro_rules! assert_error_body {
    ($body:expr, $status:expr) => {
        assert!(
            $body["detail"].is_string(),
            "Expected string detail, got: {}",
            $body
        );
        assert_eq!($body["status"], $status.as_u16(), "body: {}", $body);
    };
}

/// Assert that a string contains a substring, ignoring case
#[macro_export]
macro_rules! assert_contains_ignore_case {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.to_lowercase().contains(&$needle.to_lowercase()),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
