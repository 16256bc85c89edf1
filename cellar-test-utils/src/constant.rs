//! Test configuration constants.

/// Public base URL handed to the upload endpoint in tests.
///
/// Uploaded object keys are appended to this value to build the returned URL.
pub static TEST_PUBLIC_URL: &str = "http://localhost:9000/cellar-test";
