//! Error categorization.
//!
//! Maps transport errors onto the statistic buckets in
//! [`super::types::ErrorType`].

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Only transport-level failures reach this function: HTTP responses with
/// error status codes are reported as regular result lines carrying the
/// status code, not as errors.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() || error.is_builder() {
        ErrorType::HttpRequestRequestError
    } else {
        ErrorType::HttpRequestOtherError
    }
}
