/// Error types for the model layer
use thiserror::Error;

/// Failure to turn a backend response body into the canonical collection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    /// The endpoint answered with an explicit `{"error": ...}` body.
    #[error("API Error: {0}")]
    Api(String),

    /// The body parsed as JSON but matched none of the recognized shapes.
    #[error("Unexpected response format")]
    UnrecognizedShape,
}

/// First violated precondition of the event creation form.
///
/// The `Display` text is shown verbatim in the warning alert, so the
/// messages match what the backend's own form errors look like.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is blank, or a coordinate does not parse.
    #[error("Please fill in all required fields with valid values.")]
    MissingFields,

    /// Coordinates parse but fall outside the valid ranges.
    #[error("Please enter valid coordinates (latitude: -90 to 90, longitude: -180 to 180).")]
    CoordinatesOutOfRange,

    /// A URL was supplied but is not a valid absolute URL.
    #[error("Please enter a valid website URL (e.g., https://example.com).")]
    InvalidUrl,
}
