//! Error types for parameter validation and backend reporting.

/// Error codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// SPEC_001: Unknown key signature name
    UnknownKey,
    /// SPEC_002: Tempo outside the supported BPM range
    BpmOutOfRange,
    /// SPEC_003: Grit constant outside [0, 1]
    GritOutOfRange,
    /// SPEC_004: Slide magnitude exceeds the pitch wheel range
    SlideOutOfRange,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "SPEC_001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnknownKey => "SPEC_001",
            ErrorCode::BpmOutOfRange => "SPEC_002",
            ErrorCode::GritOutOfRange => "SPEC_003",
            ErrorCode::SlideOutOfRange => "SPEC_004",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result of parameter validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors. Empty means the tuple is accepted.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self::default()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait to enable consistent error
/// codes for reporting and human-readable messages for users.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "MIDI_001". These codes are stable and can
    /// be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
