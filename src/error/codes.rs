/// Error code registry for sortlab
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: I/O errors
/// - 7000-7999: Validation errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_PARSE_ERROR: u16 = 1007;

    // I/O errors (3000-3999)
    pub const IO_GENERIC: u16 = 3000;
    pub const IO_READ_FAILED: u16 = 3001;
    pub const IO_WRITE_FAILED: u16 = 3002;

    // Validation errors (7000-7999)
    pub const VALIDATION_UNSUPPORTED_ALGORITHM: u16 = 7001;
    pub const VALIDATION_INVALID_VALUE: u16 = 7002;
    pub const VALIDATION_EMPTY_INPUT: u16 = 7003;

    // Other errors (9000-9999)
    pub const OTHER_SERIALIZATION: u16 = 9001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1005 => "Invalid value in configuration",
        1007 => "Failed to parse configuration",

        // I/O errors
        3000 => "Generic I/O error",
        3001 => "Failed to read input",
        3002 => "Failed to write output",

        // Validation errors
        7001 => "Algorithm has no executable implementation",
        7002 => "Value is not a valid integer",
        7003 => "No values were supplied",

        // Other errors
        9001 => "Failed to serialize result",

        _ => "Unknown error code",
    }
}
