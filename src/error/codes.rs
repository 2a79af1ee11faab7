/// Error code registry for pipeline-inspect
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 5000-5999: Pipeline errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_YAML: u16 = 1002;
    pub const CONFIG_INVALID_JSON: u16 = 1003;
    pub const CONFIG_INVALID_TOML: u16 = 1004;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_PIPELINE_NOT_FOUND: u16 = 1006;

    // Pipeline errors (5000-5999)
    pub const PIPELINE_GENERIC: u16 = 5000;
    pub const PIPELINE_NO_LOADING_STEP: u16 = 5001;
    pub const PIPELINE_MALFORMED_STEP: u16 = 5002;
    pub const PIPELINE_MISSING_SUB_PIPELINE: u16 = 5003;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description of an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "General configuration error",
        ErrorCode::CONFIG_NOT_FOUND => "Configuration or pipeline file not found",
        ErrorCode::CONFIG_INVALID_YAML => "Invalid YAML syntax",
        ErrorCode::CONFIG_INVALID_JSON => "Invalid JSON syntax",
        ErrorCode::CONFIG_INVALID_TOML => "Invalid TOML syntax",
        ErrorCode::CONFIG_INVALID_VALUE => "Invalid configuration value",
        ErrorCode::CONFIG_PIPELINE_NOT_FOUND => "Named pipeline not present in document",

        ErrorCode::PIPELINE_GENERIC => "General pipeline error",
        ErrorCode::PIPELINE_NO_LOADING_STEP => "Pipeline contains no loading step",
        ErrorCode::PIPELINE_MALFORMED_STEP => "Step has no recognizable kind",
        ErrorCode::PIPELINE_MISSING_SUB_PIPELINE => "Wrapper step has no embedded sub-pipeline",

        ErrorCode::OTHER_GENERIC => "General error",
        _ => "Unknown error code",
    }
}
