use thiserror::Error;

#[derive(Debug, Error)]
pub enum FiltriumError {
    #[error("REGISTRATION ERROR: {code} - {message}")]
    Registration { code: String, message: String },

    #[error("RESOLUTION ERROR: {code} - {message}")]
    Resolution { code: String, message: String },

    #[error("CONTAINER ERROR: {code} - {message}")]
    Container { code: String, message: String },

    #[error("CACHE ERROR: {code} - {message}")]
    Cache { code: String, message: String },
}

/// **STANDARDIZED ERROR CODES**
///
/// **MANDATE**: Use these codes for consistent error reporting across modules.
pub mod error_codes {
    // Registration phase (startup-fatal by host convention)
    pub const KIND_UNSUPPORTED: &str = "FILTRIUM_REGISTRATION_KIND_UNSUPPORTED";
    pub const UNKNOWN_HANDLER: &str = "FILTRIUM_REGISTRATION_UNKNOWN_HANDLER";
    pub const DUPLICATE_HANDLER: &str = "FILTRIUM_REGISTRATION_DUPLICATE_HANDLER";
    pub const METHOD_NOT_FOUND: &str = "FILTRIUM_REGISTRATION_METHOD_NOT_FOUND";
    pub const AMBIGUOUS_METHOD: &str = "FILTRIUM_REGISTRATION_AMBIGUOUS_METHOD";
    pub const INVALID_DESCRIPTOR: &str = "FILTRIUM_REGISTRATION_INVALID_DESCRIPTOR";
    pub const MISSING_SERVICE: &str = "FILTRIUM_REGISTRATION_MISSING_SERVICE";
    pub const OVERRIDE_WITH_SERVICE: &str = "FILTRIUM_REGISTRATION_OVERRIDE_WITH_SERVICE";

    // Request phase (fails the single request, never the process)
    pub const PRODUCER_FAILED: &str = "FILTRIUM_RESOLUTION_PRODUCER_FAILED";
    pub const SERVICE_NOT_FOUND: &str = "FILTRIUM_CONTAINER_SERVICE_NOT_FOUND";
    pub const CONSTRUCTION_FAILED: &str = "FILTRIUM_CACHE_CONSTRUCTION_FAILED";
}
