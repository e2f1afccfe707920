// =============================================================================
// CALLER-VISIBLE MESSAGES
// =============================================================================

/// Request body could not be decoded as JSON
pub const MSG_INVALID_FORMAT: &str = "Input format invalid. Input should be in JSON format only!!";

/// Create body is missing one of name, address, city, state, zip
pub const MSG_CREATE_MISSING_FIELDS: &str = "Input missing one or more fields. Input should contain Name, Address, State, City and Zip fields in Json format";

/// Update body is missing one of address, city, state, zip
pub const MSG_UPDATE_MISSING_FIELDS: &str = "Input missing one or more fields. To update, input should contain Address, State, City and Zip in JSON format";

/// Provider answered ZERO_RESULTS
pub const MSG_ADDRESS_NOT_FOUND: &str = "Your address could not be processed. Please check if the values of the address, city, state and zip are correct.";

/// Provider answered INVALID_REQUEST
pub const MSG_MALFORMED_QUERY: &str = "Your address could not be processed. Please check if the values of the address, city, state and zip are present";

/// Provider failed or could not be reached
pub const MSG_PROVIDER_ERROR: &str = "Server error. Please try again later!";

pub const MSG_NO_ENTRIES: &str = "The requested id does not correspond to any entries";

pub const MSG_DATABASE_ERROR: &str = "Database error occurred";

// =============================================================================
// GEOCODING PROVIDER STATUSES
// =============================================================================

pub const GEOCODE_STATUS_OK: &str = "OK";
pub const GEOCODE_STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
pub const GEOCODE_STATUS_INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const GEOCODE_STATUS_UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";
