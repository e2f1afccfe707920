use validator::Validate;

/// Returns true when every required field of `candidate` is present.
///
/// Presence is an exact emptiness check: whitespace is not trimmed, so a
/// field holding only spaces counts as present. Which fields are required
/// is declared on the DTO itself (`name` is required on create, not on
/// update).
pub fn is_complete<T: Validate>(candidate: &T) -> bool {
    match candidate.validate() {
        Ok(()) => true,
        Err(errors) => {
            tracing::debug!("Address input incomplete: {}", errors);
            false
        }
    }
}
