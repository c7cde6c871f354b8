use crate::error::Error;

/// Accept 2xx, reject everything else.
///
/// The dispatcher calls this before it decides whether a response may be
/// stored in the cache; the cache itself never sees a status code.
pub fn validate_status(status: u16) -> Result<(), Error> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::Status(status))
    }
}
