use crate::entities::UserLocation;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Unable to determine the current position: {0}")]
    Unavailable(String),
}

/// Access to the position of the device.
pub trait LocationGateway {
    fn request_permission(&self) -> Permission;
    fn current_position(&self) -> Result<UserLocation, LocationError>;
}

/// Asks for permission first and then for a single position fix.
pub fn locate(gw: &dyn LocationGateway) -> Result<UserLocation, LocationError> {
    match gw.request_permission() {
        Permission::Granted => gw.current_position(),
        Permission::Denied => Err(LocationError::PermissionDenied),
    }
}
