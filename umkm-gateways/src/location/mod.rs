use umkm_core::{
    entities::UserLocation,
    gateways::location::{LocationError, LocationGateway, Permission},
};

/// A device that always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    location: UserLocation,
}

impl FixedLocation {
    pub const fn new(location: UserLocation) -> Self {
        Self { location }
    }
}

impl LocationGateway for FixedLocation {
    fn request_permission(&self) -> Permission {
        Permission::Granted
    }

    fn current_position(&self) -> Result<UserLocation, LocationError> {
        Ok(self.location)
    }
}

/// A device on which the user refused location access.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

impl LocationGateway for DeniedLocation {
    fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    fn current_position(&self) -> Result<UserLocation, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umkm_core::{entities::MapPoint, gateways::location::locate};

    #[test]
    fn locate_fixed_position() {
        let location = UserLocation {
            pos: MapPoint::from_lat_lng_deg(-7.8995, 110.331),
            accuracy: Some(12.0),
        };
        assert_eq!(location, locate(&FixedLocation::new(location)).unwrap());
    }

    #[test]
    fn locate_without_permission() {
        assert!(matches!(
            locate(&DeniedLocation),
            Err(LocationError::PermissionDenied)
        ));
    }
}
