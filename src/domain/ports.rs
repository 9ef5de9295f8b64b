use crate::domain::model::Vehicle;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can resolve a license plate to a [`Vehicle`].
///
/// `None` means "use whatever default plate the implementation was configured with".
#[async_trait]
pub trait VehicleLookup: Send + Sync {
    async fn fetch(&self, license_plate: Option<&str>) -> Result<Vehicle>;
}
