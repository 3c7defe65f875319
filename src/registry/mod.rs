mod data;
mod district;
mod district_id;
mod registry;

pub use district::{GeoDistrict, StateInfo};
pub(crate) use district::lon_lat;
pub use district_id::DistrictId;
pub use registry::GeoRegistry;
