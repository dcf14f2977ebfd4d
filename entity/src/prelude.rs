pub use super::facility::Entity as Facility;
pub use super::facility_alias::Entity as FacilityAlias;
