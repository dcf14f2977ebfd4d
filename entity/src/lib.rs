pub mod prelude;

pub mod facility;
pub mod facility_alias;
