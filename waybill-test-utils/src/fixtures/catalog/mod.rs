use crate::TestSetup;

pub mod data;
pub mod factory;

impl TestSetup {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    pub setup: &'a TestSetup,
}
