use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn cellar<'a>(&'a mut self) -> CellarFixtures<'a> {
        CellarFixtures { setup: self }
    }
}

pub struct CellarFixtures<'a> {
    pub setup: &'a mut TestContext,
}
