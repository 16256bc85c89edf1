//! Shapes of the fixed reference records written by the collection seeder.

/// A winery from the fixed reference list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WineryDefinition {
    pub name: &'static str,
    pub region: &'static str,
    pub country: &'static str,
    pub founded: i32,
}

/// A cellar storage area from the fixed reference list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellarLocationDefinition {
    pub name: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub capacity: i32,
}
