pub mod handle;
pub mod seed;
pub mod source;

pub use handle::CatalogHandle;
pub use source::{CatalogSource, JsonFileSource, SeedSource};
