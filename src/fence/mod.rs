pub mod bounds;
pub mod export;
pub mod loader;
pub mod model;
pub mod style;
pub use bounds::BoundingRegion;
pub use loader::Catalog;
pub use model::FenceRecord;
pub use model::LatLng;
pub use style::DisplayStyle;
pub use style::Rgba;
pub use style::Tier;
