mod status_catalog;

pub use status_catalog::StatusCatalog;
