mod entity;
mod repository;
mod status;

pub use entity::{NewPackage, Package};
pub use repository::PackageRepository;
pub use status::PackageStatus;
