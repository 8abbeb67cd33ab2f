mod service;

pub use service::PackageService;
