mod service;

pub use service::{DeliveryService, SubmitDelivery};
