mod coordinates;
mod entity;
mod repository;

pub use coordinates::Coordinates;
pub use entity::{Delivery, NewDelivery};
pub use repository::DeliveryRepository;
