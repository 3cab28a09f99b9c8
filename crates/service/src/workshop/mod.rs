pub mod domain;
pub mod repository;
pub mod store;

pub use domain::Workshop;
pub use repository::WorkshopRepository;
pub use store::WorkshopStore;
