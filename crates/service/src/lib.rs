//! Service layer owning the workshop record.
//! - `workshop::domain` defines the record and its validation rule.
//! - `workshop::store` keeps the single live record behind an async lock.
//! - The HTTP crate talks to it through `workshop::repository::WorkshopRepository`.

pub mod errors;
pub mod workshop;
