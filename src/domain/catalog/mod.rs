//! Read models for the commerce resources the back office lists.
//!
//! These are display-only snapshots deserialized from the commerce API's
//! camelCase JSON. The back office never mutates them; all writes happen
//! elsewhere in the platform.

pub mod advert;
pub mod category;
pub mod product;
pub mod reservation;
pub mod shop;
pub mod user;

pub use advert::Advert;
pub use category::Category;
pub use product::Product;
pub use reservation::{Reservation, ReservationStatus};
pub use shop::Shop;
pub use user::User;
