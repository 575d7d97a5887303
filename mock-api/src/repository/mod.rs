//! Entity repositories
//!
//! CRUD over the persisted collections with validation, authorization and
//! referential integrity. Every mutation requires an active session;
//! admin-only operations additionally require the admin role. Reads that
//! back public pages (hotel listing, rooms of a hotel) take no session.

pub mod hotel;
pub mod room;
pub mod user;

pub use hotel::HotelRepository;
pub use room::RoomRepository;
pub use user::UserRepository;
