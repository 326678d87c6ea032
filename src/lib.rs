//! Room inventory and date-range reservation allocation for a single hotel.
//!
//! [`Booker`] owns twenty rooms and assigns each stay to the lowest-numbered
//! room that is free for every night of it. Stays are half-open date ranges,
//! so a guest can check in on the day another checks out.

pub mod block;
pub mod booker;
pub mod config;
pub mod date_range;
pub mod error;
pub mod reservation;
pub mod room;

pub use block::{Block, BlockId};
pub use booker::Booker;
pub use config::HotelConfig;
pub use date_range::DateRange;
pub use error::BookingError;
pub use reservation::{Reservation, ReservationId};
pub use room::{Room, RoomId};
