//! # rentsync-core
//!
//! Pure availability and pricing logic for rentable assets (food trucks,
//! shared kitchens, vendor spaces). An owner configures when an asset can be
//! rented — whole days, hour-sliced blocks, or both — and at what price per
//! hour-of-day; this crate reconciles that configuration against finalized
//! bookings, owner blackout dates, and an optional availability window to
//! answer "is date D bookable, and at what status?"
//!
//! Everything here is synchronous and value-oriented: mutations take a value
//! and return a new value (or `None` when the edit would violate an
//! invariant), so callers can replay them freely. Persistence and booking
//! reads live in `rentsync-db`.

pub mod availability;
pub mod duration;
pub mod errors;
pub mod models;
pub mod summary;

pub use availability::{AvailabilityResolver, DayStatus};
pub use errors::{RentError, RentResult};
