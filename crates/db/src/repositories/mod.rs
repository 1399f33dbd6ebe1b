pub mod blocking;
pub mod booking;
pub mod calendar;
