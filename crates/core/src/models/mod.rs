pub mod blocking;
pub mod booking;
pub mod day;
pub mod pricing;
pub mod schedule;
