pub mod stat;
pub mod knight;
pub mod dragon;
pub mod outcome;
