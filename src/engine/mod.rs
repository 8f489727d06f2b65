//! Core engine — validate → aggregate → settle for submitted entries.

pub mod aggregator;
pub mod session;
pub mod settlement;
pub mod validator;
