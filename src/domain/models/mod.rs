pub mod availability;
pub mod catalog;
pub mod notice;
pub mod schedule;
pub mod wizard;
