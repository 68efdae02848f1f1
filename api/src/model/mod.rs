pub mod auth;
pub mod booking;
pub mod client;
pub mod notification;
pub mod report;
pub mod room;
pub mod user;
