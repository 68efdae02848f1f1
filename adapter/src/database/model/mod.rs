pub mod booking;
pub mod client;
pub mod notification;
pub mod room;
pub mod user;
