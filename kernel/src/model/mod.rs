pub mod auth;
pub mod booking;
pub mod client;
pub mod id;
pub mod notification;
pub mod report;
pub mod role;
pub mod room;
pub mod user;
