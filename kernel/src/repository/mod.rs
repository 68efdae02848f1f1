pub mod auth;
pub mod booking;
pub mod client;
pub mod health;
pub mod notification;
pub mod room;
pub mod user;
