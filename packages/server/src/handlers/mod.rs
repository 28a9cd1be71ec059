pub mod auth;
pub mod review;
