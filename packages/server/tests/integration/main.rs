mod auth;
mod common;
mod mobile_review;
