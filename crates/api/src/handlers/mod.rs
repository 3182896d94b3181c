//! HTTP request handlers.

pub mod item;
