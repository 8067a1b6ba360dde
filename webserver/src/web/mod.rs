//! HTTP handlers

pub mod handlers;
