//! HTTP query surface over the latest pipeline snapshot.

pub mod app;
