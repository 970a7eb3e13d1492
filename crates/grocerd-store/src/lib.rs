// ABOUTME: Persistence layer for grocerd, owning the in-memory grocery list and its backing file.
// ABOUTME: Provides load-or-default on open and atomic whole-list replace behind a single store lock.

pub mod list;

pub use list::{ListStore, StoreError};
