// ABOUTME: API module containing the HTTP handler functions for the grocerd REST API.
// ABOUTME: A single items sub-module covers the list read and whole-list replace endpoints.

pub mod items;
