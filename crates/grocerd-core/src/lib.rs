// ABOUTME: Core library for grocerd, containing the domain types shared across components.
// ABOUTME: Defines the grocery list Item and the Basic auth Credentials wire shapes.

pub mod credentials;
pub mod item;

pub use credentials::Credentials;
pub use item::Item;
