//! Server-side business logic, independent of HTTP extraction.

pub mod contact;
