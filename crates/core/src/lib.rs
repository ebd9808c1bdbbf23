//! Domain types and validation for the Resource Hub backend.
//!
//! This crate is I/O-free: it defines the error taxonomy, shared id/timestamp
//! aliases, the content block type system, and the validation rules applied
//! at the API boundary. Persistence lives in `hub-db`, HTTP in `hub-api`.

pub mod block;
pub mod category;
pub mod error;
pub mod resource;
pub mod theme;
pub mod types;
