//! Core types shared across formorder facilities
//!
//! This crate provides foundational types used by the ordering engine,
//! the error facility and the logging facility:
//!
//! - **Field keys**: FieldKey, the identity of a form field descriptor
//! - **Schema constants**: Canonical field keys and event names

pub mod key;
pub mod schema;

pub use key::FieldKey;
