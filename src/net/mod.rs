//! Network layer: the gateway client, its query/mutation documents, wire
//! DTOs, and the REST upload helper.
//!
//! ARCHITECTURE
//! ============
//! `gateway` owns transport and centralized error observation; `queries`
//! owns documents and variable construction; the operation modules
//! (`auth`, `recipes`, `payment`, `upload`) are thin pass-throughs that
//! pair a document with its response shape.

pub mod auth;
pub mod gateway;
pub mod payment;
pub mod queries;
pub mod recipes;
pub mod types;
pub mod upload;
