//! An SSH certificate-signing secrets backend.
//!
//! This crate implements the configuration side of the backend: the
//! `config/ca` endpoint which establishes the certificate authority (CA)
//! key pair later used to sign SSH certificates. Callers either supply an
//! existing key pair or let the backend generate a fresh one. The resolved
//! pair is persisted into an opaque key/value [`storage`] backend.
//!
//! The surrounding request-routing framework, the durable storage engine
//! and the signing flow itself are external collaborators; this crate only
//! defines the traits and handlers they plug into.
pub mod ca;
pub mod storage;
