//! HTTP delivery towards the remote MTB registry.
//!
//! A thin blocking client behind the core crate's [`Delivery`] trait:
//! publish is an idempotent POST of the wire JSON, withdrawal is a DELETE
//! keyed by the patient's external identifier. No retries, no queueing; a
//! failed attempt surfaces to the triggering caller and the next trigger
//! re-asserts the remote state.

mod client;

pub use client::RegistryClient;

pub use mtb_export_core::export::Delivery;
