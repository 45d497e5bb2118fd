//! Pharmacy-on-duty roster server.
//!
//! Fetches the daily roster of pharmacies on duty, validates it, and turns
//! it into map-ready entries for a map front end.

pub mod config;
pub mod domain;
pub mod fetch;
pub mod pharmacy;
pub mod roster;
pub mod web;
