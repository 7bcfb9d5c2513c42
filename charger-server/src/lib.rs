//! EV charger locator server.
//!
//! A web application that answers: "Which charging stations are in this
//! postal code, and how far is each one from me?"

pub mod config;
pub mod domain;
pub mod locate;
pub mod ocm;
pub mod web;
