//! Cost-Plus Pricing Engine for project quotes
//!
//! This crate computes the client-facing price of a consulting project from a
//! roster of resources (employees, collaborators, freelancers), annual fixed
//! overhead costs, one or more projects, and company fiscal parameters
//! (profit margin, IRAP, VAT).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
