//! CTC Decomposition Engine for Indian monthly payroll
//!
//! This crate derives a full monthly salary breakdown (basic pay, HRA,
//! conveyance, special allowance, provident fund, ESIC, professional tax and
//! net payable) from a monthly Cost-To-Company figure and a configuration of
//! ratios and statutory rates.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
