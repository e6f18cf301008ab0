// @file: market_data/src/core/mod.rs
// @description: Exports domain data structures, errors and source traits.
// @author: LAS.

pub mod models;
pub mod errors;
pub mod interfaces;
