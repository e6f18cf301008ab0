// @file: market_data/src/utils/mod.rs
// @description: Shared utilities.
// @author: LAS.

pub mod config;
