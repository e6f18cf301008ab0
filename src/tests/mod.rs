// @file: market_data/src/tests/mod.rs
// @description: Fetch tests run against a local stub provider.
// @author: LAS.

mod stub_provider;
