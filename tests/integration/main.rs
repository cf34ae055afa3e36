//! Integration tests for the brochure scraper
//!
//! These tests use wiremock to serve shop pages and lopdf to build brochures,
//! and exercise the fetch, parse, aggregate and export cycle end-to-end.

mod common;
mod run_tests;
