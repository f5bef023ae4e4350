//! Unit tests for the status registry.

mod domain_tests;
