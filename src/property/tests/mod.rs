//! Unit tests for the property context.

mod domain_tests;
