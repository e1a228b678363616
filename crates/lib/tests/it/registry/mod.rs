//! Registry integration tests

mod registration_tests;
