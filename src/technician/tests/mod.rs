//! Unit and service tests for the technician context.

mod domain_tests;
