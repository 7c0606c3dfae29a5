//! REST API endpoint tests

mod status_tests;
mod user_tests;
