//! Integration test harness


mod extract_test;
mod inspect_test;
