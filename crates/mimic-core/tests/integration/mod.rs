//! Integration test modules

mod sidebar_flow_tests;
