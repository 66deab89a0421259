//! Property test modules

mod grouping_tests;
mod selection_tests;
