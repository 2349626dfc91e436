#[macro_use]
mod support;

mod update_tests;
