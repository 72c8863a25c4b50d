mod common;
mod data_tests;
