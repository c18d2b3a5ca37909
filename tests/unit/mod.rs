//! Unit test modules.

mod preference_values_test;
mod refresh_interval_test;
