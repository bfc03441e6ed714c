//! Environment-driven knobs consumed by CI runs.

pub mod property_test_profile;
