mod rail_future_tests;
mod validation_tests;
