mod health_tests;
mod vendor_tests;
