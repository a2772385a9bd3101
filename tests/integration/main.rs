mod common;
mod generation_test;
mod health_test;
