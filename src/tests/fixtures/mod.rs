pub mod app;
pub mod employees;
pub mod tokens;
