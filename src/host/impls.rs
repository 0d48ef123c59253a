pub mod headless_host;
pub mod parameter_error;
pub mod parameter_value;
