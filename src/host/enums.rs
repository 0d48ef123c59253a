pub mod parameter_error;
pub mod parameter_value;
