pub mod transport_error;
