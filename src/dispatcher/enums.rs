pub mod dispatch_error;
