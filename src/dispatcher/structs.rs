pub mod dispatcher;
pub mod session;
