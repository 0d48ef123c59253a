/// Shared list of registered view endpoints.
pub mod view_list;
