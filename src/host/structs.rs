pub mod headless_host;
