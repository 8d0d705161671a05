pub mod batch;
pub mod forecast;
