pub mod core;
pub mod factory;
pub mod file_source;
pub mod http_source;
pub mod mock;

pub use file_source::FileDataSource;
pub use http_source::HttpDataSource;
pub use mock::MockDataSource;
