mod mock_file_store;

pub use mock_file_store::MockFileStore;
