pub mod mock_persistence;

pub use mock_persistence::MockPersistence;
