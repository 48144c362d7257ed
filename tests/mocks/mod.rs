mod mock_clay_client;

pub use mock_clay_client::{MockClayClient, RecordedRequest};
