#[cfg(any(test, feature = "test-util"))]
mod mock;
mod news;
mod transport;

#[cfg(any(test, feature = "test-util"))]
pub use mock::MockTransport;
pub use news::NewsClient;
pub use transport::{HttpTransport, Transport};
