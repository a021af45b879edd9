//! Hand-written test doubles shared by the integration tests.

pub mod mock_delivery_strategy;
pub mod mock_email_sender;

#[allow(unused_imports)]
pub use mock_delivery_strategy::MockDeliveryStrategy;
#[allow(unused_imports)]
pub use mock_email_sender::MockEmailSender;
