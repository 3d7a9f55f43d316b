pub mod backend;
pub mod compose;
pub mod error;
pub mod telegram;

pub use backend::{Channel, Notifier, NotifierBackend};
pub use compose::compose;
pub use error::NotifyError;
pub use telegram::TelegramNotifier;
