pub mod contract;
pub mod ledger;

pub use contract::Contract;
pub use ledger::{Notifiable, Notification, NotificationLedger};
