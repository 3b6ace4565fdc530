mod accounts;
mod home;
mod layout;
mod new_account;

pub use accounts::Accounts;
pub use home::Home;
pub use layout::AppLayout;
pub use new_account::NewAccount;
