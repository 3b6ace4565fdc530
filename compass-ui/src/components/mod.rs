//! Shared UI components

pub mod account_card;
pub mod button;
pub mod error_banner;
pub mod icons;
pub mod nav_header;
pub mod page_container;
pub mod select;
pub mod text_input;

pub use account_card::AccountCard;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use error_banner::ErrorBanner;
pub use icons::{AlertTriangleIcon, ImageIcon, LandmarkIcon, PlusIcon};
pub use nav_header::{NavHeaderView, NavItem};
pub use page_container::PageContainer;
pub use select::Select;
pub use text_input::{TextInput, TextInputSize};
