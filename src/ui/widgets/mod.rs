mod error_modal;
mod popups;
mod shimmer;
mod split_view;
mod toast;

pub use error_modal::ErrorModal;
pub use popups::SettingsPopup;
pub use shimmer::{Shimmer, shimmer_rows};
pub use split_view::SplitView;
pub use toast::{Toast, show_toasts};
