mod app_state;
mod message;
mod preferences;
mod query_store;
mod results_loader;
mod workbench_state;

pub use app_state::AppState;
pub use message::{Event, Message};
pub use preferences::{DEFAULT_ROWS_PER_CHUNK, Preferences, SplitBounds, SplitOrientation, Theme};
pub use query_store::{QueryStore, Row, SavedQuery};
pub use results_loader::ResultsLoader;
pub use workbench_state::WorkbenchState;
