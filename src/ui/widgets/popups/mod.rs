mod settings_popup;

pub use settings_popup::SettingsPopup;
