use qb_macros::{EnumCount, ToString, Vector};
use std::collections::HashMap;

const EN_LOCALE: &str = include_str!("../locales/en.lang");
const ES_LOCALE: &str = include_str!("../locales/es.lang");
const DE_LOCALE: &str = include_str!("../locales/de.lang");

pub struct I18N {
    locale: HashMap<String, String>,
    fallback_locale: HashMap<String, String>,
}

impl Default for I18N {
    fn default() -> Self {
        let locale = parse_locale(EN_LOCALE);
        Self {
            fallback_locale: locale.clone(),
            locale,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Vector, ToString, PartialEq)]
pub enum Language {
    #[default]
    English,
    German,
    Spanish,
}

#[derive(Clone, Copy, EnumCount)]
pub enum LangKey {
    About,
    AboutText(&'static str),
    Apply,
    Close,
    Copy,
    CopiedToClipboard,
    CreateNewQuery,
    Dark,
    Delete,
    Edit,
    Error,
    FixtureLoadFailed,
    Help,
    HideSidebar,
    Input,
    Language,
    Light,
    LoadingRows,
    NoData,
    NoMoreRows,
    NoResultsYet,
    Output,
    Quit,
    Rename,
    RowsPerLoad,
    Run,
    Save,
    SavedQueries,
    SelectLanguage,
    Settings,
    ShowSidebar,
    Theme,
    ToggleSplitDirection,
    ToggleTheme,
    UntitledQuery,
    Window,
}

impl I18N {
    pub fn new(language: Language) -> Self {
        let data = match language {
            Language::English => EN_LOCALE,
            Language::German => DE_LOCALE,
            Language::Spanish => ES_LOCALE,
        };
        Self {
            locale: parse_locale(data),
            fallback_locale: parse_locale(EN_LOCALE),
        }
    }

    pub fn get(&self, key: LangKey) -> String {
        match key {
            LangKey::About => self.get_lang("ABOUT"),
            LangKey::AboutText(version) => {
                let template = self.get_lang("ABOUT_TEXT");
                let mut params = HashMap::new();
                params.insert("version", version);
                fill_template(&template, &params)
            }
            LangKey::Apply => self.get_lang("APPLY"),
            LangKey::Close => self.get_lang("CLOSE"),
            LangKey::Copy => self.get_lang("COPY"),
            LangKey::CopiedToClipboard => self.get_lang("COPIED_TO_CLIPBOARD"),
            LangKey::CreateNewQuery => self.get_lang("CREATE_NEW_QUERY"),
            LangKey::Dark => self.get_lang("DARK"),
            LangKey::Delete => self.get_lang("DELETE"),
            LangKey::Edit => self.get_lang("EDIT"),
            LangKey::Error => self.get_lang("ERROR"),
            LangKey::FixtureLoadFailed => self.get_lang("FIXTURE_LOAD_FAILED"),
            LangKey::Help => self.get_lang("HELP"),
            LangKey::HideSidebar => self.get_lang("HIDE_SIDEBAR"),
            LangKey::Input => self.get_lang("INPUT"),
            LangKey::Language => self.get_lang("LANGUAGE"),
            LangKey::Light => self.get_lang("LIGHT"),
            LangKey::LoadingRows => self.get_lang("LOADING_ROWS"),
            LangKey::NoData => self.get_lang("NO_DATA"),
            LangKey::NoMoreRows => self.get_lang("NO_MORE_ROWS"),
            LangKey::NoResultsYet => self.get_lang("NO_RESULTS_YET"),
            LangKey::Output => self.get_lang("OUTPUT"),
            LangKey::Quit => self.get_lang("QUIT"),
            LangKey::Rename => self.get_lang("RENAME"),
            LangKey::RowsPerLoad => self.get_lang("ROWS_PER_LOAD"),
            LangKey::Run => self.get_lang("RUN"),
            LangKey::Save => self.get_lang("SAVE"),
            LangKey::SavedQueries => self.get_lang("SAVED_QUERIES"),
            LangKey::SelectLanguage => self.get_lang("SELECT_LANGUAGE"),
            LangKey::Settings => self.get_lang("SETTINGS"),
            LangKey::ShowSidebar => self.get_lang("SHOW_SIDEBAR"),
            LangKey::Theme => self.get_lang("THEME"),
            LangKey::ToggleSplitDirection => self.get_lang("TOGGLE_SPLIT_DIRECTION"),
            LangKey::ToggleTheme => self.get_lang("TOGGLE_THEME"),
            LangKey::UntitledQuery => self.get_lang("UNTITLED_QUERY"),
            LangKey::Window => self.get_lang("WINDOW"),
        }
    }

    fn get_lang(&self, key: &str) -> String {
        self.locale
            .get(key)
            .cloned()
            .or_else(|| self.fallback_locale.get(key).cloned())
            .unwrap_or(key.into())
    }
}

fn parse_locale(data: &str) -> HashMap<String, String> {
    let mut locale = HashMap::new();
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            locale.insert(key.to_string(), value.to_string());
        }
    }
    locale
}

fn fill_template(template: &str, params: &HashMap<&str, &str>) -> String {
    let mut result = template.to_owned();
    for (&key, &value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn find_duplicate_keys(data: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = HashSet::new();

        for line in data.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, _)) = line.split_once('=') {
                let key = key.trim();
                if !seen.insert(key.to_string()) {
                    duplicates.insert(key.to_string());
                }
            }
        }
        let mut duplicates: Vec<String> = duplicates.into_iter().collect();
        duplicates.sort();
        duplicates
    }

    fn compare_keys(map1: &HashMap<String, String>, map2: &HashMap<String, String>) -> bool {
        if map1.len() != map2.len() {
            return false;
        }
        map1.keys().all(|key| map2.contains_key(key))
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!(parse_locale(EN_LOCALE).len(), LangKey::COUNT);
        assert_eq!(parse_locale(ES_LOCALE).len(), LangKey::COUNT);
        assert_eq!(parse_locale(DE_LOCALE).len(), LangKey::COUNT);
    }

    #[test]
    fn test_no_duplicates() {
        assert!(find_duplicate_keys(EN_LOCALE).is_empty());
        assert!(find_duplicate_keys(ES_LOCALE).is_empty());
        assert!(find_duplicate_keys(DE_LOCALE).is_empty());
    }

    #[test]
    fn test_inconsistent_keys() {
        assert!(compare_keys(
            &parse_locale(EN_LOCALE),
            &parse_locale(ES_LOCALE)
        ));
        assert!(compare_keys(
            &parse_locale(EN_LOCALE),
            &parse_locale(DE_LOCALE)
        ));
    }

    #[test]
    fn test_fallback_for_missing_key() {
        let i18n = I18N::new(Language::German);
        assert_eq!(i18n.get_lang("NOT_A_REAL_KEY"), "NOT_A_REAL_KEY");
    }

    #[test]
    fn test_template_fill() {
        let i18n = I18N::default();
        let text = i18n.get(LangKey::AboutText("1.2.3"));
        assert!(text.contains("1.2.3"));
        assert!(!text.contains("{version}"));
    }
}
