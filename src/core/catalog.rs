//! Locale-keyed text resources with `{param}` interpolation.
//!
//! Lookups are total: a key missing from the selected locale resolves to the
//! key itself, never to another locale's text and never to an error.

use crate::domain::model::{Locale, SUPPORTED_LOCALES};
use crate::locales;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

static BUILTIN: OnceLock<Catalog> = OnceLock::new();
static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder_pattern() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern is valid"))
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    strings: HashMap<Locale, HashMap<&'static str, &'static str>>,
}

/// Keys each locale lacks relative to the union of all locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub total_keys: usize,
    pub missing: Vec<(Locale, Vec<&'static str>)>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing.iter().all(|(_, keys)| keys.is_empty())
    }
}

impl Catalog {
    /// The bundled catalog, built once per process.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let catalog = Catalog::from_entries(
                SUPPORTED_LOCALES
                    .iter()
                    .map(|&locale| (locale, locales::entries(locale))),
            );
            tracing::debug!(
                "Loaded text resources: {}",
                SUPPORTED_LOCALES
                    .iter()
                    .map(|l| format!("{}={}", l, catalog.len(*l)))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            catalog
        })
    }

    pub fn from_entries<'a, I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Locale, &'a [(&'static str, &'static str)])>,
    {
        let mut strings: HashMap<Locale, HashMap<&'static str, &'static str>> = HashMap::new();
        for (locale, entries) in tables {
            strings
                .entry(locale)
                .or_default()
                .extend(entries.iter().copied());
        }
        Self { strings }
    }

    pub fn len(&self, locale: Locale) -> usize {
        self.strings.get(&locale).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.strings.values().all(HashMap::is_empty)
    }

    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.strings
            .get(&locale)
            .is_some_and(|table| table.contains_key(key))
    }

    /// Template for `key` in `locale`, or `key` itself when absent.
    pub fn resolve<'a>(&self, locale: Locale, key: &'a str) -> &'a str {
        match self
            .strings
            .get(&locale)
            .and_then(|table| table.get(key))
            .copied()
        {
            Some(template) => template,
            None => {
                tracing::debug!("Missing text resource '{}' for locale {}", key, locale);
                key
            }
        }
    }

    /// Resolves `key` and substitutes every `{name}` that has a matching
    /// parameter. Unmatched placeholders stay in the output as written.
    pub fn resolve_with(&self, locale: Locale, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(self.resolve(locale, key), params).into_owned()
    }

    pub fn coverage(&self) -> CoverageReport {
        let all_keys: BTreeSet<&'static str> = self
            .strings
            .values()
            .flat_map(|table| table.keys().copied())
            .collect();

        let missing = SUPPORTED_LOCALES
            .iter()
            .map(|&locale| {
                let keys = all_keys
                    .iter()
                    .copied()
                    .filter(|key| !self.contains(locale, key))
                    .collect();
                (locale, keys)
            })
            .collect();

        CoverageReport {
            total_keys: all_keys.len(),
            missing,
        }
    }
}

/// Single pass over the template, so substituted values are never rescanned.
pub fn interpolate<'t>(template: &'t str, params: &[(&str, &str)]) -> Cow<'t, str> {
    if params.is_empty() {
        return Cow::Borrowed(template);
    }

    placeholder_pattern().replace_all(template, |caps: &Captures| {
        let name = &caps[1];
        match params.iter().find(|(param, _)| *param == name) {
            Some((_, value)) => (*value).to_string(),
            None => caps[0].to_string(),
        }
    })
}

/// A catalog handle plus the currently selected locale. Views receive one of
/// these instead of reaching for global state.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    catalog: &'static Catalog,
    locale: Locale,
}

impl Translator {
    pub fn new(catalog: &'static Catalog, locale: Locale) -> Self {
        Self { catalog, locale }
    }

    pub fn builtin(locale: Locale) -> Self {
        Self::new(Catalog::builtin(), locale)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            tracing::debug!("Switching locale {} -> {}", self.locale, locale);
        }
        self.locale = locale;
    }

    pub fn toggle(&mut self) -> Locale {
        self.set_locale(self.locale.toggled());
        self.locale
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.catalog.resolve(self.locale, key)
    }

    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.catalog.resolve_with(self.locale, key, params)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::builtin(Locale::default())
    }
}
