//! Message catalogs.
//!
//! Holiday names are message ids written in the country's default language.
//! A [`Catalog`] maps those ids to one other language; a missing entry
//! falls back to the id itself, so the default language needs no catalog.

use std::borrow::Cow;

use tracing::warn;

use crate::countries::Country;

/// Translation lookup keyed by message id.
pub trait Translate: std::fmt::Debug + Send + Sync {
    /// The language this translator produces.
    fn language(&self) -> &str;

    /// Translate `message`, or return it unchanged when untranslated.
    fn tr<'a>(&self, message: &'a str) -> Cow<'a, str>;
}

/// A static message catalog for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    /// Language code, e.g. `"en_US"`.
    pub language: &'static str,
    /// `(message id, translation)` pairs.
    pub entries: &'static [(&'static str, &'static str)],
}

impl Catalog {
    /// Look up a translation without falling back.
    pub fn get(&self, message: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(id, _)| *id == message)
            .map(|(_, text)| *text)
    }
}

impl Translate for Catalog {
    fn language(&self) -> &str {
        self.language
    }

    fn tr<'a>(&self, message: &'a str) -> Cow<'a, str> {
        match self.get(message) {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Borrowed(message),
        }
    }
}

/// Pick the catalog for `requested` among the languages `country` supports.
///
/// `None` or the default language give an empty catalog (names stay as their
/// message ids).  An unsupported language falls back to the default one with
/// a warning.
pub fn resolve_catalog(country: &dyn Country, requested: Option<&str>) -> Catalog {
    let default = Catalog {
        language: country.default_language(),
        entries: &[],
    };
    let Some(requested) = requested else {
        return default;
    };
    let wanted = requested.trim().replace('-', "_");
    let Some(language) = country
        .supported_languages()
        .iter()
        .find(|l| l.eq_ignore_ascii_case(&wanted))
    else {
        warn!(
            country = country.code(),
            requested,
            fallback = country.default_language(),
            "unsupported language"
        );
        return default;
    };
    if *language == country.default_language() {
        return default;
    }
    match country.catalogs().iter().find(|c| c.language == *language) {
        Some(catalog) => *catalog,
        None => {
            warn!(country = country.code(), language, "no catalog for supported language");
            default
        }
    }
}

/// Replace the first `%s` in `template` with `arg`.
pub(crate) fn fill(template: &str, arg: &str) -> String {
    match template.find("%s") {
        Some(pos) => {
            let mut out = String::with_capacity(template.len() + arg.len());
            out.push_str(&template[..pos]);
            out.push_str(arg);
            out.push_str(&template[pos + 2..]);
            out
        }
        None => template.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static EN: Catalog = Catalog {
        language: "en_US",
        entries: &[("春節", "Chinese New Year"), ("%s（慶祝）", "%s (observed)")],
    };

    #[test]
    fn lookup_and_identity() {
        assert_eq!(EN.tr("春節"), "Chinese New Year");
        assert_eq!(EN.tr("端午節"), "端午節");
        assert_eq!(EN.language(), "en_US");
    }

    #[test]
    fn fill_label() {
        assert_eq!(fill(&EN.tr("%s（慶祝）"), "Chinese New Year"), "Chinese New Year (observed)");
        assert_eq!(fill("休息日（%s日起取代）", "2023-01-07"), "休息日（2023-01-07日起取代）");
        assert_eq!(fill("no placeholder", "x"), "no placeholder");
    }
}
