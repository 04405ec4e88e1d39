use once_cell::sync::Lazy;

use super::resolver::{score, LanguageResolver, MatchResult, ResolveError};

/// Display name and code pairs in Google Translate's table order.
///
/// `iw` and `he` both map to hebrew upstream; only `he` is kept so that
/// every name maps to exactly one code.
const GOOGLE_LANGUAGES: &[(&str, &str)] = &[
    ("afrikaans", "af"),
    ("albanian", "sq"),
    ("amharic", "am"),
    ("arabic", "ar"),
    ("armenian", "hy"),
    ("azerbaijani", "az"),
    ("basque", "eu"),
    ("belarusian", "be"),
    ("bengali", "bn"),
    ("bosnian", "bs"),
    ("bulgarian", "bg"),
    ("catalan", "ca"),
    ("cebuano", "ceb"),
    ("chichewa", "ny"),
    ("chinese (simplified)", "zh-cn"),
    ("chinese (traditional)", "zh-tw"),
    ("corsican", "co"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("english", "en"),
    ("esperanto", "eo"),
    ("estonian", "et"),
    ("filipino", "tl"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("frisian", "fy"),
    ("galician", "gl"),
    ("georgian", "ka"),
    ("german", "de"),
    ("greek", "el"),
    ("gujarati", "gu"),
    ("haitian creole", "ht"),
    ("hausa", "ha"),
    ("hawaiian", "haw"),
    ("hebrew", "he"),
    ("hindi", "hi"),
    ("hmong", "hmn"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("igbo", "ig"),
    ("indonesian", "id"),
    ("irish", "ga"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("javanese", "jw"),
    ("kannada", "kn"),
    ("kazakh", "kk"),
    ("khmer", "km"),
    ("korean", "ko"),
    ("kurdish (kurmanji)", "ku"),
    ("kyrgyz", "ky"),
    ("lao", "lo"),
    ("latin", "la"),
    ("latvian", "lv"),
    ("lithuanian", "lt"),
    ("luxembourgish", "lb"),
    ("macedonian", "mk"),
    ("malagasy", "mg"),
    ("malay", "ms"),
    ("malayalam", "ml"),
    ("maltese", "mt"),
    ("maori", "mi"),
    ("marathi", "mr"),
    ("mongolian", "mn"),
    ("myanmar (burmese)", "my"),
    ("nepali", "ne"),
    ("norwegian", "no"),
    ("odia", "or"),
    ("pashto", "ps"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("punjabi", "pa"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("samoan", "sm"),
    ("scots gaelic", "gd"),
    ("serbian", "sr"),
    ("sesotho", "st"),
    ("shona", "sn"),
    ("sindhi", "sd"),
    ("sinhala", "si"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("somali", "so"),
    ("spanish", "es"),
    ("sundanese", "su"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tajik", "tg"),
    ("tamil", "ta"),
    ("telugu", "te"),
    ("thai", "th"),
    ("turkish", "tr"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("uyghur", "ug"),
    ("uzbek", "uz"),
    ("vietnamese", "vi"),
    ("welsh", "cy"),
    ("xhosa", "xh"),
    ("yiddish", "yi"),
    ("yoruba", "yo"),
    ("zulu", "zu"),
];

static DEFAULT_CATALOG: Lazy<LanguageCatalog> =
    Lazy::new(|| LanguageCatalog::new(GOOGLE_LANGUAGES.iter().copied()));

/// One catalog row: a human readable name and the code the translation
/// service understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: String,
    pub code: String,
}

/// Ordered, read-only table of language names and codes.
///
/// Built once and only queried afterwards. Names are unique: inserting a
/// name twice keeps its first position and replaces its code.
#[derive(Debug, Clone, Default)]
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
}

impl LanguageCatalog {
    pub fn new<I, N, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut entries: Vec<LanguageEntry> = Vec::new();
        for (name, code) in pairs {
            let name = name.into();
            let code = code.into();
            match entries.iter_mut().find(|e| e.name == name) {
                Some(existing) => existing.code = code,
                None => entries.push(LanguageEntry { name, code }),
            }
        }
        Self { entries }
    }

    /// The Google Translate catalog shared by the whole process.
    pub fn global() -> &'static LanguageCatalog {
        &DEFAULT_CATALOG
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, code)` pairs in insertion order. Every call yields the same
    /// sequence.
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.code.as_str()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.code.as_str())
    }

    pub fn entry(&self, index: usize) -> Option<&LanguageEntry> {
        self.entries.get(index)
    }

    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code.eq_ignore_ascii_case(code))
            .map(|e| e.name.as_str())
    }

    /// Best entry for `query`, scoring it against both the display name and
    /// the code of every entry. The returned value is always a code.
    pub fn resolve(&self, query: &str) -> Result<MatchResult, ResolveError> {
        self.resolve_with(&LanguageResolver::default(), query)
    }

    pub fn resolve_with(
        &self,
        resolver: &LanguageResolver,
        query: &str,
    ) -> Result<MatchResult, ResolveError> {
        let best = resolver.best_by(query, &self.entries, |entry| {
            score(query, &entry.name).max(score(query, &entry.code))
        })?;
        Ok(MatchResult {
            value: best.item.code.clone(),
            score: best.score,
            index: best.index,
        })
    }

    /// Codes-only matching: a query is never compared to a display name.
    pub fn resolve_codes(&self, query: &str) -> Result<MatchResult, ResolveError> {
        LanguageResolver::default().resolve(query, self.codes())
    }
}
