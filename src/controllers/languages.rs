use crate::domain::language::LanguageCatalog;
use crate::error::AppResult;
use std::io::Write;

pub struct LanguagesController {
    catalog: &'static LanguageCatalog,
}

impl LanguagesController {
    pub fn new(catalog: &'static LanguageCatalog) -> Self {
        Self { catalog }
    }

    /// `glt -l` - print every supported language and its code
    pub fn list(&self, out: &mut dyn Write) -> AppResult<()> {
        writeln!(out, "Languages:")?;
        writeln!(out, "<lang> --- <code>")?;
        for (name, code) in self.catalog.list() {
            writeln!(out, "{} --- {}", name, code)?;
        }
        Ok(())
    }
}
