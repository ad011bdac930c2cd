/// Structured name (N property).
///
/// vCard 2.1 and later split N into five `;`-separated components,
/// each of which may carry several comma-separated values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: Vec<String>,
    /// Given names (first names).
    pub given: Vec<String>,
    /// Additional names (middle names).
    pub additional: Vec<String>,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Returns the family names joined by spaces.
    #[must_use]
    pub fn family_name(&self) -> String {
        self.family.join(" ")
    }

    /// Returns the given names joined by spaces.
    #[must_use]
    pub fn given_name(&self) -> String {
        self.given.join(" ")
    }
}
