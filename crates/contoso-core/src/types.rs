use crate::contact::Contact;

/// Kind of payload a handler wants serialized.
///
/// Formatters inspect this instead of the concrete value to decide
/// whether they can produce a representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// A single contact record.
    Contact,
    /// Any sequence of contact records, empty included.
    ContactSequence,
    /// Anything else, named for logging.
    Other(&'static str),
}

impl PayloadKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::ContactSequence => "ContactSequence",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contact or a sequence of contacts, as handed to an output formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactPayload {
    Single(Contact),
    Sequence(Vec<Contact>),
}

impl ContactPayload {
    #[must_use]
    pub const fn kind(&self) -> PayloadKind {
        match self {
            Self::Single(_) => PayloadKind::Contact,
            Self::Sequence(_) => PayloadKind::ContactSequence,
        }
    }

    /// ## Summary
    /// Iterates the contained records in order.
    pub fn records(&self) -> impl Iterator<Item = &Contact> {
        match self {
            Self::Single(contact) => std::slice::from_ref(contact).iter(),
            Self::Sequence(contacts) => contacts.iter(),
        }
    }
}

impl From<Contact> for ContactPayload {
    fn from(value: Contact) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<Contact>> for ContactPayload {
    fn from(value: Vec<Contact>) -> Self {
        Self::Sequence(value)
    }
}

impl FromIterator<Contact> for ContactPayload {
    fn from_iter<T: IntoIterator<Item = Contact>>(iter: T) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}
