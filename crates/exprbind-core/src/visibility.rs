//! Member visibility and the query-time visibility filter.

use std::fmt;

use bitflags::bitflags;

/// Visibility modifier declared on a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

bitflags! {
    /// Which visibilities an introspection query may see.
    ///
    /// Carried on the binding context options and passed through on every
    /// member query, so all resolution paths honor the same filter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MemberFilter: u8 {
        const PUBLIC = 1 << 0;
        const NON_PUBLIC = 1 << 1;
    }
}

impl MemberFilter {
    /// Whether a member with the given visibility passes this filter.
    pub fn allows(self, visibility: Visibility) -> bool {
        match visibility {
            Visibility::Public => self.contains(MemberFilter::PUBLIC),
            Visibility::Private => self.contains(MemberFilter::NON_PUBLIC),
        }
    }
}

impl Default for MemberFilter {
    fn default() -> Self {
        MemberFilter::PUBLIC
    }
}
