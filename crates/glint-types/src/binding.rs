//! Binding-flag masks for member selection.
//!
//! Each entry in a queried member list carries the minimal flag set a
//! caller's query must contain for the entry to be selected. The same
//! flag type is used on the request side, where `IGNORE_CASE` may
//! additionally be set; stored entry masks never contain it.

use std::fmt;

/// Member-selection flags (bitflags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BindingFlags(u8);

impl BindingFlags {
    /// Empty flag set.
    pub const NONE: Self = Self(0x00);
    /// Select public members.
    pub const PUBLIC: Self = Self(0x01);
    /// Select non-public (protected or private) members.
    pub const NON_PUBLIC: Self = Self(0x02);
    /// Select instance members.
    pub const INSTANCE: Self = Self(0x04);
    /// Select static members.
    pub const STATIC: Self = Self(0x08);
    /// Opt in to static members declared on base classes.
    pub const FLATTEN_HIERARCHY: Self = Self(0x10);
    /// Match the query name case-insensitively (request side only).
    pub const IGNORE_CASE: Self = Self(0x20);

    // Common combinations
    /// PUBLIC | NON_PUBLIC
    pub const ANY_VISIBILITY: Self = Self(0x03);
    /// INSTANCE | STATIC
    pub const ANY_SCOPE: Self = Self(0x0C);
    /// Every flag a stored mask can demand; selects all entries.
    pub const EXHAUSTIVE: Self = Self(0x1F);

    /// Create from raw bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Get raw bits.
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Check whether every flag in `other` is also set in `self`.
    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Union of flag sets.
    pub const fn union(&self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Intersection of flag sets.
    pub const fn intersection(&self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Difference (remove flags).
    pub const fn difference(&self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Whether no flag is set.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether this is a well-formed stored entry mask: exactly one of
    /// PUBLIC/NON_PUBLIC, exactly one of INSTANCE/STATIC,
    /// FLATTEN_HIERARCHY only together with STATIC, and no
    /// request-side bits.
    pub const fn is_valid_entry_mask(&self) -> bool {
        let visibility = self.0 & Self::ANY_VISIBILITY.0;
        let scope = self.0 & Self::ANY_SCOPE.0;
        let one_visibility = visibility == Self::PUBLIC.0 || visibility == Self::NON_PUBLIC.0;
        let one_scope = scope == Self::INSTANCE.0 || scope == Self::STATIC.0;
        let flatten_ok = (self.0 & Self::FLATTEN_HIERARCHY.0) == 0 || scope == Self::STATIC.0;
        let no_request_bits = (self.0 & !Self::EXHAUSTIVE.0) == 0;
        one_visibility && one_scope && flatten_ok && no_request_bits
    }

    /// Parse a single flag name, or raw bits as hex/decimal.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "NONE" => Some(Self::NONE),
            "PUBLIC" => Some(Self::PUBLIC),
            "NON_PUBLIC" => Some(Self::NON_PUBLIC),
            "INSTANCE" => Some(Self::INSTANCE),
            "STATIC" => Some(Self::STATIC),
            "FLATTEN_HIERARCHY" => Some(Self::FLATTEN_HIERARCHY),
            "IGNORE_CASE" => Some(Self::IGNORE_CASE),
            "ANY_VISIBILITY" => Some(Self::ANY_VISIBILITY),
            "ANY_SCOPE" => Some(Self::ANY_SCOPE),
            "EXHAUSTIVE" => Some(Self::EXHAUSTIVE),
            _ => {
                if let Some(hex) = s.strip_prefix("0x") {
                    u8::from_str_radix(hex, 16).ok().map(Self::from_bits)
                } else {
                    s.parse::<u8>().ok().map(Self::from_bits)
                }
            }
        }
    }

    /// Parse combined flags from a pipe-separated string
    /// (e.g., "PUBLIC|STATIC|FLATTEN_HIERARCHY").
    pub fn parse_combined(s: &str) -> Option<Self> {
        let mut result = Self::NONE;
        for part in s.split('|') {
            let flag = Self::parse(part.trim())?;
            result = result.union(flag);
        }
        Some(result)
    }
}

impl fmt::Display for BindingFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        const NAMES: [(BindingFlags, &str); 6] = [
            (BindingFlags::PUBLIC, "PUBLIC"),
            (BindingFlags::NON_PUBLIC, "NON_PUBLIC"),
            (BindingFlags::INSTANCE, "INSTANCE"),
            (BindingFlags::STATIC, "STATIC"),
            (BindingFlags::FLATTEN_HIERARCHY, "FLATTEN_HIERARCHY"),
            (BindingFlags::IGNORE_CASE, "IGNORE_CASE"),
        ];
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let request = BindingFlags::PUBLIC
            .union(BindingFlags::STATIC)
            .union(BindingFlags::FLATTEN_HIERARCHY);
        assert!(request.contains(BindingFlags::PUBLIC.union(BindingFlags::STATIC)));
        assert!(!request.contains(BindingFlags::NON_PUBLIC));
        assert!(BindingFlags::EXHAUSTIVE.contains(request));
    }

    #[test]
    fn test_valid_entry_masks() {
        assert!(BindingFlags::PUBLIC
            .union(BindingFlags::INSTANCE)
            .is_valid_entry_mask());
        assert!(BindingFlags::NON_PUBLIC
            .union(BindingFlags::STATIC)
            .union(BindingFlags::FLATTEN_HIERARCHY)
            .is_valid_entry_mask());
    }

    #[test]
    fn test_invalid_entry_masks() {
        // Missing a visibility bit
        assert!(!BindingFlags::INSTANCE.is_valid_entry_mask());
        // Both visibility bits
        assert!(!BindingFlags::ANY_VISIBILITY
            .union(BindingFlags::INSTANCE)
            .is_valid_entry_mask());
        // Both scope bits
        assert!(!BindingFlags::PUBLIC
            .union(BindingFlags::ANY_SCOPE)
            .is_valid_entry_mask());
        // FLATTEN_HIERARCHY without STATIC
        assert!(!BindingFlags::PUBLIC
            .union(BindingFlags::INSTANCE)
            .union(BindingFlags::FLATTEN_HIERARCHY)
            .is_valid_entry_mask());
        // Request-side bit in a stored mask
        assert!(!BindingFlags::PUBLIC
            .union(BindingFlags::INSTANCE)
            .union(BindingFlags::IGNORE_CASE)
            .is_valid_entry_mask());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(BindingFlags::parse("PUBLIC"), Some(BindingFlags::PUBLIC));
        assert_eq!(BindingFlags::parse("0x1F"), Some(BindingFlags::EXHAUSTIVE));
        assert_eq!(
            BindingFlags::parse_combined("PUBLIC | STATIC"),
            Some(BindingFlags::PUBLIC.union(BindingFlags::STATIC))
        );
        assert_eq!(
            BindingFlags::PUBLIC.union(BindingFlags::STATIC).to_string(),
            "PUBLIC|STATIC"
        );
        assert_eq!(BindingFlags::NONE.to_string(), "NONE");
    }
}
