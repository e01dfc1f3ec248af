//! Staff authorization check.

use std::collections::BTreeSet;

/// Role IDs allowed to use the pricing commands when no override is configured.
pub const DEFAULT_STAFF_ROLE_IDS: [u64; 5] = [
    1_431_025_682_913_165_322,
    1_430_841_958_708_019_272,
    1_432_580_761_143_480_330,
    1_430_750_454_375_251_978,
    1_438_754_771_992_576_120,
];

/// Allow-list of role IDs that mark a guild member as staff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffRoles {
    allowed: BTreeSet<u64>,
}

impl StaffRoles {
    /// Creates an allow-list from role IDs.
    pub fn new(role_ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            allowed: role_ids.into_iter().collect(),
        }
    }

    /// Returns true iff the caller is a guild member holding at least one allowed role.
    ///
    /// `member_roles` is `None` when the caller is not a guild member (e.g. a DM).
    #[must_use]
    pub fn is_staff(&self, member_roles: Option<&[u64]>) -> bool {
        member_roles.is_some_and(|roles| roles.iter().any(|role| self.allowed.contains(role)))
    }

    /// Number of roles in the allow-list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    /// Whether the allow-list is empty, in which case nobody is staff.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl Default for StaffRoles {
    fn default() -> Self {
        Self::new(DEFAULT_STAFF_ROLE_IDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_with_one_staff_role_is_staff() {
        let staff = StaffRoles::default();
        let roles = [42, DEFAULT_STAFF_ROLE_IDS[3]];
        assert!(staff.is_staff(Some(&roles)));
    }

    #[test]
    fn test_member_without_staff_roles_is_not_staff() {
        let staff = StaffRoles::default();
        assert!(!staff.is_staff(Some(&[1, 2, 3])));
    }

    #[test]
    fn test_member_with_no_roles_is_not_staff() {
        let staff = StaffRoles::default();
        assert!(!staff.is_staff(Some(&[])));
    }

    #[test]
    fn test_non_member_is_not_staff() {
        let staff = StaffRoles::default();
        assert!(!staff.is_staff(None));
    }

    #[test]
    fn test_empty_allow_list_admits_nobody() {
        let staff = StaffRoles::new([]);
        assert!(staff.is_empty());
        assert!(!staff.is_staff(Some(&DEFAULT_STAFF_ROLE_IDS)));
    }

    #[test]
    fn test_default_allow_list_has_five_roles() {
        assert_eq!(StaffRoles::default().len(), 5);
    }
}
