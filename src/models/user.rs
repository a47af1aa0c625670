use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FlagError, Result};

bitflags::bitflags! {
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Role: u8 {
        /// Zero value, never reported as held
        const NONE     = 0;
        const READ     = 1 << 1;
        const TRIAGE   = 1 << 2;
        const WRITE    = 1 << 3;
        const MAINTAIN = 1 << 4;
        const ADMIN    = 1 << 5;
    }
}

impl_serde_for_bitflags!(Role);

impl Role {
    const LABELS: [(Self, &'static str); 6] = [
        (Self::NONE, "None"),
        (Self::READ, "Read"),
        (Self::TRIAGE, "Triage"),
        (Self::WRITE, "Write"),
        (Self::MAINTAIN, "Maintain"),
        (Self::ADMIN, "Admin"),
    ];

    /// Label of this exact value, `"Unknown"` for combinations and unnamed bits.
    pub fn label(self) -> &'static str {
        Self::LABELS
            .iter()
            .find(|(role, _)| *role == self)
            .map_or("Unknown", |(_, label)| *label)
    }

    /// Labels of every held role, lowest bit first. `NONE` is never listed.
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        Self::LABELS
            .into_iter()
            .filter(move |(role, _)| !role.is_empty() && self.contains(*role))
            .map(|(_, label)| label)
    }

    pub fn parse_list(s: &str) -> Result<Self> {
        super::parse_label_list(s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::LABELS
            .iter()
            .find(|(_, label)| *label == s)
            .map(|(role, _)| *role)
            .ok_or_else(|| FlagError::UnknownLabel(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub roles: Role,
}

impl User {
    pub fn new(name: String, roles: Role) -> Self {
        Self { name, roles }
    }

    /// True if any bit of `role` is held. Always false for `Role::NONE`.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.intersects(role)
    }

    pub fn assign_role(&mut self, role: Role) {
        self.roles.insert(role);
        tracing::trace!(user = %self.name, role = %role, roles = self.roles.bits(), "role assigned");
    }

    pub fn revoke_role(&mut self, role: Role) {
        self.roles.remove(role);
        tracing::trace!(user = %self.name, role = %role, roles = self.roles.bits(), "role revoked");
    }
}
