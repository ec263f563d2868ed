use std::env;

/// One allow-listed administrator: an email plus a bcrypt hash of the
/// password. Plaintext passwords are never accepted here.
#[derive(Clone, Debug)]
pub struct AdminCredential {
    pub email: String,
    pub password_hash: String,
}

/// The admin allow-list. Admins have no database table; the list loaded at
/// startup is the complete set of admin identities. An empty list means
/// admin login is disabled.
#[derive(Clone, Debug, Default)]
pub struct AdminConfig {
    pub admins: Vec<AdminCredential>,
}

impl AdminConfig {
    /// `ADMIN_ALLOWLIST` holds comma-separated `email:bcrypt-hash` pairs,
    /// e.g. `principal@school.edu:$2b$12$...,bursar@school.edu:$2b$12$...`.
    pub fn from_env() -> Self {
        let raw = env::var("ADMIN_ALLOWLIST").unwrap_or_default();
        Self {
            admins: parse_allowlist(&raw),
        }
    }

    /// Look up an allow-list entry by email, case-insensitively.
    pub fn find(&self, email: &str) -> Option<&AdminCredential> {
        self.admins
            .iter()
            .find(|admin| admin.email.eq_ignore_ascii_case(email))
    }

    pub fn is_allowlisted(&self, email: &str) -> bool {
        self.find(email).is_some()
    }
}

fn parse_allowlist(raw: &str) -> Vec<AdminCredential> {
    raw.split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            let (email, hash) = entry.split_once(':')?;
            if email.is_empty() || hash.is_empty() {
                return None;
            }
            Some(AdminCredential {
                email: email.to_string(),
                password_hash: hash.to_string(),
            })
        })
        .collect()
}
