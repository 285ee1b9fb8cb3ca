//! Session-related types
//!
//! A session is nothing more than the presence of an account name in the
//! ledger's session table. Logging in only requires a known account name;
//! there is no secret, token or expiry.

use super::account::AccountName;

/// How the identity behind a session was established
///
/// The ledger never verifies a credential. This is carried in every
/// [`SessionInfo`] so callers cannot mistake a session for proof of identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialCheck {
    /// Only the account name was checked against the roster
    NotPerformed,
}

/// Public identity returned by a successful authenticate
///
/// Deliberately excludes the balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// The account that now has an active session
    pub account: AccountName,

    /// Credential verification performed for this session
    pub credential_check: CredentialCheck,
}

impl SessionInfo {
    pub(crate) fn unverified(account: &str) -> Self {
        SessionInfo {
            account: account.to_string(),
            credential_check: CredentialCheck::NotPerformed,
        }
    }
}
