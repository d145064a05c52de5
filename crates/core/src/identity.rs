//! Customer identity channels used for scoped cap evaluation.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::AccountId;

/// Normalized billing email address.
///
/// Stored trimmed and ASCII-lowercased so that the same mailbox written with
/// different casing matches the same historical orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_ascii_lowercase();
        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(DomainError::validation("email address must contain '@'"));
        };
        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::validation(
                "email address has an empty local or domain part",
            ));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Customer identity as seen by the enforcement engine.
///
/// Either channel may be missing. When both are, the customer is anonymous:
/// there is no history to aggregate against, and per-customer caps cannot be
/// enforced for that evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerIdentity {
    pub email: Option<EmailAddress>,
    pub account: Option<AccountId>,
}

impl CustomerIdentity {
    pub fn new(email: Option<EmailAddress>, account: Option<AccountId>) -> Self {
        Self { email, account }
    }

    /// Identity with neither channel present (guest without an email).
    pub fn anonymous() -> Self {
        Self {
            email: None,
            account: None,
        }
    }

    /// Guest checkout identity: reachable by billing email only.
    pub fn from_email(email: EmailAddress) -> Self {
        Self {
            email: Some(email),
            account: None,
        }
    }

    /// Logged-in identity without a known billing email.
    pub fn from_account(account: AccountId) -> Self {
        Self {
            email: None,
            account: Some(account),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.email.is_none() && self.account.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized_on_parse() {
        let email = EmailAddress::parse("  Jo.Doe@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "jo.doe@example.com");
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        assert!(EmailAddress::parse("not-an-email").is_err());
        assert!(EmailAddress::parse("@example.com").is_err());
        assert!(EmailAddress::parse("someone@").is_err());
    }

    #[test]
    fn identity_is_anonymous_only_when_both_channels_are_missing() {
        assert!(CustomerIdentity::anonymous().is_anonymous());
        assert!(!CustomerIdentity::from_email(EmailAddress::parse("a@b.c").unwrap()).is_anonymous());
        assert!(!CustomerIdentity::from_account(AccountId::new()).is_anonymous());
    }
}
