use anchor_lang::prelude::*;

use super::CredentialRegistry;

/// Credential check in front of every claim.
pub struct EligibilityGate<R> {
    registry: R,
}

impl<R: CredentialRegistry> EligibilityGate<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Registry failures are returned as errors, never read as "no credential".
    pub fn holds_credential(&self, identity: &Pubkey) -> Result<bool> {
        Ok(self.registry.ownership_count(identity)? > 0)
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }
}
