//! Composite storage keys
//!
//! Both registries are boolean maps keyed by a tuple that begins with the
//! *resolved* owner of the parent IP. The owner is an input to every key
//! constructor rather than a stored field of the scope, so an ownership
//! change makes entries written under the previous owner unreachable.
//!
//! The storage key is the BLAKE3 digest of a domain-tagged, fixed-width
//! encoding of the tuple:
//!
//! ```text
//! delegate:  "charter.delegate.v1"  || owner || ip || template || terms_be64 || delegate
//! whitelist: "charter.whitelist.v1" || owner || ip || template || terms_be64 || child || minter
//! ```

use charter_core::hash::Hasher;
use charter_core::{Address, Hash32, IpId, LicenseScope, LicenseTemplate, LicenseTermsId};

const DELEGATE_DOMAIN: &[u8] = b"charter.delegate.v1";
const WHITELIST_DOMAIN: &[u8] = b"charter.whitelist.v1";

/// Key of a delegate entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DelegateKey {
    /// Owner of the parent IP when the key was built
    pub owner: Address,
    /// Parent IP
    pub ip_id: IpId,
    /// License template
    pub license_template: LicenseTemplate,
    /// License terms
    pub license_terms_id: LicenseTermsId,
    /// Delegate address
    pub delegate: Address,
}

impl DelegateKey {
    /// Build a key for `delegate` under `scope` as owned by `owner`
    pub fn new(owner: Address, scope: &LicenseScope, delegate: Address) -> Self {
        Self {
            owner,
            ip_id: scope.ip_id,
            license_template: scope.license_template,
            license_terms_id: scope.license_terms_id,
            delegate,
        }
    }

    /// Deterministic digest of the key tuple
    pub fn digest(&self) -> Hash32 {
        let mut hasher = Hasher::new();
        hasher.update(DELEGATE_DOMAIN);
        hash_scope(
            &mut hasher,
            &self.owner,
            &self.ip_id,
            &self.license_template,
            self.license_terms_id,
        );
        hasher.update(self.delegate.as_bytes());
        hasher.finalize()
    }

    /// Storage key under `namespace`
    pub fn storage_key(&self, namespace: &str) -> String {
        format!("{namespace}/delegates/{}", self.digest().to_hex())
    }
}

/// Key of a whitelist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WhitelistKey {
    /// Owner of the parent IP when the key was built
    pub owner: Address,
    /// Parent IP
    pub ip_id: IpId,
    /// License template
    pub license_template: LicenseTemplate,
    /// License terms
    pub license_terms_id: LicenseTermsId,
    /// Child IP to be registered
    pub child_ip: IpId,
    /// Permitted minter, zero for any caller
    pub minter: Address,
}

impl WhitelistKey {
    /// Build a key for (`child_ip`, `minter`) under `scope` as owned by `owner`
    pub fn new(owner: Address, scope: &LicenseScope, child_ip: IpId, minter: Address) -> Self {
        Self {
            owner,
            ip_id: scope.ip_id,
            license_template: scope.license_template,
            license_terms_id: scope.license_terms_id,
            child_ip,
            minter,
        }
    }

    /// The wildcard entry for the same scope and child IP
    pub fn wildcard(&self) -> Self {
        Self {
            minter: Address::ZERO,
            ..*self
        }
    }

    /// Whether this key names the wildcard entry
    pub fn is_wildcard(&self) -> bool {
        self.minter.is_zero()
    }

    /// Deterministic digest of the key tuple
    pub fn digest(&self) -> Hash32 {
        let mut hasher = Hasher::new();
        hasher.update(WHITELIST_DOMAIN);
        hash_scope(
            &mut hasher,
            &self.owner,
            &self.ip_id,
            &self.license_template,
            self.license_terms_id,
        );
        hasher
            .update(self.child_ip.address().as_bytes())
            .update(self.minter.as_bytes());
        hasher.finalize()
    }

    /// Storage key under `namespace`
    pub fn storage_key(&self, namespace: &str) -> String {
        format!("{namespace}/whitelist/{}", self.digest().to_hex())
    }
}

fn hash_scope(
    hasher: &mut Hasher,
    owner: &Address,
    ip_id: &IpId,
    license_template: &LicenseTemplate,
    license_terms_id: LicenseTermsId,
) {
    hasher
        .update(owner.as_bytes())
        .update(ip_id.address().as_bytes())
        .update(license_template.address().as_bytes())
        .update(&license_terms_id.value().to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(label: &str) -> Address {
        Address::from_label(label.as_bytes())
    }

    fn scope() -> LicenseScope {
        LicenseScope::new(
            IpId::new(addr("parent")),
            LicenseTemplate::new(addr("pil")),
            LicenseTermsId::new(100),
        )
    }

    fn base() -> WhitelistKey {
        WhitelistKey::new(addr("owner"), &scope(), IpId::new(addr("child")), addr("bob"))
    }

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(base().digest(), base().digest());
        assert_eq!(base().storage_key("charter"), base().storage_key("charter"));
    }

    #[test]
    fn test_every_component_changes_the_digest() {
        let base = base();
        let variants = [
            WhitelistKey {
                owner: addr("other-owner"),
                ..base
            },
            WhitelistKey {
                ip_id: IpId::new(addr("other-parent")),
                ..base
            },
            WhitelistKey {
                license_template: LicenseTemplate::new(addr("other-template")),
                ..base
            },
            WhitelistKey {
                license_terms_id: LicenseTermsId::new(101),
                ..base
            },
            WhitelistKey {
                child_ip: IpId::new(addr("other-child")),
                ..base
            },
            base.wildcard(),
        ];
        for variant in variants {
            assert_ne!(variant.digest(), base.digest(), "{variant:?}");
        }
    }

    #[test]
    fn test_delegate_and_whitelist_domains_are_separated() {
        // Same leading tuple; the domain tag keeps the digests apart.
        let delegate = DelegateKey::new(addr("owner"), &scope(), addr("bob"));
        assert_ne!(delegate.digest(), base().digest());
        assert!(delegate.storage_key("ns").starts_with("ns/delegates/"));
        assert!(base().storage_key("ns").starts_with("ns/whitelist/"));
    }

    #[test]
    fn test_wildcard() {
        let wildcard = base().wildcard();
        assert!(wildcard.is_wildcard());
        assert!(!base().is_wildcard());
        assert_eq!(wildcard.child_ip, base().child_ip);
    }
}
