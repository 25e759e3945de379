//! Whitelist administration and resolution

mod common;

use charter_core::{Address, CharterError, LicenseTermsId, LicensingHookFact};
use charter_hooks::{AccessGate, LicensingHook, WhitelistMatch};
use common::{registration, setup};

#[tokio::test]
async fn owner_whitelists_then_duplicate_is_rejected() {
    let (world, hook) = setup();
    let scope = world.scope();

    hook.add_to_whitelist(world.owner, &scope, world.child_c1, world.bob)
        .await
        .unwrap();
    assert_eq!(
        world.effects.facts.last(),
        Some(LicensingHookFact::address_whitelisted(
            &scope,
            world.child_c1,
            world.bob
        ))
    );
    assert!(hook
        .is_whitelisted(&scope, world.child_c1, world.bob)
        .await
        .unwrap());

    let err = hook
        .add_to_whitelist(world.owner, &scope, world.child_c1, world.bob)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CharterError::AddressAlreadyWhitelisted {
            child_ip: world.child_c1,
            minter: world.bob,
        }
    );
    assert_eq!(world.effects.facts.len(), 1);
}

#[tokio::test]
async fn remove_from_whitelist() {
    let (world, hook) = setup();
    let scope = world.scope();

    let err = hook
        .remove_from_whitelist(world.owner, &scope, world.child_c1, world.bob)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CharterError::AddressNotInWhitelist {
            child_ip: world.child_c1,
            minter: world.bob,
        }
    );

    hook.add_to_whitelist(world.owner, &scope, world.child_c1, world.bob)
        .await
        .unwrap();
    hook.remove_from_whitelist(world.owner, &scope, world.child_c1, world.bob)
        .await
        .unwrap();
    assert!(!hook
        .is_whitelisted(&scope, world.child_c1, world.bob)
        .await
        .unwrap());
    assert_eq!(
        world.effects.facts.last(),
        Some(LicensingHookFact::address_removed(
            &scope,
            world.child_c1,
            world.bob
        ))
    );
}

#[tokio::test]
async fn strangers_cannot_administer() {
    let (world, hook) = setup();
    let err = hook
        .add_to_whitelist(world.mallory, &world.scope(), world.child_c1, world.mallory)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CharterError::NotOwnerOrDelegate {
            caller: world.mallory,
            owner: world.owner,
        }
    );
    assert!(world.effects.facts.is_empty());
    assert!(world.effects.storage.is_empty().await);
}

#[tokio::test]
async fn whitelist_requires_attached_license() {
    let (world, hook) = setup();
    world
        .effects
        .registry
        .detach_license(world.parent, world.template, world.t100);

    assert!(matches!(
        hook.add_to_whitelist(world.owner, &world.scope(), world.child_c1, world.bob)
            .await,
        Err(CharterError::LicenseNotAttached { .. })
    ));
}

#[tokio::test]
async fn entries_are_isolated_per_terms() {
    let (world, hook) = setup();

    hook.add_to_whitelist(world.owner, &world.scope(), world.child_c1, world.bob)
        .await
        .unwrap();

    assert!(!hook
        .is_whitelisted(&world.scope_t200(), world.child_c1, world.bob)
        .await
        .unwrap());
    let err = hook
        .before_register_derivative(&registration(
            world.bob,
            world.child_c1,
            &world.scope_t200(),
        ))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CharterError::AddressNotWhitelisted {
            child_ip: world.child_c1,
            minter: world.bob,
        }
    );
}

#[tokio::test]
async fn wildcard_admits_any_minter_and_survives_specific_entries() {
    let (world, hook) = setup();
    let scope = world.scope();

    hook.add_to_whitelist(world.owner, &scope, world.child_c1, Address::ZERO)
        .await
        .unwrap();
    for minter in [world.bob, world.carol, world.mallory] {
        let fee = hook
            .before_register_derivative(&registration(minter, world.child_c1, &scope))
            .await
            .unwrap();
        assert_eq!(fee, 100);
    }

    hook.add_to_whitelist(world.owner, &scope, world.child_c1, world.bob)
        .await
        .unwrap();
    hook.remove_from_whitelist(world.owner, &scope, world.child_c1, world.bob)
        .await
        .unwrap();

    assert!(hook
        .before_register_derivative(&registration(world.carol, world.child_c1, &scope))
        .await
        .is_ok());
    // The wildcard covers only its own child IP.
    assert!(hook
        .before_register_derivative(&registration(world.carol, world.child_c2, &scope))
        .await
        .is_err());
}

#[tokio::test]
async fn is_whitelisted_does_not_apply_the_wildcard() {
    let (world, hook) = setup();
    let scope = world.scope();
    hook.add_to_whitelist(world.owner, &scope, world.child_c1, Address::ZERO)
        .await
        .unwrap();

    assert!(hook
        .is_whitelisted(&scope, world.child_c1, Address::ZERO)
        .await
        .unwrap());
    assert!(!hook
        .is_whitelisted(&scope, world.child_c1, world.bob)
        .await
        .unwrap());
}

#[tokio::test]
async fn gate_reports_which_entry_matched() {
    let (world, hook) = setup();
    let scope = world.scope();
    hook.add_to_whitelist(world.owner, &scope, world.child_c1, world.bob)
        .await
        .unwrap();
    hook.add_to_whitelist(world.owner, &scope, world.child_c1, Address::ZERO)
        .await
        .unwrap();

    let gate = AccessGate::new(&world.effects, &hook.config().storage_namespace);
    assert_eq!(
        gate.check_whitelist(&scope, world.child_c1, world.bob)
            .await
            .unwrap(),
        WhitelistMatch::Specific
    );
    assert_eq!(
        gate.check_whitelist(&scope, world.child_c1, world.carol)
            .await
            .unwrap(),
        WhitelistMatch::Wildcard
    );
}

#[tokio::test]
async fn delegate_administers_until_removed() {
    let (world, hook) = setup();
    let scope = world.scope();

    hook.add_delegate(world.owner, &scope, world.dave).await.unwrap();
    hook.add_to_whitelist(world.dave, &scope, world.child_c1, world.bob)
        .await
        .unwrap();
    hook.remove_from_whitelist(world.dave, &scope, world.child_c1, world.bob)
        .await
        .unwrap();

    hook.remove_delegate(world.owner, &scope, world.dave)
        .await
        .unwrap();
    let err = hook
        .add_to_whitelist(world.dave, &scope, world.child_c1, world.bob)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CharterError::NotOwnerOrDelegate {
            caller: world.dave,
            owner: world.owner,
        }
    );
}

#[tokio::test]
async fn delegate_standing_does_not_cross_terms() {
    let (world, hook) = setup();
    hook.add_delegate(world.owner, &world.scope(), world.dave)
        .await
        .unwrap();

    let other = world.scope().with_terms(LicenseTermsId::new(200));
    assert!(matches!(
        hook.add_to_whitelist(world.dave, &other, world.child_c1, world.bob)
            .await,
        Err(CharterError::NotOwnerOrDelegate { .. })
    ));
}

#[tokio::test]
async fn removal_survives_license_detachment() {
    let (world, hook) = setup();
    let scope = world.scope();
    hook.add_to_whitelist(world.owner, &scope, world.child_c1, world.bob)
        .await
        .unwrap();

    world
        .effects
        .registry
        .detach_license(world.parent, world.template, world.t100);
    hook.remove_from_whitelist(world.owner, &scope, world.child_c1, world.bob)
        .await
        .unwrap();

    assert!(!hook
        .is_whitelisted(&scope, world.child_c1, world.bob)
        .await
        .unwrap());
    assert_eq!(
        world.effects.facts.last(),
        Some(LicensingHookFact::address_removed(
            &scope,
            world.child_c1,
            world.bob
        ))
    );
}
