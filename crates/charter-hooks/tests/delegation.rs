//! Delegate administration through the licensing hook

mod common;

use assert_matches::assert_matches;
use charter_core::{CharterError, LicenseTermsId, LicensingHookFact};
use common::setup;

#[tokio::test]
async fn add_then_remove_toggles_is_delegate() {
    let (world, hook) = setup();
    let scope = world.scope();

    assert!(!hook.is_delegate(&scope, world.dave).await.unwrap());
    hook.add_delegate(world.owner, &scope, world.dave).await.unwrap();
    assert!(hook.is_delegate(&scope, world.dave).await.unwrap());

    hook.remove_delegate(world.owner, &scope, world.dave)
        .await
        .unwrap();
    assert!(!hook.is_delegate(&scope, world.dave).await.unwrap());
}

#[tokio::test]
async fn duplicate_add_is_rejected() {
    let (world, hook) = setup();
    let scope = world.scope();

    hook.add_delegate(world.owner, &scope, world.dave).await.unwrap();
    let err = hook
        .add_delegate(world.owner, &scope, world.dave)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CharterError::DelegateAlreadyAdded {
            ip_id: world.parent,
            delegate: world.dave,
        }
    );
}

#[tokio::test]
async fn removing_absent_delegate_is_rejected() {
    let (world, hook) = setup();
    let err = hook
        .remove_delegate(world.owner, &world.scope(), world.dave)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CharterError::DelegateNotFound {
            ip_id: world.parent,
            delegate: world.dave,
        }
    );
}

#[tokio::test]
async fn add_requires_attached_license() {
    let (world, hook) = setup();
    let detached = world.scope().with_terms(LicenseTermsId::new(999));

    let err = hook
        .add_delegate(world.owner, &detached, world.dave)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CharterError::LicenseNotAttached {
            ip_id: world.parent,
            license_template: world.template,
            license_terms_id: LicenseTermsId::new(999),
        }
    );
    assert!(!hook.is_delegate(&detached, world.dave).await.unwrap());
}

#[tokio::test]
async fn delegates_cannot_appoint_or_remove_delegates() {
    let (world, hook) = setup();
    let scope = world.scope();
    hook.add_delegate(world.owner, &scope, world.dave).await.unwrap();

    assert_matches!(
        hook.add_delegate(world.dave, &scope, world.carol).await,
        Err(CharterError::PermissionDenied { caller, .. }) if caller == world.dave
    );
    assert_matches!(
        hook.remove_delegate(world.dave, &scope, world.dave).await,
        Err(CharterError::PermissionDenied { .. })
    );
    assert!(hook.is_delegate(&scope, world.dave).await.unwrap());
    assert!(!hook.is_delegate(&scope, world.carol).await.unwrap());
}

#[tokio::test]
async fn delegates_are_isolated_per_terms() {
    let (world, hook) = setup();
    hook.add_delegate(world.owner, &world.scope(), world.dave)
        .await
        .unwrap();

    assert!(!hook
        .is_delegate(&world.scope_t200(), world.dave)
        .await
        .unwrap());
}

#[tokio::test]
async fn committed_changes_emit_facts_in_order() {
    let (world, hook) = setup();
    let scope = world.scope();

    hook.add_delegate(world.owner, &scope, world.dave).await.unwrap();
    let _ = hook.add_delegate(world.owner, &scope, world.dave).await;
    hook.remove_delegate(world.owner, &scope, world.dave)
        .await
        .unwrap();

    assert_eq!(
        world.effects.facts.facts(),
        vec![
            LicensingHookFact::delegate_added(&scope, world.dave),
            LicensingHookFact::delegate_removed(&scope, world.dave),
        ]
    );
}

#[tokio::test]
async fn removal_survives_license_detachment() {
    let (world, hook) = setup();
    let scope = world.scope();
    hook.add_delegate(world.owner, &scope, world.dave).await.unwrap();

    world
        .effects
        .registry
        .detach_license(world.parent, world.template, world.t100);
    hook.remove_delegate(world.owner, &scope, world.dave)
        .await
        .unwrap();

    assert!(!hook.is_delegate(&scope, world.dave).await.unwrap());
    assert_eq!(
        world.effects.facts.last(),
        Some(LicensingHookFact::delegate_removed(&scope, world.dave))
    );
}
