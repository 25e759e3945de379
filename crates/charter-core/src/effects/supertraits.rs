//! Supertraits for common effect combinations

use super::{
    FactEffects, LicenseRegistryEffects, LicenseTermsEffects, OwnershipEffects, StorageEffects,
};

/// Everything the licensing hook needs from its host
pub trait LicensingEffects:
    OwnershipEffects + LicenseRegistryEffects + LicenseTermsEffects + StorageEffects + FactEffects
{
}

impl<T> LicensingEffects for T where
    T: OwnershipEffects
        + LicenseRegistryEffects
        + LicenseTermsEffects
        + StorageEffects
        + FactEffects
{
}
