use strum::Display;

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum Permission {
    FineLocation,
    CoarseLocation,
}

/// Requested together, and both have to be granted.
pub const LOCATION: [Permission; 2] = [Permission::FineLocation, Permission::CoarseLocation];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Grant {
    pub permission: Permission,
    pub granted: bool,
}

impl Grant {
    #[cfg(test)]
    pub fn new(permission: Permission, granted: bool) -> Self {
        Grant {
            permission,
            granted,
        }
    }
}

/// Every location permission has to be answered with a grant. A partial or
/// empty result (a cancelled dialog) is a denial.
pub fn all_granted(grants: &[Grant]) -> bool {
    LOCATION
        .iter()
        .all(|p| grants.iter().any(|it| it.permission == *p && it.granted))
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Rationale {
    pub title: String,
    pub message: String,
}

impl Default for Rationale {
    fn default() -> Self {
        Rationale {
            title: "Why the Location".into(),
            message: "The Location permission is required to show your position on the map"
                .into(),
        }
    }
}

/// Platform permission dialogs. Answers to `request` come back to the
/// session as a single `Event::PermissionsResult`.
pub trait PermissionGate {
    fn check_granted(&self, permissions: &[Permission]) -> bool;

    fn should_show_rationale(&self, permission: Permission) -> bool;

    /// With a rationale, the platform shows it first and requests once the
    /// user closes it.
    fn request(&mut self, permissions: &[Permission], rationale: Option<&Rationale>);
}

/// For hosts without permission dialogs, such as the CLI.
pub struct GrantedGate;

impl PermissionGate for GrantedGate {
    fn check_granted(&self, _permissions: &[Permission]) -> bool {
        true
    }

    fn should_show_rationale(&self, _permission: Permission) -> bool {
        false
    }

    fn request(&mut self, _permissions: &[Permission], _rationale: Option<&Rationale>) {}
}
