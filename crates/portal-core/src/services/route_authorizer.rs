// ============================================================================
// Portal Core - Route Authorizer
// File: crates/portal-core/src/services/route_authorizer.rs
// ============================================================================
//! Render / redirect / loading decision for one route and one session.

use portal_shared::constants::{
    HIRE_ACCOUNT_INACTIVE_PATH, HIRE_ACCOUNT_PENDING_PATH, HOME_PATH, LOGIN_PATH,
    SELLER_ACCOUNT_DEACTIVE_PATH, SELLER_ACCOUNT_PENDING_PATH,
};
use tracing::debug;

use crate::domain::{AccessDecision, Ability, AccountStatus, Role, RouteDescriptor, SessionState};

/// Decides whether `route` renders for `session`.
///
/// Rules are checked in order and the first match wins: loading, missing
/// role, fixed `role` (then `status`, then `visibility`), `ability`, and
/// finally "any authenticated session".
pub fn authorize(route: &RouteDescriptor, session: &SessionState) -> AccessDecision {
    let session = match session {
        SessionState::Loading => return AccessDecision::ShowLoading,
        SessionState::Ready(session) => session,
    };

    let role = match &session.role {
        Some(role) => role,
        None => return AccessDecision::redirect(LOGIN_PATH),
    };

    if let Some(required) = &route.role {
        if role != required {
            debug!("Route requires role {}, session has {}", required, role);
            return AccessDecision::redirect(HOME_PATH);
        }

        if let Some(expected) = &route.status {
            let Some(status) = &session.status else {
                return AccessDecision::redirect(HOME_PATH);
            };
            if status == expected {
                return AccessDecision::Render;
            }
            return AccessDecision::redirect(status_mismatch_target(role, status));
        }

        if let Some(accepted) = &route.visibility {
            let Some(status) = &session.status else {
                return AccessDecision::redirect(HOME_PATH);
            };
            if accepted.contains(status) {
                return AccessDecision::Render;
            }
            return AccessDecision::redirect(visibility_mismatch_target(role));
        }

        return AccessDecision::Render;
    }

    if let Some(ability) = &route.ability {
        let allowed = match ability {
            Ability::One(required) => {
                matches!(required, Role::Seller | Role::HireUser | Role::Admin) && required == role
            }
            Ability::AnyOf(roles) => roles.contains(role),
        };
        return if allowed {
            AccessDecision::Render
        } else {
            AccessDecision::redirect(HOME_PATH)
        };
    }

    AccessDecision::Render
}

fn status_mismatch_target(role: &Role, status: &AccountStatus) -> &'static str {
    match (role, status) {
        (Role::Seller, AccountStatus::Pending) => SELLER_ACCOUNT_PENDING_PATH,
        (Role::Seller, _) => SELLER_ACCOUNT_DEACTIVE_PATH,
        (Role::HireUser, AccountStatus::Pending) => HIRE_ACCOUNT_PENDING_PATH,
        (Role::HireUser, AccountStatus::Inactive) => HIRE_ACCOUNT_INACTIVE_PATH,
        _ => HOME_PATH,
    }
}

fn visibility_mismatch_target(role: &Role) -> &'static str {
    match role {
        Role::Seller => SELLER_ACCOUNT_PENDING_PATH,
        Role::HireUser => HIRE_ACCOUNT_PENDING_PATH,
        _ => HOME_PATH,
    }
}
