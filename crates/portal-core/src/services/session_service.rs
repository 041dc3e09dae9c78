// ============================================================================
// Portal Core - Session Service
// File: crates/portal-core/src/services/session_service.rs
// ============================================================================
//! Builds the caller's session from a bearer token and the account store.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use portal_security::{JwtError, TokenService};

use crate::domain::{Role, Session, SessionState};
use crate::repositories::AccountRepository;

pub struct SessionService<A: AccountRepository + ?Sized> {
    accounts: Arc<A>,
    tokens: Arc<TokenService>,
}

impl<A: AccountRepository + ?Sized> SessionService<A> {
    pub fn new(accounts: Arc<A>, tokens: Arc<TokenService>) -> Self {
        Self { accounts, tokens }
    }

    /// Resolves the session for an optional bearer token.
    ///
    /// Missing, invalid and expired tokens all yield an anonymous session.
    /// A failing account store yields [`SessionState::Loading`]: the role is
    /// known but status and permissions are not.
    pub async fn resolve(&self, bearer: Option<&str>) -> SessionState {
        let Some(token) = bearer else {
            return Session::anonymous().into();
        };

        let claims = match self.tokens.decode_access_token(token) {
            Ok(claims) => claims,
            Err(JwtError::TokenExpired) => {
                info!("Access token expired; session treated as logged out");
                return Session::anonymous().into();
            }
            Err(e) => {
                warn!("Rejected access token: {}", e);
                return Session::anonymous().into();
            }
        };

        let Some(role) = Role::parse(&claims.role) else {
            debug!("Token for {} carries no role", claims.sub);
            return Session::anonymous().into();
        };

        match self.accounts.find_profile(&claims.sub).await {
            Ok(Some(profile)) => Session::new(role).with_profile(profile).into(),
            Ok(None) => {
                warn!("No account profile for subject {}", claims.sub);
                Session::new(role).into()
            }
            Err(e) => {
                error!("Failed to load account profile for {}: {}", claims.sub, e);
                SessionState::Loading
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountProfile, AccountStatus};
    use crate::error::DomainError;
    use crate::repositories::MockAccountRepository;

    const SECRET: &str = "session-test-secret";

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new(SECRET, 900, 0))
    }

    fn service(repo: MockAccountRepository) -> SessionService<MockAccountRepository> {
        SessionService::new(Arc::new(repo), tokens())
    }

    #[tokio::test]
    async fn test_no_token_is_anonymous() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_profile().never();

        let state = service(repo).resolve(None).await;
        assert_eq!(state, SessionState::Ready(Session::anonymous()));
    }

    #[tokio::test]
    async fn test_invalid_and_expired_tokens_are_anonymous() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_profile().never();
        let service = service(repo);

        let expired = tokens().issue_with_expiry("seller-1", "seller", -60).unwrap();
        assert_eq!(
            service.resolve(Some(&expired)).await,
            SessionState::Ready(Session::anonymous())
        );
        assert_eq!(
            service.resolve(Some("garbage")).await,
            SessionState::Ready(Session::anonymous())
        );
    }

    #[tokio::test]
    async fn test_profile_merged_into_session() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_profile()
            .withf(|subject| subject == "seller-1")
            .times(1)
            .returning(|_| {
                Ok(Some(AccountProfile {
                    status: Some(AccountStatus::Active),
                    permissions: ["product.all"].into_iter().collect(),
                }))
            });

        let token = tokens().issue_access_token("seller-1", "seller").unwrap();
        let state = service(repo).resolve(Some(&token)).await;

        let session = state.session().unwrap();
        assert_eq!(session.role, Some(Role::Seller));
        assert_eq!(session.status, Some(AccountStatus::Active));
        assert!(session.permissions.contains("product.all"));
    }

    #[tokio::test]
    async fn test_missing_profile_keeps_role() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_profile().returning(|_| Ok(None));

        let token = tokens().issue_access_token("hire-7", "hireUser").unwrap();
        let state = service(repo).resolve(Some(&token)).await;

        assert_eq!(state, SessionState::Ready(Session::new(Role::HireUser)));
    }

    #[tokio::test]
    async fn test_store_failure_is_loading() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_profile()
            .returning(|_| Err(DomainError::DatabaseError("connection refused".to_string())));

        let token = tokens().issue_access_token("admin-1", "admin").unwrap();
        assert_eq!(service(repo).resolve(Some(&token)).await, SessionState::Loading);
    }

    #[tokio::test]
    async fn test_blank_role_is_anonymous() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_profile().never();

        let token = tokens().issue_access_token("ghost", "").unwrap();
        assert_eq!(
            service(repo).resolve(Some(&token)).await,
            SessionState::Ready(Session::anonymous())
        );
    }
}
