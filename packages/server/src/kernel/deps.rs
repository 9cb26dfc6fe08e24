//! Server dependencies for handlers (using traits for testability)
//!
//! This module provides the central dependency container injected into every
//! request handler. The store is a trait object so tests and deployments can
//! swap backends without touching the domains.

use std::sync::Arc;

use crate::domains::auth::{AuthGuards, IdentityVerifier, JwtService, RoleAuthority};
use crate::domains::booking::BookingEngine;
use crate::domains::doctors::DoctorDirectory;
use crate::domains::users::UserDirectory;
use crate::kernel::store::DocumentStore;

/// Server dependencies accessible to handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn DocumentStore>,
    /// JWT service for credential creation
    pub jwt_service: Arc<JwtService>,
    /// Guard chain evaluated at the top of protected handlers
    pub guards: AuthGuards,
    pub roles: RoleAuthority,
    pub users: UserDirectory,
    pub doctors: DoctorDirectory,
    pub bookings: BookingEngine,
}

impl ServerDeps {
    /// Wire the dependency graph over one store and one credential service
    pub fn new(store: Arc<dyn DocumentStore>, jwt_service: Arc<JwtService>) -> Self {
        let roles = RoleAuthority::new(store.clone());
        let guards = AuthGuards::new(IdentityVerifier::new(jwt_service.clone()), roles.clone());

        Self {
            guards,
            roles,
            users: UserDirectory::new(store.clone(), jwt_service.clone()),
            doctors: DoctorDirectory::new(store.clone()),
            bookings: BookingEngine::new(store.clone()),
            jwt_service,
            store,
        }
    }
}
