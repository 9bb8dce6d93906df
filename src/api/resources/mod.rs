//! Backend operations, grouped by resource.
//!
//! Each module adds an `impl RecruitingClient` block:
//! - `auth`: login, logout, session check, password reset
//! - `job_offers`: job offer CRUD
//! - `applications`: job applications and the external form hook
//! - `candidates`: candidate CRUD
//! - `interviews`: interview CRUD and interview comments
//! - `dashboard`: aggregate counters
//!
//! All operations delegate to the shared gateway and its error handling.

mod applications;
mod auth;
mod candidates;
mod dashboard;
mod interviews;
mod job_offers;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::api::{RecruitingClient, config::ClientConfig};
    use wiremock::MockServer;

    pub fn client_for(server: &MockServer) -> RecruitingClient {
        RecruitingClient::new(&ClientConfig::new(&server.uri())).unwrap()
    }
}
