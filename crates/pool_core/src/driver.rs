//! Driver console: a queue of incoming ride requests and the pool currently
//! being driven.
//!
//! Every state change replaces the active pool with a new value; pools handed
//! out earlier (e.g. already persisted) are never modified. Callers that
//! persist pools are expected to rewrite the stored roster after
//! [`DriverConsole::remove_member`].

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::allocator::PoolAllocator;
use crate::ids::{new_id, IdKind};
use crate::model::{MatchRequest, Pool, Provider};

/// How many queued requests the console shows at once.
pub const VISIBLE_REQUESTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideRequest {
    pub id: String,
    pub college_name: String,
    pub destination: String,
    pub provider: Provider,
    pub female_only: bool,
}

impl RideRequest {
    pub fn new<R: Rng + ?Sized>(
        college_name: impl Into<String>,
        destination: impl Into<String>,
        provider: Provider,
        female_only: bool,
        rng: &mut R,
    ) -> Self {
        Self {
            id: new_id(IdKind::Request, rng),
            college_name: college_name.into(),
            destination: destination.into(),
            provider,
            female_only,
        }
    }

    /// The match request a driver accept turns into: a party of one with no
    /// requester identity attached.
    pub fn to_match_request(&self) -> MatchRequest {
        MatchRequest::new(&*self.college_name, &*self.destination, self.provider)
            .with_female_only(self.female_only)
            .with_party_size(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    #[error("driver is offline")]
    Offline,
    #[error("no queued request with id {0}")]
    UnknownRequest(String),
    #[error("no active pool")]
    NoActivePool,
    #[error("no member with id {0} in the active pool")]
    UnknownMember(String),
}

#[derive(Debug, Clone, Default)]
pub struct DriverConsole {
    online: bool,
    requests: Vec<RideRequest>,
    active_pool: Option<Pool>,
}

impl DriverConsole {
    pub fn new(requests: Vec<RideRequest>) -> Self {
        Self {
            online: false,
            requests,
            active_pool: None,
        }
    }

    /// Console pre-loaded with the three demo campus requests.
    pub fn with_demo_requests<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(vec![
            RideRequest::new("IIT Bombay", "Main Building", Provider::Uber, false, rng),
            RideRequest::new("St. Xavier's College", "Library", Provider::Ola, true, rng),
            RideRequest::new("HR College", "Main Gate", Provider::Uber, false, rng),
        ])
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn go_online(&mut self) {
        self.online = true;
    }

    pub fn go_offline(&mut self) {
        self.online = false;
    }

    pub fn visible_requests(&self) -> &[RideRequest] {
        &self.requests[..self.requests.len().min(VISIBLE_REQUESTS)]
    }

    pub fn active_pool(&self) -> Option<&Pool> {
        self.active_pool.as_ref()
    }

    /// Drop a request from the queue. Returns whether it was queued.
    pub fn skip(&mut self, request_id: &str) -> bool {
        let before = self.requests.len();
        self.requests.retain(|request| request.id != request_id);
        self.requests.len() != before
    }

    /// Accept a queued request: allocate a pool for it and make it active.
    pub fn accept(
        &mut self,
        request_id: &str,
        allocator: &mut PoolAllocator,
    ) -> Result<&Pool, DriverError> {
        if !self.online {
            return Err(DriverError::Offline);
        }
        let idx = self
            .requests
            .iter()
            .position(|request| request.id == request_id)
            .ok_or_else(|| DriverError::UnknownRequest(request_id.to_string()))?;

        let request = self.requests.remove(idx);
        let pool = allocator.allocate(&request.to_match_request());
        info!(request_id = %request.id, pool_id = %pool.id, "driver accepted request");

        let pool = self.active_pool.insert(pool);
        Ok(&*pool)
    }

    /// Evict a member (e.g. a no-show) from the active pool.
    pub fn remove_member(&mut self, member_id: &str) -> Result<&Pool, DriverError> {
        let current = self.active_pool.as_ref().ok_or(DriverError::NoActivePool)?;
        let updated = current
            .without_member(member_id)
            .ok_or_else(|| DriverError::UnknownMember(member_id.to_string()))?;
        info!(pool_id = %updated.id, member_id, "removed member from active pool");

        let updated = self.active_pool.insert(updated);
        Ok(&*updated)
    }

    /// Finish the active trip, returning the pool as it ended.
    pub fn end_trip(&mut self) -> Option<Pool> {
        self.active_pool.take()
    }
}
