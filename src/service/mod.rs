//! The channel service boundary: one async method per snapshot operation.
//!
//! The production implementation (`PeerChannel`) shells out to the Fabric
//! `peer` binary; tests substitute their own implementations to observe calls.

mod peer;

pub use peer::*;

use crate::error::Result;
use crate::models::{
    CancelRequest, JoinRequest, ListPendingRequest, ServiceResult, SubmitRequest,
};

/// Executes snapshot operations against a channel. Each method performs
/// exactly one external action and suspends until it completes.
pub trait ChannelService {
    async fn submit_snapshot_request(&self, req: SubmitRequest) -> Result<ServiceResult>;
    async fn list_pending_snapshots(&self, req: ListPendingRequest) -> Result<ServiceResult>;
    async fn cancel_snapshot_request(&self, req: CancelRequest) -> Result<ServiceResult>;
    async fn join_by_snapshot(&self, req: JoinRequest) -> Result<ServiceResult>;
}
