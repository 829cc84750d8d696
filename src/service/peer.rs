//! Channel service backed by the Hyperledger Fabric `peer` binary.
//!
//! Every operation maps to one `peer channel ...` invocation. The subprocess
//! inherits the peer connection environment from the configuration, its output
//! is captured, and the whole call is bounded by the configured timeout.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    CancelRequest, JoinRequest, ListPendingRequest, ServiceResult, SubmitRequest,
};
use crate::service::ChannelService;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, error, info};

/// Channel service that executes snapshot operations via the `peer` CLI.
pub struct PeerChannel {
    config: Config,
}

impl PeerChannel {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Builds the `peer` argument vector for one request.
    ///
    /// Kept separate from process spawning so argv construction is testable
    /// without a peer binary on PATH.
    fn peer_args(req: &crate::models::OperationRequest) -> Vec<String> {
        use crate::models::OperationRequest::*;
        match req {
            Submit(r) => vec![
                "channel".into(),
                "snapshot".into(),
                "submitrequest".into(),
                "--channelID".into(),
                r.channel_name.clone(),
                "--blockNumber".into(),
                r.block_number.to_string(),
            ],
            ListPending(r) => vec![
                "channel".into(),
                "snapshot".into(),
                "listpending".into(),
                "--channelID".into(),
                r.channel_name.clone(),
            ],
            Cancel(r) => vec![
                "channel".into(),
                "snapshot".into(),
                "cancelrequest".into(),
                "--channelID".into(),
                r.channel_name.clone(),
                "--blockNumber".into(),
                r.block_number.to_string(),
            ],
            Join(r) => vec![
                "channel".into(),
                "joinbysnapshot".into(),
                r.snapshot_path.clone(),
            ],
        }
    }

    /// Runs one peer invocation and normalizes its outcome.
    async fn invoke(&self, req: crate::models::OperationRequest) -> Result<ServiceResult> {
        let args = Self::peer_args(&req);
        info!("Invoking {} {}", self.config.peer_bin, args.join(" "));

        let mut command = Command::new(&self.config.peer_bin);
        command.args(&args);
        // A timed-out invocation drops the output future; without this the
        // child would keep running and could still land a state-changing
        // request after the operator was told the call failed.
        command.kill_on_drop(true);
        if let Some(address) = &self.config.core_peer_address {
            command.env("CORE_PEER_ADDRESS", address);
        }
        if let Some(msp_id) = &self.config.msp_id {
            command.env("CORE_PEER_LOCALMSPID", msp_id);
        }
        if let Some(msp_path) = &self.config.msp_config_path {
            command.env("CORE_PEER_MSPCONFIGPATH", msp_path);
        }

        let timeout_secs = self.config.service_timeout_secs;
        let output = tokio::time::timeout(Duration::from_secs(timeout_secs), command.output())
            .await
            .map_err(|_| {
                error!("peer invocation exceeded {}s timeout", timeout_secs);
                AppError::Timeout(timeout_secs)
            })?
            .map_err(|e| {
                error!("failed to spawn {}: {}", self.config.peer_bin, e);
                AppError::Service(format!("cannot run {}: {}", self.config.peer_bin, e))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            error!(
                "peer exited with {}: {}",
                output.status,
                stderr.trim_end()
            );
            let detail = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(AppError::Service(format!(
                "peer exited with {}: {}",
                output.status, detail
            )));
        }

        debug!("peer produced {} bytes of output", stdout.len());
        if stdout.is_empty() {
            Ok(ServiceResult::default())
        } else {
            Ok(ServiceResult::with_output(stdout))
        }
    }
}

impl ChannelService for PeerChannel {
    async fn submit_snapshot_request(&self, req: SubmitRequest) -> Result<ServiceResult> {
        self.invoke(crate::models::OperationRequest::Submit(req)).await
    }

    async fn list_pending_snapshots(&self, req: ListPendingRequest) -> Result<ServiceResult> {
        self.invoke(crate::models::OperationRequest::ListPending(req)).await
    }

    async fn cancel_snapshot_request(&self, req: CancelRequest) -> Result<ServiceResult> {
        self.invoke(crate::models::OperationRequest::Cancel(req)).await
    }

    async fn join_by_snapshot(&self, req: JoinRequest) -> Result<ServiceResult> {
        self.invoke(crate::models::OperationRequest::Join(req)).await
    }
}
