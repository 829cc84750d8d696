//! Snapshot operation vocabulary.
//!
//! `Operation` is the closed set of actions the CLI knows about.
//! `OperationRequest` is the validated form: each variant carries exactly the
//! fields its operation requires, so a request missing a required field cannot
//! be constructed at all. Requests only come out of the dispatcher (flag mode)
//! or the prompt flow (interactive mode), both of which fill every field.

use clap::ValueEnum;

/// The four snapshot lifecycle actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Submit a snapshot request at a block height.
    Submit,
    /// List snapshot requests not yet completed or cancelled.
    #[value(alias = "listPending")]
    ListPending,
    /// Join the channel from an existing snapshot archive.
    Join,
    /// Cancel a previously submitted snapshot request.
    Cancel,
}

impl Operation {
    /// Human-readable label shown in the interactive operation menu.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Submit => "submitRequest",
            Operation::ListPending => "listPending",
            Operation::Join => "joinBySnapshot",
            Operation::Cancel => "cancelRequest",
        }
    }
}

/// Fields for submitting a snapshot request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub channel_name: String,
    pub block_number: u64,
}

/// Fields for listing pending snapshot requests on a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPendingRequest {
    pub channel_name: String,
}

/// Fields for cancelling a pending snapshot request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelRequest {
    pub channel_name: String,
    pub block_number: u64,
}

/// Fields for joining a channel from a snapshot archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRequest {
    pub snapshot_path: String,
}

/// One fully validated operation, ready for a single service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRequest {
    Submit(SubmitRequest),
    ListPending(ListPendingRequest),
    Cancel(CancelRequest),
    Join(JoinRequest),
}

impl OperationRequest {
    /// The operation tag this request belongs to.
    pub fn operation(&self) -> Operation {
        match self {
            OperationRequest::Submit(_) => Operation::Submit,
            OperationRequest::ListPending(_) => Operation::ListPending,
            OperationRequest::Cancel(_) => Operation::Cancel,
            OperationRequest::Join(_) => Operation::Join,
        }
    }
}

/// What a channel service call produced. `output` absent is a valid
/// "nothing to show" result, not a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceResult {
    pub output: Option<String>,
}

impl ServiceResult {
    pub fn with_output(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
        }
    }
}
