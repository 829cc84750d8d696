use crate::cli::{print_result, prompt_request};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    CancelRequest, JoinRequest, ListPendingRequest, Operation, OperationRequest, ServiceResult,
    SubmitRequest,
};
use crate::service::ChannelService;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info};

/// CLI tool for channel snapshot lifecycle management
#[derive(Parser, Debug, Default)]
#[command(name = "fabric-snapshot", version, about, long_about = None)]
pub struct Cli {
    /// Run the interactive question-and-answer flow
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Block number to submit or cancel a snapshot request at
    #[arg(short = 'b', long)]
    pub block: Option<u64>,

    /// Name of the channel to snapshot (must be a configured channel)
    #[arg(short = 'c', long, alias = "channelName")]
    pub channel_name: Option<String>,

    /// Path of the snapshot archive to join from
    #[arg(short = 'p', long, alias = "snapshotPath")]
    pub snapshot_path: Option<String>,

    /// Operation to perform
    #[arg(short = 'o', long, value_enum)]
    pub operation: Option<Operation>,
}

/// CLI application: configuration plus the channel service it drives.
pub struct App<S> {
    config: Config,
    service: S,
}

impl<S: ChannelService> App<S> {
    pub fn new(config: Config, service: S) -> Self {
        Self { config, service }
    }

    /// Flag-driven entry point. Any failure crosses the boundary as the
    /// uniform process error.
    pub async fn run(&self, cli: Cli) -> Result<()> {
        self.run_inner(cli).await.map_err(AppError::into_process)
    }

    /// Interactive entry point. Cancelling any prompt is a clean exit.
    pub async fn run_interactive(&self) -> Result<()> {
        let prompted = prompt_request(&self.config);
        self.finish_interactive(prompted)
            .await
            .map_err(AppError::into_process)
    }

    async fn run_inner(&self, cli: Cli) -> Result<()> {
        let request = self.resolve_request(&cli)?;
        let result = self.call_service(request).await?;
        print_result(&result);
        Ok(())
    }

    /// Completes the interactive flow from a prompt outcome. `Ok(None)` means
    /// the operator backed out: nothing is called, nothing is printed.
    async fn finish_interactive(&self, prompted: Result<Option<OperationRequest>>) -> Result<()> {
        let Some(request) = prompted? else {
            debug!("operator cancelled at a prompt, exiting cleanly");
            return Ok(());
        };
        let result = self.call_service(request).await?;
        print_result(&result);
        Ok(())
    }

    /// Resolves flags into exactly one validated request, or a params error.
    ///
    /// Validation order: operation presence, the operation's required fields,
    /// then field-level constraints (configured channel list, positive block).
    pub fn resolve_request(&self, cli: &Cli) -> Result<OperationRequest> {
        let Some(operation) = cli.operation else {
            return Err(AppError::Params("Operation type is needed!".to_string()));
        };

        let request = match operation {
            Operation::Submit => {
                let (Some(channel_name), Some(block_number)) = (&cli.channel_name, cli.block)
                else {
                    return Err(AppError::Params(
                        "Channel name and block number are needed!".to_string(),
                    ));
                };
                OperationRequest::Submit(SubmitRequest {
                    channel_name: channel_name.clone(),
                    block_number,
                })
            },
            Operation::ListPending => {
                let Some(channel_name) = &cli.channel_name else {
                    return Err(AppError::Params("Channel name is needed!".to_string()));
                };
                OperationRequest::ListPending(ListPendingRequest {
                    channel_name: channel_name.clone(),
                })
            },
            Operation::Cancel => {
                let (Some(channel_name), Some(block_number)) = (&cli.channel_name, cli.block)
                else {
                    return Err(AppError::Params(
                        "Channel name and block name are needed!".to_string(),
                    ));
                };
                OperationRequest::Cancel(CancelRequest {
                    channel_name: channel_name.clone(),
                    block_number,
                })
            },
            Operation::Join => {
                let Some(snapshot_path) = &cli.snapshot_path else {
                    return Err(AppError::Params("Snapshot path is needed!".to_string()));
                };
                OperationRequest::Join(JoinRequest {
                    snapshot_path: snapshot_path.clone(),
                })
            },
        };

        self.check_constraints(&request)?;
        Ok(request)
    }

    fn check_constraints(&self, request: &OperationRequest) -> Result<()> {
        let channel_name = match request {
            OperationRequest::Submit(r) => Some(&r.channel_name),
            OperationRequest::ListPending(r) => Some(&r.channel_name),
            OperationRequest::Cancel(r) => Some(&r.channel_name),
            OperationRequest::Join(_) => None,
        };
        if let Some(name) = channel_name {
            if !self.config.allows_channel(name) {
                return Err(AppError::Params(format!(
                    "Unknown channel name: {}! Configured channels: {}",
                    name,
                    self.config.channels.join(", ")
                )));
            }
        }

        let block_number = match request {
            OperationRequest::Submit(r) => Some(r.block_number),
            OperationRequest::Cancel(r) => Some(r.block_number),
            _ => None,
        };
        if block_number == Some(0) {
            return Err(AppError::Params(
                "Block number must be greater than 0!".to_string(),
            ));
        }

        Ok(())
    }

    /// Performs the single service call for a validated request, with a
    /// spinner while the peer invocation is in flight.
    async fn call_service(&self, request: OperationRequest) -> Result<ServiceResult> {
        info!("Dispatching {:?} operation", request.operation());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Running {}...", request.operation().label()));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let result = match request {
            OperationRequest::Submit(req) => self.service.submit_snapshot_request(req).await,
            OperationRequest::ListPending(req) => self.service.list_pending_snapshots(req).await,
            OperationRequest::Cancel(req) => self.service.cancel_snapshot_request(req).await,
            OperationRequest::Join(req) => self.service.join_by_snapshot(req).await,
        };

        spinner.finish_and_clear();
        result
    }
}
