//! Interactive question-and-answer flow.
//!
//! One `Select` over the four operations, then the operation's own field
//! prompts. Every step can be cancelled (Esc on menus, Ctrl-C on text input);
//! cancellation at any point yields `Ok(None)` so the caller terminates
//! cleanly without touching the channel service.

use crate::config::Config;
use crate::error::Result;
use crate::models::{
    CancelRequest, JoinRequest, ListPendingRequest, Operation, OperationRequest, SubmitRequest,
};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io;

const OPERATIONS: [Operation; 4] = [
    Operation::Submit,
    Operation::ListPending,
    Operation::Join,
    Operation::Cancel,
];

/// Whether a dialoguer error is really the operator backing out (Ctrl-C).
fn is_cancelled(err: &dialoguer::Error) -> bool {
    match err {
        dialoguer::Error::IO(io_err) => io_err.kind() == io::ErrorKind::Interrupted,
        #[allow(unreachable_patterns)]
        _ => false,
    }
}

/// Runs a text/number prompt, translating Ctrl-C into `Ok(None)`.
fn interact_opt<T>(input: Input<'_, T>) -> Result<Option<T>>
where
    T: Clone + ToString + std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Display + std::fmt::Debug,
{
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_cancelled(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn prompt_channel_name(config: &Config) -> Result<Option<String>> {
    let prompt = if config.channels.is_empty() {
        "What is your channel name?".to_string()
    } else {
        format!(
            "What is your channel name? (configured: {})",
            config.channels.join(", ")
        )
    };
    interact_opt(
        Input::<String>::with_theme(&ColorfulTheme::default()).with_prompt(prompt),
    )
}

fn prompt_block_number() -> Result<Option<u64>> {
    interact_opt(
        Input::<u64>::with_theme(&ColorfulTheme::default())
            .with_prompt("What is the block number?")
            .validate_with(|value: &u64| {
                if *value > 0 {
                    Ok(())
                } else {
                    Err("Block number must be greater than 0")
                }
            }),
    )
}

fn prompt_snapshot_path() -> Result<Option<String>> {
    interact_opt(
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("What is your snapshot path?"),
    )
}

/// Walks the operator through one operation. `Ok(None)` means they cancelled
/// at some step and nothing should be executed.
pub fn prompt_request(config: &Config) -> Result<Option<OperationRequest>> {
    let labels: Vec<&str> = OPERATIONS.iter().map(|op| op.label()).collect();
    let selection = match Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What is the operation type?")
        .items(&labels)
        .default(0)
        .interact_opt()
    {
        Ok(selection) => selection,
        Err(e) if is_cancelled(&e) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let Some(index) = selection else {
        return Ok(None);
    };

    let request = match OPERATIONS[index] {
        Operation::Submit => {
            let Some(channel_name) = prompt_channel_name(config)? else {
                return Ok(None);
            };
            let Some(block_number) = prompt_block_number()? else {
                return Ok(None);
            };
            OperationRequest::Submit(SubmitRequest {
                channel_name,
                block_number,
            })
        },
        Operation::ListPending => {
            let Some(channel_name) = prompt_channel_name(config)? else {
                return Ok(None);
            };
            OperationRequest::ListPending(ListPendingRequest { channel_name })
        },
        Operation::Cancel => {
            let Some(channel_name) = prompt_channel_name(config)? else {
                return Ok(None);
            };
            let Some(block_number) = prompt_block_number()? else {
                return Ok(None);
            };
            OperationRequest::Cancel(CancelRequest {
                channel_name,
                block_number,
            })
        },
        Operation::Join => {
            let Some(snapshot_path) = prompt_snapshot_path()? else {
                return Ok(None);
            };
            OperationRequest::Join(JoinRequest { snapshot_path })
        },
    };

    Ok(Some(request))
}
