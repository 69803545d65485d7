//! Alert step
//!
//! Emails a summary of newly discovered tools, then commits the refreshed
//! catalog. Every part is skipped with a log line when it is not configured.
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::collections::HashSet;
use tracing::{info, warn};

use crate::catalog;
use crate::config::{Config, Email, SmtpCredentials};
use crate::error::Result;
use crate::models::Tool;
use crate::publish::{self, CommitOutcome};
use crate::renderer;
use crate::state;

/// Which parts of the alert step run
#[derive(Debug, Clone, Copy)]
pub struct AlertOptions {
    pub email: bool,
    pub commit: bool,
    pub push: bool,
}

impl AlertOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            email: true,
            commit: config.git.commit,
            push: config.git.push,
        }
    }
}

/// What the email part did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailOutcome {
    Sent { recipient: String },
    NothingNew,
    NotConfigured,
    Disabled,
    Failed(String),
}

/// Summary of an alert run
#[derive(Debug, Clone)]
pub struct AlertReport {
    pub new_tools: Vec<Tool>,
    pub email: EmailOutcome,
    /// `None` when committing was disabled
    pub commit: Option<CommitOutcome>,
}

/// Run the alert step
pub fn run(config: &Config, options: AlertOptions) -> Result<AlertReport> {
    let new_tools = pending_or_diff(config);

    let email = if new_tools.is_empty() {
        info!("No new tools to alert about");
        EmailOutcome::NothingNew
    } else if !options.email {
        EmailOutcome::Disabled
    } else {
        let outcome = match config.email.credentials() {
            None => {
                info!("Email credentials not configured, skipping email alert");
                EmailOutcome::NotConfigured
            }
            Some(creds) => match send(&config.email, &creds, &new_tools) {
                Ok(()) => {
                    info!(recipient = %creds.recipient, "Email alert sent");
                    EmailOutcome::Sent {
                        recipient: creds.recipient.clone(),
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Error sending email alert");
                    EmailOutcome::Failed(e.to_string())
                }
            },
        };

        if let Err(e) = state::clear_pending(&config.data.new_tools_file) {
            warn!(error = %e, "Cannot remove pending alerts file");
        }
        outcome
    };

    let commit = if options.commit {
        let mut git = config.git.clone();
        git.push = options.push;
        match publish::commit_file(&config.data.tools_csv, &git) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                warn!(error = %e, "Git commit failed");
                None
            }
        }
    } else {
        None
    };

    Ok(AlertReport {
        new_tools,
        email,
        commit,
    })
}

/// Pending tools from the merge step, else a diff against git HEAD by URL
fn pending_or_diff(config: &Config) -> Vec<Tool> {
    match state::load_pending(&config.data.new_tools_file) {
        Ok(tools) if !tools.is_empty() => {
            info!(count = tools.len(), "Loaded pending alerts");
            return tools;
        }
        Ok(_) => {}
        Err(e) => warn!(error = %e, "Cannot read pending alerts"),
    }

    if !config.data.tools_csv.exists() {
        return Vec::new();
    }

    let previous = match publish::read_head_file(&config.data.tools_csv) {
        Ok(Some(content)) => content,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "Cannot read committed catalog");
            return Vec::new();
        }
    };

    let (current, previous) = match (
        catalog::load(&config.data.tools_csv),
        catalog::parse(&previous),
    ) {
        (Ok(current), Ok(previous)) => (current, previous),
        (Err(e), _) | (_, Err(e)) => {
            warn!(error = %e, "Cannot compare catalog with previous commit");
            return Vec::new();
        }
    };

    let known: HashSet<&str> = previous.iter().map(|t| t.url.as_str()).collect();
    let new_tools: Vec<Tool> = current
        .into_iter()
        .filter(|t| !known.contains(t.url.as_str()))
        .collect();

    if !new_tools.is_empty() {
        info!(count = new_tools.len(), "Detected new tools via git comparison");
    }
    new_tools
}

/// Build the alert email
pub fn build_message(creds: &SmtpCredentials, tools: &[Tool]) -> Result<Message> {
    let from: Mailbox = creds.user.parse()?;
    let to: Mailbox = creds.recipient.parse()?;

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(renderer::email_subject(tools.len()))
        .header(ContentType::TEXT_HTML)
        .body(renderer::email_html(tools))?;

    Ok(message)
}

/// Send the alert over STARTTLS SMTP
fn send(config: &Email, creds: &SmtpCredentials, tools: &[Tool]) -> Result<()> {
    let message = build_message(creds, tools)?;

    info!(host = %config.smtp_host, port = config.smtp_port, "Sending email alert");
    let mailer = SmtpTransport::starttls_relay(&config.smtp_host)?
        .port(config.smtp_port)
        .credentials(Credentials::new(
            creds.user.clone(),
            creds.password.clone(),
        ))
        .build();

    mailer.send(&message)?;
    Ok(())
}
