//! Logger setup and per-invocation log fields.
//!
//! While an invocation runs, its [`RequestLogContext`] is held in a task-local
//! and appended to every record the logger writes.

use std::fmt;
use std::future::Future;
use std::io::Write;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Record, info};

use crate::model::TokenProviderInput;

/// Time reserved before the Lambda deadline to return the error response.
pub const DEADLINE_MARGIN: Duration = Duration::from_millis(500);

tokio::task_local! {
    static LOG_CONTEXT: RequestLogContext;
}

/// Install the `env_logger` backend.
///
/// Defaults to `info`, or `debug` when `debug` is set. `RUST_LOG` still wins
/// when present.
pub fn init(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_millis(),
                record.level(),
                render(record)
            )
        })
        .try_init();
}

/// Message of `record` followed by the fields of the current invocation.
#[must_use]
pub fn render(record: &Record<'_>) -> String {
    LOG_CONTEXT
        .try_with(|context| format!("{} {context}", record.args()))
        .unwrap_or_else(|_| record.args().to_string())
}

/// Run `future` with `context` attached to its log records.
pub async fn scoped<F: Future>(context: RequestLogContext, future: F) -> F::Output {
    LOG_CONTEXT.scope(context, future).await
}

/// Synchronous counterpart of [`scoped`].
pub fn in_context<R>(context: RequestLogContext, f: impl FnOnce() -> R) -> R {
    LOG_CONTEXT.sync_scope(context, f)
}

/// Runtime facts about the current invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub request_id: String,
    pub function_arn: String,
    /// Deadline in milliseconds since the Unix epoch, if any.
    pub deadline_ms: Option<u64>,
}

impl Invocation {
    /// Time left to work before the deadline, keeping [`DEADLINE_MARGIN`] in
    /// reserve. `Some(ZERO)` once that point has passed.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        let deadline = self.deadline_ms?;
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let left = u128::from(deadline).saturating_sub(now);
        let left = Duration::from_millis(u64::try_from(left).unwrap_or(u64::MAX));
        Some(left.saturating_sub(DEADLINE_MARGIN))
    }
}

/// Fields appended to every log line of an invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLogContext {
    pub aws_request_id: String,
    pub function_arn: String,
    pub token_provider_name: String,
    pub user: String,
    pub user_arn: String,
    pub token_request_owner: String,
    pub token_request_repo: Option<String>,
    pub github_app_id: i64,
}

impl RequestLogContext {
    /// Fields known before the payload is decoded.
    #[must_use]
    pub fn from_invocation(invocation: &Invocation) -> Self {
        Self {
            aws_request_id: invocation.request_id.clone(),
            function_arn: invocation.function_arn.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn new(input: &TokenProviderInput, invocation: &Invocation) -> Self {
        let identity = &input.request_context.identity;
        let aws_request_id = input
            .request_context
            .request_id
            .clone()
            .unwrap_or_else(|| invocation.request_id.clone());

        Self {
            aws_request_id,
            function_arn: invocation.function_arn.clone(),
            token_provider_name: input.token_context.provider_name.clone(),
            user: identity.user.clone().unwrap_or_default(),
            user_arn: identity.user_arn.clone().unwrap_or_default(),
            token_request_owner: input.token_request.owner.clone(),
            token_request_repo: input.token_request.repo.clone(),
            github_app_id: input.token_context.app.id,
        }
    }
}

impl fmt::Display for RequestLogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "awsRequestId={} functionArn={} tokenProviderName={} userArn={} user={} tokenRequestOwner={:?} githubAppId={}",
            self.aws_request_id,
            self.function_arn,
            self.token_provider_name,
            self.user_arn,
            self.user,
            self.token_request_owner,
            self.github_app_id,
        )?;
        if let Some(repo) = &self.token_request_repo {
            write!(f, " tokenRequestRepo={repo:?}")?;
        }
        Ok(())
    }
}

/// Log the `Init` line describing the incoming request.
pub fn log_initial_request(input: &TokenProviderInput) {
    let identity = &input.request_context.identity;
    let token_context = &input.token_context;

    let mut line = format!(
        "Init path={} endpointType={} repositorySelectionMode={} githubAppName={} userAgent={:?} permissions={}",
        input
            .request_context
            .path
            .as_deref()
            .or(input.path.as_deref())
            .unwrap_or_default(),
        token_context.endpoint.endpoint_type,
        token_context.target_rule.repository_selection_mode,
        token_context.app.name,
        identity.user_agent.as_deref().unwrap_or_default(),
        token_context.permissions,
    );

    if let Some(pool_id) = identity
        .cognito_identity_pool_id
        .as_deref()
        .filter(|id| !id.is_empty())
    {
        line.push_str(&format!(
            " cognitoIdentityPoolID={pool_id} cognitoIdentityID={} cognitoAuthenticationProvider={} cognitoAuthenticationType={}",
            identity.cognito_identity_id.as_deref().unwrap_or_default(),
            identity
                .cognito_authentication_provider
                .as_deref()
                .unwrap_or_default(),
            identity
                .cognito_authentication_type
                .as_deref()
                .unwrap_or_default(),
        ));
    }

    info!("{line}");
}
