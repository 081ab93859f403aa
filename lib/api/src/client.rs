//! The API client facade.
//!
//! Every call to the remote service goes through [`ApiClient`]. It reads the
//! credential from the session store at call time, attaches it as a bearer
//! token, and turns failures into [`ApiError`]s. A rejected or missing
//! credential clears the session and redirects to login before the error is
//! returned, so views never handle invalidation themselves.

use ballotbox_core::CandidateId;
use ballotbox_navigation::{Navigator, Redirect, landing_view};
use ballotbox_session::{Credential, KeyValueStore, Role, SessionStore};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use rootcause::prelude::Report;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::ApiResult;
use crate::config::ApiConfig;
use crate::error::{ApiError, Operation};
use crate::gate::SubmitGate;
use crate::models::{
    Candidate, CandidateEnvelope, CandidatesEnvelope, LoginOutcome, LoginResponse, MessageBody,
    ProfileEnvelope, VoteCountEnvelope, VoterProfile,
};
use crate::roster::VoteTally;
use crate::validation::{
    CandidateForm, LoginForm, PasswordChangeForm, SignupForm, ValidationError,
};

/// Lifts a rejected form into the facade's error type.
fn invalid(report: Report<ValidationError>) -> Report<ApiError> {
    let reason = report.current_context().clone();
    report.context(ApiError::Validation(reason))
}

fn is_unauthorized(error: &ApiError) -> bool {
    matches!(error, ApiError::Remote { status, .. } if *status == StatusCode::UNAUTHORIZED.as_u16())
}

/// Client for the remote voting service.
#[derive(Debug, Clone)]
pub struct ApiClient<S, N> {
    http: reqwest::Client,
    config: ApiConfig,
    session: SessionStore<S>,
    navigator: N,
}

impl<S: KeyValueStore, N: Navigator> ApiClient<S, N> {
    /// Creates a client over the given session store and navigator.
    pub fn new(config: ApiConfig, session: SessionStore<S>, navigator: N) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::ClientSetup {
                reason: e.to_string(),
            })?;
        Ok(Self {
            http,
            config,
            session,
            navigator,
        })
    }

    /// Returns the session store the client reads credentials from.
    #[must_use]
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Registers a voter. Returns the message to show on success.
    #[instrument(skip_all)]
    pub async fn register(&self, form: &SignupForm) -> ApiResult<String> {
        let body = form.validate().map_err(invalid)?;
        let request = self.request(Method::POST, "/api/register").json(&body);
        let response = self.execute(Operation::Register, request).await?;
        let message = Self::message(response).await;
        tracing::info!("Voter registered");
        Ok(message.unwrap_or_else(|| "Registration successful!".to_string()))
    }

    /// Logs in and stores the new session, replacing any previous one.
    ///
    /// A rejected login is reported like any other remote failure: there is
    /// no session to invalidate yet.
    #[instrument(skip_all)]
    pub async fn login(&self, form: &LoginForm) -> ApiResult<LoginOutcome> {
        let body = form.validate().map_err(invalid)?;
        let request = self.request(Method::POST, "/api/login").json(&body);
        let response = self.execute(Operation::Login, request).await?;
        let login: LoginResponse = Self::decode(Operation::Login, response).await?;

        let decode_error = |reason: String| ApiError::Decode {
            operation: Operation::Login,
            reason,
        };
        let credential =
            Credential::new(login.token.clone()).ok_or_else(|| decode_error("empty token".into()))?;
        let role = login
            .role
            .parse::<Role>()
            .map_err(|e| decode_error(e.to_string()))?;

        self.session
            .save(credential, role, &login.stats())
            .map_err(|e| {
                let reason = e.to_string();
                e.context(ApiError::SessionStorage {
                    operation: Operation::Login,
                    reason,
                })
            })?;

        tracing::info!(role = %role, "Logged in");
        Ok(LoginOutcome {
            role,
            landing: landing_view(role),
        })
    }

    /// Ends the session locally and returns to login. No request is sent.
    pub fn logout(&self) {
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "Failed to clear session on logout");
        }
        tracing::info!("Logged out");
        self.navigator.redirect(Redirect::to_login());
    }

    /// Fetches the logged-in voter's profile.
    #[instrument(skip_all)]
    pub async fn fetch_profile(&self) -> ApiResult<VoterProfile> {
        let operation = Operation::FetchProfile;
        let response = self
            .execute(operation, self.request(Method::GET, "/api/profile"))
            .await?;
        let envelope: ProfileEnvelope = Self::decode(operation, response).await?;
        Ok(envelope.user)
    }

    /// Changes the logged-in voter's password. Returns the remote message.
    #[instrument(skip_all)]
    pub async fn change_password(&self, form: &PasswordChangeForm) -> ApiResult<String> {
        let body = form.validate().map_err(invalid)?;
        let request = self
            .request(Method::PUT, "/api/profile/password")
            .json(&body);
        let response = self
            .execute(Operation::ChangePassword, request)
            .await?;
        let message = Self::message(response).await;
        tracing::info!("Password changed");
        Ok(message.unwrap_or_else(|| "Password updated successfully".to_string()))
    }

    /// Adds a candidate.
    #[instrument(skip_all)]
    pub async fn add_candidate(&self, form: &CandidateForm) -> ApiResult<String> {
        let body = form.validate_new().map_err(invalid)?;
        let request = self.request(Method::POST, "/api/admin").json(&body);
        self.execute(Operation::AddCandidate, request)
            .await?;
        tracing::info!(party = %body.party, "Candidate added");
        Ok("Candidate added successfully!".to_string())
    }

    /// Lists every candidate for the admin roster.
    #[instrument(skip_all)]
    pub async fn list_candidates(&self) -> ApiResult<Vec<Candidate>> {
        self.fetch_candidates(Operation::ListCandidates).await
    }

    /// Lists the candidates a voter can vote for.
    #[instrument(skip_all)]
    pub async fn ballot(&self) -> ApiResult<Vec<Candidate>> {
        self.fetch_candidates(Operation::ListBallot).await
    }

    async fn fetch_candidates(&self, operation: Operation) -> ApiResult<Vec<Candidate>> {
        let response = self
            .execute(operation, self.request(Method::GET, "/api/allcandidates"))
            .await?;
        let envelope: CandidatesEnvelope = Self::decode(operation, response).await?;
        tracing::debug!(count = envelope.candidates.len(), "Candidates loaded");
        Ok(envelope.candidates)
    }

    /// Fetches one candidate for editing.
    #[instrument(skip_all, fields(candidate = %id))]
    pub async fn fetch_candidate(&self, id: &CandidateId) -> ApiResult<Candidate> {
        let operation = Operation::FetchCandidate;
        let path = format!("/api/candidates/{id}");
        let response = self
            .execute(operation, self.request(Method::GET, &path))
            .await?;
        let envelope: CandidateEnvelope = Self::decode(operation, response).await?;
        Ok(envelope.into_inner())
    }

    /// Updates a candidate.
    #[instrument(skip_all, fields(candidate = %id))]
    pub async fn update_candidate(&self, id: &CandidateId, form: &CandidateForm) -> ApiResult<String> {
        let body = form.validate_update().map_err(invalid)?;
        let path = format!("/api/candidates/{id}");
        let request = self.request(Method::PUT, &path).json(&body);
        self.execute(Operation::UpdateCandidate, request)
            .await?;
        tracing::info!("Candidate updated");
        Ok("Candidate updated successfully".to_string())
    }

    /// Deletes a candidate.
    #[instrument(skip_all, fields(candidate = %id))]
    pub async fn delete_candidate(&self, id: &CandidateId) -> ApiResult<()> {
        let path = format!("/api/{id}");
        self.execute(Operation::DeleteCandidate, self.request(Method::DELETE, &path))
            .await?;
        tracing::info!("Candidate deleted");
        Ok(())
    }

    /// Casts the logged-in voter's vote. Returns the remote message.
    #[instrument(skip_all, fields(candidate = %id))]
    pub async fn cast_vote(&self, id: &CandidateId) -> ApiResult<String> {
        let path = format!("/api/vote/{id}");
        let request = self
            .request(Method::POST, &path)
            .json(&serde_json::json!({}));
        let response = self.execute(Operation::CastVote, request).await?;
        let message = Self::message(response).await;
        tracing::info!("Vote recorded");
        Ok(message.unwrap_or_else(|| "Vote recorded successfully".to_string()))
    }

    /// Casts a vote unless one is already in flight through `gate`.
    ///
    /// Returns `None`, without sending anything, when the gate is busy.
    pub async fn cast_vote_once(
        &self,
        gate: &SubmitGate,
        id: &CandidateId,
    ) -> Option<ApiResult<String>> {
        let Some(_permit) = gate.try_begin() else {
            tracing::debug!(candidate = %id, "Vote already in flight; ignoring");
            return None;
        };
        Some(self.cast_vote(id).await)
    }

    /// Fetches the per-party vote counts.
    #[instrument(skip_all)]
    pub async fn vote_count(&self) -> ApiResult<VoteTally> {
        let operation = Operation::VoteCount;
        let response = self
            .execute(operation, self.request(Method::GET, "/api/vote/count"))
            .await?;
        let envelope: VoteCountEnvelope = Self::decode(operation, response).await?;
        Ok(VoteTally::new(envelope.count_record))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.config.endpoint(path))
    }

    /// Sends a request, attaching the stored credential when the operation
    /// requires one.
    async fn execute(&self, operation: Operation, request: RequestBuilder) -> ApiResult<Response> {
        if operation.requires_credential() {
            self.send_authorized(operation, request).await
        } else {
            self.send(operation, request).await
        }
    }

    /// Sends a request that carries the stored credential.
    ///
    /// Without a stored credential nothing is sent and the call fails as if
    /// the remote service had answered 401.
    async fn send_authorized(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> ApiResult<Response> {
        let Some(credential) = self.session.credential() else {
            tracing::debug!(operation = %operation, "No stored credential");
            self.end_session(operation);
            return Err(ApiError::Unauthorized { operation }.into());
        };
        let request = request.header("Authorization", credential.bearer());
        match self.send(operation, request).await {
            Err(report) if is_unauthorized(report.current_context()) => {
                self.end_session(operation);
                Err(report.context(ApiError::Unauthorized { operation }))
            }
            other => other,
        }
    }

    /// Clears the session and asks for a redirect to login.
    fn end_session(&self, operation: Operation) {
        tracing::info!(operation = %operation, "Credential rejected; ending session");
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "Failed to clear rejected session");
        }
        self.navigator.redirect(Redirect::to_login());
    }

    /// Sends a request and fails on any non-success status.
    async fn send(&self, operation: Operation, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(operation = %operation, error = %e, "Request failed");
            ApiError::Transport {
                operation,
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = MessageBody::parse(&body).message;
        tracing::warn!(
            operation = %operation,
            status = %status,
            remote_message = message.as_deref().unwrap_or_default(),
            "Remote service returned error"
        );
        Err(ApiError::Remote {
            operation,
            status: status.as_u16(),
            message,
        }
        .into())
    }

    async fn decode<T: DeserializeOwned>(operation: Operation, response: Response) -> ApiResult<T> {
        response.json::<T>().await.map_err(|e| {
            tracing::warn!(operation = %operation, error = %e, "Failed to parse response");
            ApiError::Decode {
                operation,
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// The `message` of a success body, if any.
    async fn message(response: Response) -> Option<String> {
        let body = response.text().await.ok()?;
        MessageBody::parse(&body)
            .message
            .filter(|m| !m.trim().is_empty())
    }
}
