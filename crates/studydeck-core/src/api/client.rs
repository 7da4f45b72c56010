use super::error::ApiError;
use super::models::{
    AttemptOutcome, AttemptResponse, AttemptSubmission, AuthSession, CurrentUser, DashboardStats,
    DataEnvelope, Document, DocumentList, Flashcard, FlashcardFilter, FlashcardList,
    GeneratedQuiz, LoginForm, MessageResponse, QuizEnvelope, QuizList, QuizRecord, RegisterForm,
    UploadResponse, User,
};
use crate::pagination::{Page, PageRequest};
use crate::quiz::QuizDetails;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Upload form field the backend reads files from.
const UPLOAD_FIELD: &str = "document";

/// Thin async client over the study backend's REST API.
///
/// Cloning is cheap; clones share the connection pool and carry their own
/// copy of the bearer token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.set_token(token);
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.trim().is_empty());
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn login(&self, form: &LoginForm) -> Result<AuthSession, ApiError> {
        let envelope: DataEnvelope<AuthSession> =
            self.send_json(Method::POST, "auth/login", form).await?;
        Ok(envelope.data)
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<AuthSession, ApiError> {
        let envelope: DataEnvelope<AuthSession> =
            self.send_json(Method::POST, "auth/register", form).await?;
        Ok(envelope.data)
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        let envelope: DataEnvelope<CurrentUser> = self.get("auth/me", &[]).await?;
        Ok(envelope.data.user)
    }

    pub async fn list_documents(&self, request: PageRequest) -> Result<Page<Document>, ApiError> {
        let envelope: DataEnvelope<DocumentList> =
            self.get("documents", &request.query_pairs()).await?;
        Ok(Page {
            items: envelope.data.documents,
            pagination: envelope.data.pagination,
            limit: request.limit,
        })
    }

    /// Upload one or more files in a single multipart request.
    pub async fn upload_documents(&self, paths: &[PathBuf]) -> Result<Document, ApiError> {
        if paths.is_empty() {
            return Err(ApiError::InvalidInput(
                "No files selected for upload.".to_string(),
            ));
        }
        let mut form = Form::new();
        for path in paths {
            let bytes = tokio::fs::read(path).await.map_err(|err| {
                ApiError::InvalidInput(format!("Could not read {}: {err}", path.display()))
            })?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "document".to_string());
            form = form.part(UPLOAD_FIELD, Part::bytes(bytes).file_name(file_name));
        }
        let request = self.request(Method::POST, "documents/upload").multipart(form);
        let response: UploadResponse = self.execute(request).await?;
        Ok(response.document)
    }

    /// Ask the backend to generate flashcards; returns its status message.
    pub async fn generate_flashcards(&self, document_id: &str) -> Result<String, ApiError> {
        let path = format!("documents/generate/{document_id}");
        let response: MessageResponse = self.get(&path, &[]).await?;
        Ok(response.message)
    }

    pub async fn list_flashcards(
        &self,
        request: PageRequest,
        filter: &FlashcardFilter,
    ) -> Result<Page<Flashcard>, ApiError> {
        let mut query = request.query_pairs();
        query.extend(filter.query_pairs());
        let envelope: DataEnvelope<FlashcardList> = self.get("flashcards", &query).await?;
        Ok(Page {
            items: envelope.data.flashcards,
            pagination: envelope.data.pagination,
            limit: request.limit,
        })
    }

    pub async fn list_quizzes(
        &self,
        request: PageRequest,
        document_id: Option<&str>,
    ) -> Result<Page<QuizRecord>, ApiError> {
        let mut query = request.query_pairs();
        if let Some(document_id) = document_id {
            query.push(("document", document_id.to_string()));
        }
        let envelope: DataEnvelope<QuizList> = self.get("quizzes", &query).await?;
        Ok(Page {
            items: envelope.data.quizzes,
            pagination: envelope.data.pagination,
            limit: request.limit,
        })
    }

    /// Generate a quiz from a document; returns the new quiz id.
    pub async fn generate_quiz(&self, document_id: &str) -> Result<String, ApiError> {
        let path = format!("quizzes/generate/{document_id}");
        let envelope: DataEnvelope<GeneratedQuiz> = self.get(&path, &[]).await?;
        Ok(envelope.data.quiz_id)
    }

    /// Load a quiz for a fresh attempt.
    pub async fn quiz(&self, quiz_id: &str) -> Result<QuizDetails, ApiError> {
        let path = format!("quizzes/{quiz_id}");
        let envelope: DataEnvelope<QuizEnvelope> = self.get(&path, &[]).await?;
        envelope
            .data
            .quiz
            .map(|quiz| quiz.into_details(quiz_id, false))
            .ok_or_else(|| ApiError::NotFound("Quiz".to_string()))
    }

    pub async fn submit_attempt(
        &self,
        quiz_id: &str,
        submission: &AttemptSubmission,
    ) -> Result<AttemptOutcome, ApiError> {
        let path = format!("quizzes/{quiz_id}/attempt");
        let response: AttemptResponse = self.send_json(Method::POST, &path, submission).await?;
        Ok(response.attempt)
    }

    /// Load a submitted attempt, annotated for review.
    pub async fn attempt(&self, quiz_id: &str) -> Result<QuizDetails, ApiError> {
        let path = format!("quizzes/attempts/{quiz_id}");
        let envelope: DataEnvelope<QuizEnvelope> = self.get(&path, &[]).await?;
        envelope
            .data
            .quiz
            .map(|quiz| quiz.into_details(quiz_id, true))
            .ok_or_else(|| ApiError::NotFound("Quiz attempt".to_string()))
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let envelope: DataEnvelope<DashboardStats> = self.get("dashboard/stats", &[]).await?;
        Ok(envelope.data)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.endpoint(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path).query(query);
        self.execute(request).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(method, path).json(body);
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.bytes().await?;

        if status == StatusCode::NOT_FOUND && super::error::server_message(&body).is_none() {
            warn!(%url, "Resource not found");
            return Err(ApiError::NotFound("Resource".to_string()));
        }
        if !status.is_success() {
            let err = ApiError::from_status(status.as_u16(), &body);
            warn!(%url, status = status.as_u16(), "Request failed: {}", err.user_message());
            return Err(err);
        }

        debug!(%url, status = status.as_u16(), bytes = body.len(), "Request succeeded");
        serde_json::from_slice(&body).map_err(|err| {
            warn!(%url, "Could not decode response: {err}");
            ApiError::Decode(err.to_string())
        })
    }
}
