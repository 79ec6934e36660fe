// ============================================================================
// API CLIENT - HTTP only (stateless apart from the session token)
// ============================================================================
// One attempt per call: no retries, no timeout. Failures are logged here and
// handed back to the caller, who decides how to show them.
// ============================================================================

use gloo_net::http::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::config::CONFIG;
use crate::models::academic::{
    Assignment, Course, Grade, GradeSubmission, NewAssignment, NewCourse, Submission,
};
use crate::models::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::models::proxy::{CodeExecutionRequest, CodeExecutionResult, Quiz, QuizRequest};
use crate::models::session::UserProfile;
use crate::models::timetable::{parse_entries, TimetableEntry};
use crate::stores::SessionStore;

use super::api_error::{decode_response, ApiError};

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Client against the configured backend
    pub fn from_config(session: SessionStore) -> Self {
        Self::new(CONFIG.api_url.clone(), session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Headers for one call, `Authorization` only when a token is stored
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Accept", "application/json".to_string())];
        if let Some(token) = self.session.token().filter(|t| !t.is_empty()) {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }
        headers
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi(self)
    }

    pub fn student(&self) -> StudentApi<'_> {
        StudentApi(self)
    }

    pub fn faculty(&self) -> FacultyApi<'_> {
        FacultyApi(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi(self)
    }

    pub fn proxy(&self) -> ProxyApi<'_> {
        ProxyApi(self)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let label = format!("{} {}", method, path);
        let result = self.send(method, path, body).await;
        if let Err(e) = &result {
            log::error!("❌ API {} failed: {}", label, e);
        }
        result
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = RequestBuilder::new(&self.url(path)).method(method);
        for (name, value) in self.headers() {
            builder = builder.header(name, &value);
        }

        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Encode(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_response(status, &text)
    }
}

/// `/auth/*`
pub struct AuthApi<'a>(&'a ApiClient);

impl AuthApi<'_> {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        log::info!("🔐 Login for {}", request.email);
        self.0.post("/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        log::info!("📝 Registering {} as {}", request.email, request.role.as_str());
        self.0.post("/auth/register", request).await
    }

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.0.get("/auth/me").await
    }

    pub async fn logout(&self) -> Result<Value, ApiError> {
        self.0.post("/auth/logout", &Value::Null).await
    }
}

/// `/student/*`
pub struct StudentApi<'a>(&'a ApiClient);

impl StudentApi<'_> {
    pub async fn dashboard(&self) -> Result<Value, ApiError> {
        self.0.get("/student/dashboard").await
    }

    pub async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        self.0.get("/student/courses").await
    }

    pub async fn assignments(&self) -> Result<Vec<Assignment>, ApiError> {
        self.0.get("/student/assignments").await
    }

    pub async fn submit_assignment(
        &self,
        assignment_id: &str,
        submission: &Submission,
    ) -> Result<Value, ApiError> {
        let path = format!("/student/assignments/{}/submit", assignment_id);
        self.0.post(&path, submission).await
    }

    pub async fn timetable(&self) -> Result<Vec<TimetableEntry>, ApiError> {
        let raw: Vec<Value> = self.0.get("/student/timetable").await?;
        Ok(parse_entries(raw))
    }

    pub async fn grades(&self) -> Result<Vec<Grade>, ApiError> {
        self.0.get("/student/grades").await
    }
}

/// `/faculty/*`
pub struct FacultyApi<'a>(&'a ApiClient);

impl FacultyApi<'_> {
    pub async fn dashboard(&self) -> Result<Value, ApiError> {
        self.0.get("/faculty/dashboard").await
    }

    pub async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        self.0.get("/faculty/courses").await
    }

    pub async fn create_course(&self, course: &NewCourse) -> Result<Course, ApiError> {
        self.0.post("/faculty/courses", course).await
    }

    pub async fn assignments(&self) -> Result<Vec<Assignment>, ApiError> {
        self.0.get("/faculty/assignments").await
    }

    pub async fn create_assignment(&self, assignment: &NewAssignment) -> Result<Assignment, ApiError> {
        self.0.post("/faculty/assignments", assignment).await
    }

    pub async fn grade_submission(
        &self,
        submission_id: &str,
        grade: &GradeSubmission,
    ) -> Result<Value, ApiError> {
        let path = format!("/faculty/submissions/{}/grade", submission_id);
        self.0.put(&path, grade).await
    }

    pub async fn students(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.0.get("/faculty/students").await
    }

    pub async fn timetable(&self) -> Result<Vec<TimetableEntry>, ApiError> {
        let raw: Vec<Value> = self.0.get("/faculty/timetable").await?;
        Ok(parse_entries(raw))
    }
}

/// `/users/*`
pub struct UsersApi<'a>(&'a ApiClient);

impl UsersApi<'_> {
    pub async fn list(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.0.get("/users").await
    }

    pub async fn get(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        self.0.get(&format!("/users/{}", user_id)).await
    }

    pub async fn update(&self, user_id: &str, changes: &Value) -> Result<UserProfile, ApiError> {
        self.0.put(&format!("/users/{}", user_id), changes).await
    }
}

/// `/proxy/*`: code execution and AI quiz generation
pub struct ProxyApi<'a>(&'a ApiClient);

impl ProxyApi<'_> {
    pub async fn execute_code(
        &self,
        request: &CodeExecutionRequest,
    ) -> Result<CodeExecutionResult, ApiError> {
        log::info!("▶️ Executing {} snippet ({} bytes)", request.language, request.code.len());
        self.0.post("/proxy/code/execute", request).await
    }

    pub async fn generate_quiz(&self, request: &QuizRequest) -> Result<Quiz, ApiError> {
        log::info!("🧠 Generating {} questions on '{}'", request.count, request.topic);
        self.0.post("/proxy/ai/quiz", request).await
    }
}
