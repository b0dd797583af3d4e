use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, LOCATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::api::endpoints;
use crate::api::types::{
    post_id_from_location, with_plan_id, CommentUpdate, CreatedPost, NewComment, NewPost,
    PostUpdate,
};
use crate::api::FoodSource;
use crate::error::{BoardError, Result};
use crate::models::{DaySummary, Food};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Bearer token sent with every request when present.
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token: None,
        }
    }
}

/// Blocking client for the diet board REST API.
///
/// Every method is a direct pass-through: it sends one request and returns
/// the decoded body. Non-2xx statuses become [`BoardError`] variants.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        match &config.token {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                    BoardError::InvalidInput("access token is not a valid header value".into())
                })?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            None => debug!("No access token configured, sending unauthenticated requests"),
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "api request");
        self.http.request(method, url)
    }

    fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send()?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "api response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(error_for_status(status.as_u16(), &body))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Ok(self.execute(self.request(Method::GET, path))?.json()?)
    }

    fn send_value(&self, method: Method, path: &str, body: Option<&impl Serialize>) -> Result<Value> {
        let mut request = self.request(method, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        read_value(self.execute(request)?)
    }

    fn send_empty(&self, method: Method, path: &str) -> Result<Value> {
        self.send_value(method, path, None::<&Value>)
    }

    // Diet plans

    pub fn create_diet_plan(&self, data: &Value) -> Result<Value> {
        self.send_value(Method::POST, endpoints::DIET_PLANS, Some(data))
    }

    pub fn get_diet_plan(&self, plan_id: i64) -> Result<Value> {
        self.get_json(&endpoints::diet_plan(plan_id))
    }

    pub fn my_diet_plans(&self) -> Result<Value> {
        self.get_json(endpoints::MY_DIET_PLANS)
    }

    pub fn primary_diet_plan(&self) -> Result<Value> {
        self.get_json(endpoints::PRIMARY_DIET_PLAN)
    }

    /// Mark a plan as the user's primary plan.
    pub fn set_primary_diet_plan(&self, plan_id: i64) -> Result<Value> {
        self.send_empty(Method::PATCH, &endpoints::diet_plan(plan_id))
    }

    pub fn delete_diet_plan(&self, plan_id: i64) -> Result<Value> {
        self.send_empty(Method::DELETE, &endpoints::diet_plan(plan_id))
    }

    // Daily diets

    pub fn create_daily_diet(&self, plan_id: i64, data: Value) -> Result<Value> {
        let body = with_plan_id(plan_id, data);
        self.send_value(Method::POST, &endpoints::daily_diets(plan_id), Some(&body))
    }

    pub fn daily_diets(&self, plan_id: i64) -> Result<Value> {
        self.get_json(&endpoints::daily_diets(plan_id))
    }

    pub fn daily_diet_by_date(&self, plan_id: i64, date: chrono::NaiveDate) -> Result<DaySummary> {
        self.get_json(&endpoints::daily_diet_by_date(plan_id, date))
    }

    pub fn update_daily_diet(&self, plan_id: i64, daily_diet_id: i64, data: &Value) -> Result<Value> {
        self.send_value(
            Method::PATCH,
            &endpoints::daily_diet(plan_id, daily_diet_id),
            Some(data),
        )
    }

    pub fn delete_daily_diet(&self, plan_id: i64, daily_diet_id: i64) -> Result<Value> {
        self.send_empty(Method::DELETE, &endpoints::daily_diet(plan_id, daily_diet_id))
    }

    // Meals

    pub fn create_meal(&self, plan_id: i64, daily_diet_id: i64, data: &Value) -> Result<Value> {
        self.send_value(
            Method::POST,
            &endpoints::meals(plan_id, daily_diet_id),
            Some(data),
        )
    }

    pub fn get_meal(&self, plan_id: i64, daily_diet_id: i64, meal_id: i64) -> Result<Value> {
        self.get_json(&endpoints::meal(plan_id, daily_diet_id, meal_id))
    }

    pub fn update_meal(
        &self,
        plan_id: i64,
        daily_diet_id: i64,
        meal_id: i64,
        data: &Value,
    ) -> Result<Value> {
        self.send_value(
            Method::PATCH,
            &endpoints::meal(plan_id, daily_diet_id, meal_id),
            Some(data),
        )
    }

    pub fn delete_meal(&self, plan_id: i64, daily_diet_id: i64, meal_id: i64) -> Result<Value> {
        self.send_empty(
            Method::DELETE,
            &endpoints::meal(plan_id, daily_diet_id, meal_id),
        )
    }

    // Foods

    pub fn search_foods(&self, name: &str) -> Result<Vec<Food>> {
        let request = self
            .request(Method::GET, endpoints::FOOD_SEARCH)
            .query(&[("name", name)]);
        Ok(self.execute(request)?.json()?)
    }

    // Posts

    pub fn posts(&self) -> Result<Value> {
        self.get_json(endpoints::POSTS)
    }

    pub fn get_post(&self, post_id: i64) -> Result<Value> {
        self.get_json(&endpoints::post(post_id))
    }

    pub fn create_post(&self, post: &NewPost) -> Result<CreatedPost> {
        let response = self.execute(self.request(Method::POST, endpoints::POSTS).json(post))?;
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok());

        Ok(CreatedPost {
            post_id: post_id_from_location(location),
            status: response.status().as_u16(),
        })
    }

    pub fn update_post(&self, post_id: i64, update: &PostUpdate) -> Result<Value> {
        self.send_value(Method::PATCH, &endpoints::post(post_id), Some(update))
    }

    pub fn delete_post(&self, post_id: i64) -> Result<Value> {
        self.send_empty(Method::DELETE, &endpoints::post(post_id))
    }

    pub fn like_post(&self, post_id: i64) -> Result<Value> {
        self.send_empty(Method::POST, &endpoints::post_like(post_id))
    }

    pub fn unlike_post(&self, post_id: i64) -> Result<Value> {
        self.send_empty(Method::POST, &endpoints::post_unlike(post_id))
    }

    // Comments

    pub fn create_comment(&self, post_id: i64, comment: &NewComment) -> Result<Value> {
        self.send_value(Method::POST, &endpoints::comments(post_id), Some(comment))
    }

    pub fn update_comment(
        &self,
        post_id: i64,
        comment_id: i64,
        update: &CommentUpdate,
    ) -> Result<Value> {
        self.send_value(
            Method::PATCH,
            &endpoints::comment(post_id, comment_id),
            Some(update),
        )
    }

    pub fn delete_comment(&self, post_id: i64, comment_id: i64) -> Result<Value> {
        self.send_empty(Method::DELETE, &endpoints::comment(post_id, comment_id))
    }
}

impl FoodSource for ApiClient {
    fn search(&self, name: &str) -> Result<Vec<Food>> {
        self.search_foods(name)
    }
}

/// Decode a body that may be empty (204, or a bare 200).
fn read_value(response: Response) -> Result<Value> {
    let text = response.text()?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

/// The server's `message` field when the body is JSON, else the raw body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Map a non-2xx status and its body to an error.
pub fn error_for_status(status: u16, body: &str) -> BoardError {
    let message = error_message(body);
    match status {
        400 => {
            warn!(%message, "bad request");
            BoardError::BadRequest(message)
        }
        401 => {
            warn!("access token rejected, session expired");
            BoardError::Unauthorized
        }
        403 => {
            warn!(%message, "forbidden");
            BoardError::Forbidden(message)
        }
        404 => {
            warn!(%message, "resource not found");
            BoardError::NotFound(message)
        }
        _ => {
            error!(status, %message, "server error");
            BoardError::Api { status, message }
        }
    }
}
