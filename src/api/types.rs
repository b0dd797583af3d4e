use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Body for creating a board post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub diet_plan_id: Option<i64>,
}

/// Partial post update. A `diet_plan_id` of -1 detaches the linked plan.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_plan_id: Option<i64>,
}

impl PostUpdate {
    pub const DETACH_PLAN: i64 = -1;
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdate {
    pub new_content: String,
}

/// Result of creating a post: the id parsed from `Location`, and the status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPost {
    pub post_id: Option<String>,
    pub status: u16,
}

/// Last path segment of a `Location` header, e.g. `/api/posts/12` -> `12`.
pub fn post_id_from_location(location: Option<&str>) -> Option<String> {
    location
        .and_then(|l| l.rsplit('/').next())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Daily-diet create body with `dietPlanId` filled in. Keys already in `data` win.
pub fn with_plan_id(plan_id: i64, data: Value) -> Value {
    match data {
        Value::Object(mut map) => {
            map.entry("dietPlanId").or_insert(json!(plan_id));
            Value::Object(map)
        }
        _ => json!({ "dietPlanId": plan_id }),
    }
}
