use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ReplicatePredictionsResponse {
    pub id: String,
    pub status: String,
    pub output: Option<Vec<String>>,
    pub error: Option<Value>,
    pub logs: Option<String>,
    pub urls: Option<ReplicateUrls>,
}

#[derive(Debug, Deserialize)]
pub struct ReplicateUrls {
    pub get: String,
    pub cancel: String,
}
