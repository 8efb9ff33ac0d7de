use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting served at the root of the hello world demo
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    #[serde(rename = "Hello")]
    pub hello: String,
}

/// Description served at `/about` of the hello world demo
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AboutResponse {
    #[serde(rename = "About")]
    pub about: String,
}
