use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::json;
use zeppelin::domain::Credential;
use zeppelin::infrastructure::ZeppelinClient;

pub const USER: &str = "alice";
pub const PASSWORD: &str = "secret";

/// Cookie handed out by the fake login endpoint
pub const SESSION_COOKIE: &str = "JSESSIONID=4e5f6a";

/// Register the login endpoint, accepting only the test credential
pub async fn mock_login(server: &MockServer) -> Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/login")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(format!("userName={}&password={}", USER, PASSWORD));
            then.status(200)
                .header("set-cookie", format!("{}; Path=/; HttpOnly", SESSION_COOKIE))
                .json_body(json!({
                    "status": "OK",
                    "message": "",
                    "body": {"principal": USER, "ticket": "t-1"}
                }));
        })
        .await
}

/// Client pointed at the mock server with the test credential
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> ZeppelinClient {
    ZeppelinClient::new(&server.base_url(), Credential::new(USER, PASSWORD))
        .expect("Client should build")
}

/// Query string carrying the test credential
#[allow(dead_code)]
pub fn auth_query() -> String {
    format!("username={}&password={}", USER, PASSWORD)
}

#[allow(dead_code)]
pub fn ok_reply() -> serde_json::Value {
    json!({"status": "OK", "message": ""})
}

#[allow(dead_code)]
pub fn notebook_list() -> serde_json::Value {
    json!({
        "status": "OK",
        "message": "",
        "body": [
            {"name": "Zeppelin Tutorial", "id": "2A94M5J1Z"},
            {"name": "Scratch", "id": "2BQA35CJZ"}
        ]
    })
}
