//! Integration tests for the HTTP API.
//!
//! These tests expect a running server with a clean-ish database:
//!
//! ```sh
//! cargo run &
//! cargo test -- --ignored
//! ```
//!
//! Every test creates its own records with unique identifiers, so reruns
//! against the same database do not collide.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

/// Unique suffix so repeated runs do not trip uniqueness constraints
fn unique(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

async fn create_user(client: &reqwest::Client, body: Value) -> Value {
    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    response.json().await.unwrap()
}

async fn create_team(client: &reqwest::Client, body: Value) -> Value {
    let response = client
        .post(format!("{}/teams", BASE_URL))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    response.json().await.unwrap()
}

async fn create_equipment(client: &reqwest::Client, team_id: Option<&str>) -> Value {
    let serial = unique("EQ");
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": format!("Test Machine {}", serial),
            "serial_number": serial,
            "category": "Test",
            "location": "Test Bay",
            "maintenance_team_id": team_id,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    response.json().await.unwrap()
}

async fn create_request(client: &reqwest::Client, equipment_id: &str) -> Value {
    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "subject": unique("Inspect"),
            "request_type": "Corrective",
            "equipment_id": equipment_id,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    response.json().await.unwrap()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_root_banner() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "GearGuard API");
}

#[tokio::test]
#[ignore]
async fn test_create_user_applies_defaults() {
    let client = reqwest::Client::new();

    let email = format!("{}@example.com", unique("tech"));
    let user = create_user(
        &client,
        json!({ "name": "Default Role User", "email": email }),
    )
    .await;

    assert_eq!(user["role"], "Technician");
    assert!(user["avatar"].is_null());
    assert!(!user["id"].as_str().unwrap().is_empty());
    assert!(!user["created_at"].as_str().unwrap().is_empty());

    // The record read back matches what create returned
    let fetched: Value = client
        .get(format!("{}/users/{}", BASE_URL, user["id"].as_str().unwrap()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, user);
}

#[tokio::test]
#[ignore]
async fn test_create_user_duplicate_email_conflicts() {
    let client = reqwest::Client::new();

    let email = format!("{}@example.com", unique("dup"));
    create_user(&client, json!({ "name": "First", "email": email })).await;

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({ "name": "Second", "email": email }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_create_user_rejects_invalid_email() {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({ "name": "Bad Email", "email": "not-an-email" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_get_missing_user_returns_404() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/users/does-not-exist", BASE_URL))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
#[ignore]
async fn test_team_resolves_members_and_drops_unknown_ids() {
    let client = reqwest::Client::new();

    let email = format!("{}@example.com", unique("member"));
    let user = create_user(&client, json!({ "name": "Team Member", "email": email })).await;
    let user_id = user["id"].as_str().unwrap();

    let team = create_team(
        &client,
        json!({
            "name": unique("Night Shift"),
            "specialization": "Hydraulics",
            "member_ids": [user_id, "no-such-user"],
        }),
    )
    .await;

    let members = team["members"].as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["id"], user_id);
}

#[tokio::test]
#[ignore]
async fn test_team_update_replaces_members() {
    let client = reqwest::Client::new();

    let first = create_user(
        &client,
        json!({ "name": "A", "email": format!("{}@example.com", unique("a")) }),
    )
    .await;
    let second = create_user(
        &client,
        json!({ "name": "B", "email": format!("{}@example.com", unique("b")) }),
    )
    .await;

    let team = create_team(
        &client,
        json!({
            "name": unique("Rotating Crew"),
            "member_ids": [first["id"]],
        }),
    )
    .await;
    let team_id = team["id"].as_str().unwrap();

    let updated: Value = client
        .put(format!("{}/teams/{}", BASE_URL, team_id))
        .json(&json!({
            "name": unique("Rotating Crew"),
            "member_ids": [second["id"]],
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let members = updated["members"].as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["id"], second["id"]);
}

#[tokio::test]
#[ignore]
async fn test_equipment_create_and_get_round_trip() {
    let client = reqwest::Client::new();

    let item = create_equipment(&client, None).await;
    let id = item["id"].as_str().unwrap();
    assert!(item["maintenance_team_id"].is_null());
    assert!(item["department"].is_null());

    let fetched: Value = client
        .get(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, item);
}

#[tokio::test]
#[ignore]
async fn test_equipment_put_is_a_full_replace() {
    let client = reqwest::Client::new();

    let team = create_team(&client, json!({ "name": unique("Press Crew") })).await;
    let team_id = team["id"].as_str().unwrap();

    let serial = unique("EQ");
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": "Lathe",
            "serial_number": serial,
            "category": "Production",
            "department": "Manufacturing",
            "location": "Bay 1",
            "maintenance_team_id": team_id,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let item: Value = response.json().await.unwrap();
    let id = item["id"].as_str().unwrap();
    assert_eq!(item["department"], "Manufacturing");
    assert_eq!(item["maintenance_team_id"], team_id);

    // Omitted optional fields are reset to null, not carried over
    let response = client
        .put(format!("{}/equipment/{}", BASE_URL, id))
        .json(&json!({
            "name": "Lathe (rebuilt)",
            "serial_number": serial,
            "category": "Production",
            "location": "Bay 2",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();

    assert_eq!(updated["name"], "Lathe (rebuilt)");
    assert_eq!(updated["location"], "Bay 2");
    assert!(updated["department"].is_null());
    assert!(updated["maintenance_team_id"].is_null());
    assert_eq!(updated["created_at"], item["created_at"]);

    let response = client
        .put(format!("{}/equipment/no-such-equipment", BASE_URL))
        .json(&json!({
            "name": "Ghost",
            "serial_number": unique("EQ"),
            "category": "Test",
            "location": "Nowhere",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_equipment_duplicate_serial_conflicts() {
    let client = reqwest::Client::new();

    let item = create_equipment(&client, None).await;

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": "Clone",
            "serial_number": item["serial_number"],
            "category": "Test",
            "location": "Test Bay",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_equipment_delete_then_get_returns_404() {
    let client = reqwest::Client::new();

    let item = create_equipment(&client, None).await;
    let id = item["id"].as_str().unwrap();

    let response = client
        .delete(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Equipment deleted successfully");

    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    // Repeating the delete also reports not found
    let response = client
        .delete(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_request_copies_team_from_equipment_and_applies_defaults() {
    let client = reqwest::Client::new();

    let team = create_team(&client, json!({ "name": unique("Press Crew") })).await;
    let team_id = team["id"].as_str().unwrap();
    let item = create_equipment(&client, Some(team_id)).await;

    let request = create_request(&client, item["id"].as_str().unwrap()).await;

    assert_eq!(request["maintenance_team_id"], team_id);
    assert_eq!(request["status"], "New");
    assert_eq!(request["priority"], "Medium");
    assert!(request["assigned_user_id"].is_null());
    assert_eq!(request["created_at"], request["updated_at"]);
}

#[tokio::test]
#[ignore]
async fn test_request_against_missing_equipment_returns_404_and_persists_nothing() {
    let client = reqwest::Client::new();

    let before: Vec<Value> = client
        .get(format!("{}/requests", BASE_URL))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "subject": "Orphan request",
            "request_type": "Corrective",
            "equipment_id": "no-such-equipment",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Equipment not found");

    let after: Vec<Value> = client
        .get(format!("{}/requests", BASE_URL))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after.len(), before.len());
}

#[tokio::test]
#[ignore]
async fn test_request_patch_semantics() {
    let client = reqwest::Client::new();

    let item = create_equipment(&client, None).await;
    let request = create_request(&client, item["id"].as_str().unwrap()).await;
    let id = request["id"].as_str().unwrap();

    // Absent fields are untouched, present fields are applied
    let patched: Value = client
        .put(format!("{}/requests/{}", BASE_URL, id))
        .json(&json!({ "status": "In Progress", "duration_hours": 1.5 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(patched["status"], "In Progress");
    assert_eq!(patched["duration_hours"], 1.5);
    assert_eq!(patched["subject"], request["subject"]);
    assert_eq!(patched["priority"], request["priority"]);
    assert!(
        patched["updated_at"].as_str().unwrap() > request["updated_at"].as_str().unwrap(),
        "updated_at must move forward on every patch"
    );

    // An explicit null clears a nullable field
    let cleared: Value = client
        .put(format!("{}/requests/{}", BASE_URL, id))
        .json(&json!({ "duration_hours": null }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(cleared["duration_hours"].is_null());
    assert_eq!(cleared["status"], "In Progress");
    assert!(cleared["updated_at"].as_str().unwrap() > patched["updated_at"].as_str().unwrap());
}

#[tokio::test]
#[ignore]
async fn test_request_delete() {
    let client = reqwest::Client::new();

    let item = create_equipment(&client, None).await;
    let request = create_request(&client, item["id"].as_str().unwrap()).await;
    let id = request["id"].as_str().unwrap();

    let response = client
        .delete(format!("{}/requests/{}", BASE_URL, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Request deleted successfully");

    let response = client
        .get(format!("{}/requests/{}", BASE_URL, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_equipment_requests_listing() {
    let client = reqwest::Client::new();

    let item = create_equipment(&client, None).await;
    let equipment_id = item["id"].as_str().unwrap();
    let request = create_request(&client, equipment_id).await;

    let listed: Vec<Value> = client
        .get(format!("{}/equipment/{}/requests", BASE_URL, equipment_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], request["id"]);

    // Unknown equipment id yields an empty list, not a 404
    let response = client
        .get(format!("{}/equipment/no-such-equipment/requests", BASE_URL))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let listed: Vec<Value> = response.json().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_dashboard_stats_internal_consistency() {
    let client = reqwest::Client::new();

    // Guarantee at least one active request exists
    let item = create_equipment(&client, None).await;
    create_request(&client, item["id"].as_str().unwrap()).await;

    let stats: Value = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let by_status = stats["requests_by_status"].as_object().unwrap();
    let by_type = stats["requests_by_type"].as_object().unwrap();

    for key in ["New", "In Progress", "Repaired", "Scrap"] {
        assert!(by_status.contains_key(key), "missing status bucket {}", key);
    }
    for key in ["Corrective", "Preventive"] {
        assert!(by_type.contains_key(key), "missing type bucket {}", key);
    }

    let total = stats["total_requests"].as_i64().unwrap();
    let status_sum: i64 = by_status.values().map(|v| v.as_i64().unwrap()).sum();
    let type_sum: i64 = by_type.values().map(|v| v.as_i64().unwrap()).sum();
    assert_eq!(status_sum, total);
    assert_eq!(type_sum, total);

    let active = stats["active_requests"].as_i64().unwrap();
    let expected_active =
        by_status["New"].as_i64().unwrap() + by_status["In Progress"].as_i64().unwrap();
    assert_eq!(active, expected_active);
    assert!(active >= 1);
}

#[tokio::test]
#[ignore]
async fn test_request_rejects_unknown_type() {
    let client = reqwest::Client::new();

    let item = create_equipment(&client, None).await;
    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "subject": "Bad type",
            "request_type": "Predictive",
            "equipment_id": item["id"],
        }))
        .send()
        .await
        .unwrap();
    // Unknown enum labels are rejected during deserialization
    assert_eq!(response.status(), 422);
}
