mod common;

use catalog_backend::AppData;
use catalog_backend::api::build_app;
use common::{item_json, setup_test_app_data};
use poem::Endpoint;
use poem::http::StatusCode;
use poem::test::{TestClient, TestResponse};
use serde_json::{Value, json};

async fn body_json(resp: TestResponse) -> Value {
    resp.0
        .into_body()
        .into_json::<Value>()
        .await
        .expect("Response body is not JSON")
}

#[tokio::test]
async fn test_create_filter_delete_get_round_trip() {
    let app_data = setup_test_app_data().await;
    let cli = TestClient::new(build_app(&app_data, "http://localhost/api"));

    let resp = cli
        .post("/api/item/create")
        .body_json(&item_json("X", "Posters"))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["message"], "Item created successfully");
    assert_eq!(created["item"]["humanId"], "item-0001");
    let id = created["item"]["id"].as_str().unwrap().to_string();

    cli.post("/api/item/create")
        .body_json(&item_json("Y", "Business Cards"))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let resp = cli
        .get("/api/item/get")
        .query("category", &"Posters")
        .send()
        .await;
    resp.assert_status_is_ok();
    let listed = body_json(resp).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "X");

    let resp = cli.delete(format!("/api/item/delete/{}", id)).send().await;
    resp.assert_status_is_ok();
    assert_eq!(body_json(resp).await["message"], "Item has been deleted!");

    let resp = cli.get(format!("/api/item/get/{}", id)).send().await;
    resp.assert_status(StatusCode::NOT_FOUND);
    let error = body_json(resp).await;
    assert_eq!(error["statusCode"], 404);
    assert_eq!(error["message"], "Item not found!");
}

#[tokio::test]
async fn test_create_without_description_is_rejected() {
    let app_data = setup_test_app_data().await;
    let cli = TestClient::new(build_app(&app_data, "http://localhost/api"));

    let mut payload = item_json("X", "Posters");
    payload.as_object_mut().unwrap().remove("description");

    let resp = cli.post("/api/item/create").body_json(&payload).send().await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let error = body_json(resp).await;
    assert_eq!(error["statusCode"], 400);
    assert_eq!(error["fields"], json!(["description"]));

    let resp = cli.get("/api/item/get").send().await;
    resp.assert_status_is_ok();
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn test_update_applies_partial_patch() {
    let app_data = setup_test_app_data().await;
    let cli = TestClient::new(build_app(&app_data, "http://localhost/api"));

    let resp = cli
        .post("/api/item/create")
        .body_json(&item_json("Old", "Posters"))
        .send()
        .await;
    let created = body_json(resp).await;
    let id = created["item"]["id"].as_str().unwrap().to_string();

    let resp = cli
        .post(format!("/api/item/update/{}", id))
        .body_json(&json!({ "name": "New", "price": 20.0 }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let updated = body_json(resp).await;
    assert_eq!(updated["message"], "Item updated successfully");
    assert_eq!(updated["item"]["name"], "New");
    assert_eq!(updated["item"]["price"], 20.0);
    assert_eq!(updated["item"]["category"], "Posters");
    assert_eq!(updated["item"]["humanId"], created["item"]["humanId"]);
}

#[tokio::test]
async fn test_update_unknown_item_is_not_found() {
    let app_data = setup_test_app_data().await;
    let cli = TestClient::new(build_app(&app_data, "http://localhost/api"));

    let resp = cli
        .post("/api/item/update/missing")
        .body_json(&json!({ "name": "New" }))
        .send()
        .await;

    resp.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_item_is_not_found() {
    let app_data = setup_test_app_data().await;
    let cli = TestClient::new(build_app(&app_data, "http://localhost/api"));

    let resp = cli.delete("/api/item/delete/missing").send().await;

    resp.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_sort_and_malformed_limit() {
    let app_data = setup_test_app_data().await;
    let cli = TestClient::new(build_app(&app_data, "http://localhost/api"));

    for name in ["B poster", "A poster", "C flyer"] {
        cli.post("/api/item/create")
            .body_json(&item_json(name, "Posters"))
            .send()
            .await
            .assert_status(StatusCode::CREATED);
    }

    let resp = cli
        .get("/api/item/get")
        .query("searchTerm", &"POSTER")
        .query("sort", &"name")
        .query("order", &"asc")
        .query("limit", &"abc")
        .send()
        .await;
    resp.assert_status_is_ok();
    let listed = body_json(resp).await;
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["A poster", "B poster"]);
}

#[tokio::test]
async fn test_option_endpoints_return_split_values() {
    let app_data = setup_test_app_data().await;
    let cli = TestClient::new(build_app(&app_data, "http://localhost/api"));

    cli.post("/api/item/create")
        .body_json(&item_json("One", "Posters, Flyers"))
        .send()
        .await
        .assert_status(StatusCode::CREATED);
    cli.post("/api/item/create")
        .body_json(&item_json("Two", "Flyers"))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let resp = cli.get("/api/item/categories").send().await;
    resp.assert_status_is_ok();
    assert_eq!(body_json(resp).await, json!(["Flyers", "Posters"]));

    let resp = cli.get("/api/item/thicknesses").send().await;
    resp.assert_status_is_ok();
    assert_eq!(body_json(resp).await, json!(["300"]));
}

#[tokio::test]
async fn test_health_reports_database_status() {
    let app_data = setup_test_app_data().await;
    let cli = TestClient::new(build_app(&app_data, "http://localhost/api"));

    let resp = cli.get("/api/health").send().await;

    resp.assert_status_is_ok();
    assert_eq!(body_json(resp).await["status"], "healthy");
}

/// Build the app from values owned by this function, as `main` does
fn owned_app(app_data: AppData) -> impl Endpoint + 'static {
    let server_url = format!("http://localhost:{}/api", 3000);
    build_app(&app_data, &server_url)
}

#[tokio::test]
async fn test_app_outlives_the_values_it_was_built_from() {
    let app = owned_app(setup_test_app_data().await);
    let cli = TestClient::new(app);

    cli.post("/api/item/create")
        .body_json(&item_json("X", "Posters"))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let resp = cli.get("/api/item/get").send().await;
    resp.assert_status_is_ok();
    assert_eq!(body_json(resp).await.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_limit_beyond_signed_range_returns_every_item() {
    let app_data = setup_test_app_data().await;
    let cli = TestClient::new(build_app(&app_data, "http://localhost/api"));

    for name in ["A", "B"] {
        cli.post("/api/item/create")
            .body_json(&item_json(name, "Posters"))
            .send()
            .await
            .assert_status(StatusCode::CREATED);
    }

    let resp = cli
        .get("/api/item/get")
        .query("limit", &"18446744073709551615")
        .send()
        .await;
    resp.assert_status_is_ok();
    assert_eq!(body_json(resp).await.as_array().map(Vec::len), Some(2));
}
