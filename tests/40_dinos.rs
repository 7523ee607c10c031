mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

use dinodex_api::database::{periods, seed};

use common::{empty_request, json_request, TestApp};

#[tokio::test]
async fn dino_lifecycle() -> Result<()> {
    let app = TestApp::new().await?;
    let token = app.session().await?;
    let jurassic = periods::create(&app.state.pool, "Jurassic").await?;

    let body = json!({
        "name": "Stegosaurus",
        "weight": "5t",
        "period_id": jurassic.id.to_string(),
        "image": "/imgs/dinos/stego.png"
    });
    let (status, created) = app.send(json_request(Method::POST, "/dinos", Some(&token), &body)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Stegosaurus");
    assert_eq!(created["height"], "");
    assert_eq!(created["period_id"], json!(jurassic.id));
    let id = created["id"].as_i64().unwrap();

    let uri = format!("/dinos/{id}");
    let (status, fetched) = app.send(empty_request(Method::GET, &uri, Some(&token))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let update = json!({ "name": "Stegosaurus stenops", "oldImage": "/imgs/dinos/stego.png" });
    let (status, updated) = app.send(json_request(Method::PUT, &uri, Some(&token), &update)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Stegosaurus stenops");
    assert_eq!(updated["image"], "/imgs/dinos/stego.png");
    assert_eq!(updated["period_id"], json!(null));

    let (status, list) = app.send(empty_request(Method::GET, "/dinos", Some(&token))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = app.send(empty_request(Method::DELETE, &uri, Some(&token))).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = app.send(empty_request(Method::GET, &uri, Some(&token))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "Dino not found." }));
    Ok(())
}

#[tokio::test]
async fn writes_to_missing_dinos_are_bad_requests() -> Result<()> {
    let app = TestApp::new().await?;
    let token = app.session().await?;

    let (status, _) = app
        .send(json_request(Method::PUT, "/dinos/999", Some(&token), &json!({ "name": "Ghost" })))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.send(empty_request(Method::DELETE, "/dinos/999", Some(&token))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = app.send(empty_request(Method::GET, "/dinos/abc", Some(&token))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": "Invalid dino id" }));
    Ok(())
}

#[tokio::test]
async fn unknown_period_is_a_validation_error() -> Result<()> {
    let app = TestApp::new().await?;
    let token = app.session().await?;

    for period_id in ["42", "Jurassic"] {
        let body = json!({ "name": "Raptor", "period_id": period_id });
        let (status, json) = app.send(json_request(Method::POST, "/dinos", Some(&token), &body)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{period_id}");
        assert_eq!(json["details"][0]["field"], "period_id");
    }
    Ok(())
}

#[tokio::test]
async fn dino_without_name_is_rejected() -> Result<()> {
    let app = TestApp::new().await?;
    let token = app.session().await?;

    let (status, json) = app
        .send(json_request(Method::POST, "/dinos", Some(&token), &json!({ "height": "3m" })))
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(json["details"][0]["field"], "name");
    Ok(())
}

#[tokio::test]
async fn blank_dino_name_is_rejected() -> Result<()> {
    let app = TestApp::new().await?;
    let token = app.session().await?;

    let (status, json) = app
        .send(json_request(Method::POST, "/dinos", Some(&token), &json!({ "name": "" })))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"][0]["field"], "name");

    let (_, list) = app.send(empty_request(Method::GET, "/dinos", Some(&token))).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn categories_list_seeded_periods() -> Result<()> {
    let app = TestApp::new().await?;
    let token = app.session().await?;

    let data = seed::SeedData {
        periods: vec![
            seed::PeriodSeed { name: "Triassic".into() },
            seed::PeriodSeed { name: "Jurassic".into() },
        ],
    };
    seed::apply(&app.state.pool, &data).await?;

    let (status, json) = app.send(empty_request(Method::GET, "/categories", Some(&token))).await?;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = json.as_array().unwrap().iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Triassic", "Jurassic"]);
    Ok(())
}
