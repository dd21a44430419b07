mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn bulk_add_reports_partial_batches_in_input_order() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let existing = common::unique_mc_id();
    let fresh = common::unique_mc_id();

    // pre-existing row
    let res = client
        .post(format!("{}/mcadd", server.base_url))
        .json(&common::mc_payload(existing))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let batch = json!([
        common::mc_payload(existing),
        common::mc_payload(existing),
        common::mc_payload(fresh),
    ]);
    let res = client
        .post(format!("{}/mcaddbulk", server.base_url))
        .json(&batch)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::MULTI_STATUS);

    let body = res.json::<Value>().await?;
    assert_eq!(body["requested"], 3);
    assert_eq!(body["inserted"], 1);
    assert_eq!(body["duplicates"], 2);
    assert_eq!(body["status"], "partial");

    let results = body["results"].as_array().expect("results must be an array");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["id"], json!(existing));
    assert_eq!(results[0]["status"], "duplicate");
    assert_eq!(results[1]["status"], "duplicate");
    assert_eq!(results[2]["id"], json!(fresh));
    assert_eq!(results[2]["status"], "created");

    Ok(())
}

#[tokio::test]
async fn bulk_add_whole_success_and_whole_failure() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let url = format!("{}/mcaddbulk", server.base_url);

    let batch = json!([
        common::mc_payload(common::unique_mc_id()),
        common::mc_payload(common::unique_mc_id()),
    ]);

    let res = client.post(&url).json(&batch).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "created");
    assert_eq!(body["inserted"], 2);
    assert_eq!(body["duplicates"], 0);

    // same batch again: every item is now a duplicate
    let res = client.post(&url).json(&batch).send().await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "duplicates");
    assert_eq!(body["inserted"], 0);
    assert_eq!(body["duplicates"], 2);

    Ok(())
}

#[tokio::test]
async fn bulk_add_validates_shape_before_touching_the_store() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let url = format!("{}/mcaddbulk", server.base_url);

    // not an array
    let res = client.post(&url).json(&json!({"id": 1})).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["message"], "expected JSON array");

    // empty array
    let res = client.post(&url).json(&json!([])).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["message"], "array must not be empty");

    // non-object element
    let res = client
        .post(&url)
        .json(&json!([common::mc_payload(common::unique_mc_id()), 42]))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<Value>().await?["message"],
        "each item must be an object, offending index #1"
    );

    // invalid item names the offending index
    let mut bad = common::mc_payload(common::unique_mc_id());
    bad.as_object_mut().unwrap().remove("title");
    let res = client
        .post(&url)
        .json(&json!([common::mc_payload(common::unique_mc_id()), bad]))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<Value>().await?["message"],
        "missing field 'title' for item #1"
    );

    Ok(())
}
