use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use test_context::test_context;

fn voice_ids(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|voice| voice["id"].as_str().unwrap())
        .collect()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_group_offered_languages_by_default(ctx: &TestContext) {
    let response = ctx.client.get("/api/voices").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let languages = body["languages"].as_object().unwrap();

    let mut keys: Vec<&str> = languages.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["English", "Spanish (Spain)"]);

    // Provider order is kept within each bucket
    assert_eq!(
        voice_ids(&languages["English"]["neural"]),
        vec!["en-US-JennyNeural", "en-GB-RyanNeural"]
    );
    assert_eq!(
        voice_ids(&languages["English"]["standard"]),
        vec!["en-US-ZiraRUS"]
    );
    assert_eq!(
        voice_ids(&languages["Spanish (Spain)"]["neural"]),
        vec!["es-ES-ElviraNeural"]
    );
    assert_eq!(body["total"].as_u64(), Some(4));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_filter_to_one_language(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/voices?language=Spanish%20(Spain)")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let languages = body["languages"].as_object().unwrap();
    assert_eq!(languages.len(), 1);
    assert!(languages.contains_key("Spanish (Spain)"));
    assert_eq!(body["total"].as_u64(), Some(1));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_every_locale_when_asked(ctx: &TestContext) {
    let response = ctx.client.get("/api/voices?all=true").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let languages = body["languages"].as_object().unwrap();

    assert!(languages.contains_key("French"));
    assert_eq!(
        voice_ids(&languages["Spanish"]["neural"]),
        vec!["es-ES-ElviraNeural", "es-MX-DaliaNeural"]
    );
    assert_eq!(body["total"].as_u64(), Some(6));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_language(ctx: &TestContext) {
    let response = ctx.client.get("/api/voices?language=Klingon").await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Unsupported language: Klingon");
}
