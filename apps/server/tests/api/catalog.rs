use crate::support::*;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn sets_are_listed_by_name() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load(
                vec![set("M10", "Magic 2010"), set("LEA", "Limited Edition Alpha")],
                Vec::new(),
            )
            .await?;

            let (status, _headers, body) = app.get("/mtg/sets").await?;
            assert_status(status, StatusCode::OK, "list sets");
            let sets = json_body(&body)?;
            assert_eq!(sets[0]["id"], "LEA");
            assert_eq!(sets[1]["id"], "M10");

            let (status, _headers, body) = app.get("/mtg/sets/lea").await?;
            assert_status(status, StatusCode::OK, "single set");
            assert_eq!(json_body(&body)?["name"], "Limited Edition Alpha");

            let (status, _headers, _body) = app.get("/mtg/sets/XYZ").await?;
            assert_status(status, StatusCode::NOT_FOUND, "missing set");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn terms_skip_un_sets() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let mut cards = abc_fixture();
            cards.push(
                CardBuilder::new("chicken", "Chicken a la King")
                    .color("white")
                    .card_type("creature")
                    .subtype("chicken")
                    .edition("UNH", "rare", 9)
                    .build(),
            );
            app.load_cards(cards).await?;

            let (status, _headers, body) = app.get("/mtg/colors").await?;
            assert_status(status, StatusCode::OK, "colors");
            assert_eq!(json_body(&body)?, json!(["blue", "red"]));

            let (_status, _headers, body) = app.get("/mtg/types").await?;
            assert_eq!(json_body(&body)?, json!(["creature", "land"]));

            let (_status, _headers, body) = app.get("/mtg/subtypes").await?;
            assert_eq!(json_body(&body)?, json!([]));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unknown_route_is_not_found() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app.get("/mtg/nothing").await?;
            assert_status(status, StatusCode::NOT_FOUND, "unknown route");
            assert!(json_body(&body)?["errors"].is_array());

            let (status, headers, _body) = app.get("/health").await?;
            assert_status(status, StatusCode::OK, "health");
            assert_eq!(
                headers.get("cache-control").and_then(|v| v.to_str().ok()),
                Some("public,max-age=3600")
            );
            assert!(headers.contains_key("license"));
            assert!(headers.contains_key("disclaimer"));
            assert!(headers.contains_key("strict-transport-security"));
            assert!(!headers.contains_key("x-content-type-options"));
            Ok(())
        })
    })
    .await
}
