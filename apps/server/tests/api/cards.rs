use crate::support::*;
use axum::http::{header, StatusCode};

#[tokio::test]
async fn invalid_search_reports_every_error() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app
                .get("/mtg/cards?color=purple&rarity=legendary&format=pauper")
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "invalid search");

            let json = json_body(&body)?;
            let errors = json["errors"].as_array().cloned().unwrap_or_default();
            assert_eq!(errors.len(), 3, "errors: {json}");
            assert!(errors.contains(&"The color 'purple' is not recognized".into()));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn wildcard_search_is_rejected_before_execution() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app.get("/mtg/cards?name=%25").await?;
            assert_status(status, StatusCode::BAD_REQUEST, "wildcard search");
            assert_eq!(
                json_body(&body)?["errors"][0],
                "Search string can't contain '%' or '_'"
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn nul_characters_are_client_errors() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(abc_fixture()).await?;

            for uri in [
                "/mtg/cards?name=a%00b",
                "/mtg/cards?oracle=%00",
                "/mtg/cards?set=a%00",
                "/mtg/cards?m=%00",
                "/mtg/cards/typeahead?q=%00",
            ] {
                let (status, _headers, body) = app.get(uri).await?;
                assert_status(status, StatusCode::BAD_REQUEST, uri);
                let json = json_body(&body)?;
                assert_eq!(json["errors"].as_array().map(Vec::len), Some(1), "{uri}: {json}");
            }

            for uri in ["/mtg/cards/a%00", "/mtg/sets/a%00"] {
                let (status, _headers, _body) = app.get(uri).await?;
                assert_status(status, StatusCode::NOT_FOUND, uri);
            }
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn search_sets_link_header() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(abc_fixture()).await?;

            let (status, headers, body) = app.get("/mtg/cards?color=red&type=creature").await?;
            assert_status(status, StatusCode::OK, "first page");
            let cards = json_body(&body)?;
            assert_eq!(cards.as_array().map(Vec::len), Some(1));
            assert_eq!(cards[0]["id"], "a");
            assert_eq!(
                headers.get(header::LINK).and_then(|v| v.to_str().ok()),
                Some(
                    "<http://localhost:3000/mtg/cards?color=red&type=creature&page=1>; rel=\"next\""
                )
            );

            let (status, headers, _body) = app.get("/mtg/cards?page=2&color=red").await?;
            assert_status(status, StatusCode::OK, "later page");
            assert_eq!(
                headers.get(header::LINK).and_then(|v| v.to_str().ok()),
                Some(
                    "<http://localhost:3000/mtg/cards?color=red&page=1>; rel=\"prev\", \
                     <http://localhost:3000/mtg/cards?color=red&page=3>; rel=\"next\""
                )
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn configured_public_url_is_used_for_links() -> anyhow::Result<()> {
    with_test_app_with_config(
        |config| config.server.public_base_url = Some("https://api.deckbrew.com".to_string()),
        |app| {
            Box::pin(async move {
                let (_status, headers, _body) = app.get("/mtg/cards").await?;
                assert_eq!(
                    headers.get(header::LINK).and_then(|v| v.to_str().ok()),
                    Some("<https://api.deckbrew.com/mtg/cards?page=1>; rel=\"next\"")
                );
                Ok(())
            })
        },
    )
    .await
}

#[tokio::test]
async fn single_card_and_not_found() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(abc_fixture()).await?;

            let (status, _headers, body) = app.get("/mtg/cards/b").await?;
            assert_status(status, StatusCode::OK, "existing card");
            assert_eq!(json_body(&body)?["name"], "B");

            let (status, _headers, body) = app.get("/mtg/cards/missing").await?;
            assert_status(status, StatusCode::NOT_FOUND, "missing card");
            assert!(json_body(&body)?["errors"].is_array());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn typeahead_matches_name_prefix() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(vec![
                CardBuilder::new("nessian-courser", "Nessian Courser").build(),
                CardBuilder::new("nessian-asp", "Nessian Asp").build(),
                CardBuilder::new("asp-of-nessia", "Asp of Nessia").build(),
            ])
            .await?;

            let (status, _headers, body) = app.get("/mtg/cards/typeahead?q=nessian").await?;
            assert_status(status, StatusCode::OK, "typeahead");
            let ids: Vec<String> = json_body(&body)?
                .as_array()
                .cloned()
                .unwrap_or_default()
                .iter()
                .filter_map(|c| c["id"].as_str().map(String::from))
                .collect();
            assert_eq!(ids, vec!["nessian-asp", "nessian-courser"]);

            let (status, _headers, _body) = app.get("/mtg/cards/typeahead?q=ness_").await?;
            assert_status(status, StatusCode::BAD_REQUEST, "typeahead wildcard");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn typeahead_is_capped() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(numbered_cards(15)).await?;

            let (_status, _headers, body) = app.get("/mtg/cards/typeahead?q=card").await?;
            assert_eq!(json_body(&body)?.as_array().map(Vec::len), Some(10));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn random_redirects_or_404s() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, _body) = app.get("/mtg/cards/random").await?;
            assert_status(status, StatusCode::NOT_FOUND, "random on empty catalog");

            app.load_cards(abc_fixture()).await?;
            let (status, headers, _body) = app.get("/mtg/cards/random").await?;
            assert_status(status, StatusCode::FOUND, "random");
            let location = headers
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            assert!(
                ["/mtg/cards/a", "/mtg/cards/b", "/mtg/cards/c"].contains(&location),
                "location: {location}"
            );
            assert_eq!(
                headers.get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
                Some("no-store")
            );
            Ok(())
        })
    })
    .await
}
