use crate::support::*;

fn sorted(mut ids: Vec<String>) -> Vec<String> {
    ids.sort();
    ids
}

fn is_subset(small: &[String], large: &[String]) -> bool {
    small.iter().all(|id| large.contains(id))
}

#[tokio::test]
async fn color_and_type_intersect() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(abc_fixture()).await?;

            let ids = app.search_ids("color=red&type=creature&page=0").await?;
            assert_eq!(ids, vec!["a"]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn no_facets_returns_everything_by_name() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(abc_fixture()).await?;

            let ids = app.search_ids("").await?;
            assert_eq!(ids, vec!["a", "b", "c"]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn adding_a_value_never_shrinks_results() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(abc_fixture()).await?;

            let red = app.search_ids("color=red").await?;
            let red_or_blue = app.search_ids("color=red&color=blue").await?;
            assert_eq!(sorted(red.clone()), vec!["a", "c"]);
            assert!(is_subset(&red, &red_or_blue));
            assert_eq!(red_or_blue, vec!["a", "b", "c"]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn adding_a_facet_never_grows_results() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(abc_fixture()).await?;

            let creatures = app.search_ids("type=creature").await?;
            let red_creatures = app.search_ids("type=creature&color=red").await?;
            let common_red_creatures = app
                .search_ids("type=creature&color=red&rarity=uncommon")
                .await?;

            assert!(is_subset(&red_creatures, &creatures));
            assert!(is_subset(&common_red_creatures, &red_creatures));
            assert!(common_red_creatures.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn multicolor_uses_the_stored_flag() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let mut cards = abc_fixture();
            cards.push(
                CardBuilder::new("d", "D")
                    .color("red")
                    .color("green")
                    .card_type("creature")
                    .build(),
            );
            app.load_cards(cards).await?;

            assert_eq!(app.search_ids("multicolor=true").await?, vec!["d"]);
            assert_eq!(
                app.search_ids("multicolor=false&color=red").await?,
                vec!["a", "c"]
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn name_and_oracle_match_substrings() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(vec![
                CardBuilder::new("lightning-bolt", "Lightning Bolt")
                    .text("Lightning Bolt deals 3 damage to any target.")
                    .build(),
                CardBuilder::new("fireball", "Fireball")
                    .text("Fireball deals X damage divided evenly.")
                    .build(),
                CardBuilder::new("divination", "Divination")
                    .text("Draw two cards.")
                    .build(),
            ])
            .await?;

            assert_eq!(
                app.search_ids("name=BOLT&name=fire").await?,
                vec!["fireball", "lightning-bolt"]
            );
            assert_eq!(app.search_ids("oracle=damage").await?.len(), 2);
            assert_eq!(
                app.search_ids("name=bolt&oracle=draw").await?,
                Vec::<String>::new()
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn derived_facets_come_from_editions_and_formats() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(vec![
                CardBuilder::new("black-lotus", "Black Lotus")
                    .card_type("artifact")
                    .edition("LEA", "Rare", 600)
                    .format("vintage", "restricted")
                    .format("legacy", "banned")
                    .build(),
                CardBuilder::new("counterspell", "Counterspell")
                    .color("blue")
                    .card_type("instant")
                    .edition("LEB", "uncommon", 601)
                    .format("legacy", "legal")
                    .build(),
            ])
            .await?;

            assert_eq!(app.search_ids("set=lea").await?, vec!["black-lotus"]);
            assert_eq!(app.search_ids("set=LEA").await?, vec!["black-lotus"]);
            assert_eq!(app.search_ids("rarity=rare").await?, vec!["black-lotus"]);
            assert_eq!(app.search_ids("m=601").await?, vec!["counterspell"]);
            assert_eq!(
                app.search_ids("multiverseid=600&multiverseid=601").await?,
                vec!["black-lotus", "counterspell"]
            );
            assert_eq!(app.search_ids("format=legacy").await?, vec!["counterspell"]);
            assert_eq!(app.search_ids("status=banned").await?, vec!["black-lotus"]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn reimport_replaces_facets() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(abc_fixture()).await?;
            app.load_cards(vec![CardBuilder::new("a", "A")
                .color("green")
                .card_type("creature")
                .build()])
            .await?;

            assert_eq!(app.search_ids("color=red").await?, vec!["c"]);
            assert_eq!(app.search_ids("color=green").await?, vec!["a"]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn backslashes_in_substrings_match_literally() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.load_cards(vec![
                CardBuilder::new("plain", "Ancestral Recall").build(),
                CardBuilder::new("slash", "Path\\Away")
                    .text("Exile target creature.\\n")
                    .build(),
            ])
            .await?;

            assert_eq!(app.search_ids("name=%5CA").await?, vec!["slash"]);
            assert_eq!(app.search_ids("oracle=%5Cn").await?, vec!["slash"]);
            assert!(app.search_ids("name=%5CR").await?.is_empty());
            Ok(())
        })
    })
    .await
}
