use anyhow::Context as _;
use deckbrew::Config;
use std::sync::Arc;
use tokio::sync::OnceCell;

static SHARED: OnceCell<Arc<SharedTestResources>> = OnceCell::const_new();

/// Set to `1` or `true` to let database tests pass without a database.
pub const SKIP_DB_TESTS_ENV: &str = "DECKBREW_SKIP_DB_TESTS";

pub struct SharedTestResources {
    /// `None` only when database tests were explicitly skipped.
    pub base_config: Option<Config>,
}

/// Pick the test database, failing unless skipping was asked for.
pub fn resolve_test_database(
    url: Option<String>,
    skip: Option<String>,
) -> anyhow::Result<Option<String>> {
    let skip = skip
        .map(|flag| flag == "1" || flag.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    match url {
        Some(url) => Ok(Some(url)),
        None if skip => Ok(None),
        None => anyhow::bail!(
            "no test database: set TEST_DATABASE_URL or DATABASE_URL, \
             or {SKIP_DB_TESTS_ENV}=1 to skip database tests"
        ),
    }
}

pub async fn shared() -> anyhow::Result<Arc<SharedTestResources>> {
    SHARED
        .get_or_try_init(|| async {
            init_tracing();

            let mut config = Config::load().context("load Config for tests")?;
            let database_url = resolve_test_database(
                config
                    .database
                    .test_database_url
                    .clone()
                    .or_else(|| std::env::var("DATABASE_URL").ok()),
                std::env::var(SKIP_DB_TESTS_ENV).ok(),
            )?;

            let base_config = database_url.map(|url| {
                config.database.url = url;
                config.database.run_migrations = true;
                config.server.public_base_url = None;
                config
            });

            Ok(Arc::new(SharedTestResources { base_config }))
        })
        .await
        .cloned()
}

fn init_tracing() {
    use std::sync::OnceLock;
    use tracing_subscriber::prelude::*;
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "deckbrew=info,sqlx=warn".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .try_init();
    });
}
