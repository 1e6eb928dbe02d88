//! Route construction and request validation.
//!
//! Nothing here touches the network: routes are inspected through `path()`
//! and `params()`, and invalid requests must fail before a request is sent.
//! The client points at a closed local port so an accidental request would
//! fail loudly instead of reaching Scryfall.

use scryfall_client::routes::ResponseFormat;
use scryfall_client::{CardLookup, ClientConfig, ScryfallClient, ScryfallError};
use scryfall_core::vocab::{BulkDataKind, ImageSize, SortDirection, SortOrder, UniqueMode};
use scryfall_core::{BulkData, CardIdentifier, ScryfallId};

fn offline_client() -> ScryfallClient {
    let config = ClientConfig {
        base_url: "http://127.0.0.1:9/".to_string(),
        max_retries: 0,
        requests_per_second: 1000,
        ..ClientConfig::default()
    };
    ScryfallClient::from_config(&config).unwrap()
}

fn param<'p>(params: &'p scryfall_client::Params, key: &str) -> Option<&'p str> {
    params.get(key).map(String::as_str)
}

#[test]
fn test_search_params() {
    let client = offline_client();
    let route = client
        .cards()
        .search("  t:goblin c:r ")
        .unique(UniqueMode::Art)
        .order(SortOrder::Cmc)
        .dir(SortDirection::Descending)
        .include_extras()
        .page(3);

    assert_eq!(route.path(), "cards/search");
    let params = route.params();
    assert_eq!(param(&params, "q"), Some("t:goblin c:r"));
    assert_eq!(param(&params, "unique"), Some("art"));
    assert_eq!(param(&params, "order"), Some("cmc"));
    assert_eq!(param(&params, "dir"), Some("desc"));
    assert_eq!(param(&params, "include_extras"), Some("true"));
    assert_eq!(param(&params, "include_multilingual"), None);
    assert_eq!(param(&params, "page"), Some("3"));

    let keys: Vec<&str> = params.keys().copied().collect();
    assert_eq!(keys, vec!["dir", "include_extras", "order", "page", "q", "unique"]);
}

#[test]
fn test_named_params() {
    let client = offline_client();
    let route = client
        .cards()
        .named()
        .exact("Counterspell")
        .fuzzy("counterspel")
        .set("mh2")
        .face_back()
        .image_version(ImageSize::Png);

    assert_eq!(route.path(), "cards/named");
    let params = route.params();
    assert_eq!(param(&params, "fuzzy"), Some("counterspel"));
    assert_eq!(param(&params, "exact"), None);
    assert_eq!(param(&params, "set"), Some("mh2"));
    assert_eq!(param(&params, "format"), None);

    let image = route.params_for(ResponseFormat::Image);
    assert_eq!(param(&image, "format"), Some("image"));
    assert_eq!(param(&image, "version"), Some("png"));
    assert_eq!(param(&image, "face"), Some("back"));
}

#[test]
fn test_random_and_autocomplete_params() {
    let client = offline_client();

    let random = client.cards().random().query("is:commander");
    assert_eq!(random.path(), "cards/random");
    assert_eq!(param(&random.params(), "q"), Some("is:commander"));
    assert!(client.cards().random().params().is_empty());

    let auto = client.cards().autocomplete("thal").include_extras();
    assert_eq!(auto.path(), "cards/autocomplete");
    assert_eq!(param(&auto.params(), "q"), Some("thal"));
    assert_eq!(param(&auto.params(), "include_extras"), Some("true"));
}

#[test]
fn test_lookup_routes() {
    let client = offline_client();
    let id: ScryfallId = "56ebc372-aabd-4174-a943-c7bf59e5028d".parse().unwrap();

    assert_eq!(
        client.cards().by_id(id).path(),
        "cards/56ebc372-aabd-4174-a943-c7bf59e5028d"
    );
    assert_eq!(
        client.cards().by_code_and_number("xln", "96").lang("ja").path(),
        "cards/xln/96/ja"
    );
    assert_eq!(
        client.cards().by_mtgo_id(54957).lang("ja").path(),
        "cards/mtgo/54957"
    );
    assert_eq!(
        CardLookup::Id(id).rulings_path(),
        "cards/56ebc372-aabd-4174-a943-c7bf59e5028d/rulings"
    );
    assert_eq!(CardLookup::Arena(67330).rulings_path(), "cards/arena/67330/rulings");
}

#[test]
fn test_collection_body() {
    let client = offline_client();
    let route = client
        .cards()
        .collection()
        .identifier(CardIdentifier::name("Ancient Tomb"))
        .identifier(CardIdentifier::set_and_number("mrd", "150"));

    assert_eq!(route.path(), "cards/collection");
    assert_eq!(
        route.body(),
        serde_json::json!({
            "identifiers": [
                {"name": "Ancient Tomb"},
                {"set": "mrd", "collector_number": "150"}
            ]
        })
    );
}

#[tokio::test]
async fn test_blank_search_fails_before_request() {
    let client = offline_client();
    let err = client.cards().search("   ").send().await.unwrap_err();
    assert!(matches!(err, ScryfallError::MissingParameter("q")));
}

#[tokio::test]
async fn test_named_requires_a_name() {
    let client = offline_client();
    let err = client.cards().named().set("mh2").send().await.unwrap_err();
    assert!(matches!(err, ScryfallError::MissingParameter(_)));
}

#[tokio::test]
async fn test_empty_collection_fails_before_request() {
    let client = offline_client();
    let err = client.cards().collection().send().await.unwrap_err();
    assert!(matches!(err, ScryfallError::MissingParameter("identifiers")));
}

#[tokio::test]
async fn test_oversized_collection_fails_before_request() {
    let client = offline_client();
    let identifiers = (0..76).map(CardIdentifier::multiverse_id);
    let err = client
        .cards()
        .collection()
        .identifiers(identifiers)
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ScryfallError::TooManyIdentifiers { count: 76, max: 75 }
    ));
}

#[tokio::test]
async fn test_blank_set_code_and_mana_cost_rejected() {
    let client = offline_client();
    assert!(matches!(
        client.set_by_code(" ").await.unwrap_err(),
        ScryfallError::MissingParameter("code")
    ));
    assert!(matches!(
        client.parse_mana("").await.unwrap_err(),
        ScryfallError::MissingParameter("cost")
    ));
    assert!(matches!(
        client.rulings_by_code_and_number("", "1").await.unwrap_err(),
        ScryfallError::MissingParameter("set")
    ));
}

#[tokio::test]
async fn test_bulk_kind_checked_before_download() {
    let client = offline_client();
    let rulings: BulkData = serde_json::from_value(serde_json::json!({
        "object": "bulk_data",
        "id": "4b96ccd6-2c6a-4b33-ad2e-7c0a3a6a2d7b",
        "type": "rulings",
        "name": "Rulings",
        "download_uri": "http://127.0.0.1:9/rulings.json",
        "updated_at": "2024-05-01T09:02:17.386+00:00"
    }))
    .unwrap();
    assert_eq!(rulings.kind, BulkDataKind::Rulings);

    let err = client.fetch_bulk_cards(&rulings).await.unwrap_err();
    assert!(matches!(err, ScryfallError::InvalidRequest(_)));
}
