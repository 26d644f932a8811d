mod common;

use anyhow::Result;
use common::RecordingSink;
use httpmock::prelude::*;
use std::sync::Arc;
use taxadex::core::orchestrator::NOT_FOUND_MESSAGE;
use taxadex::{
    GbifClassificationProvider, InatTaxonomyProvider, LookupOrchestrator, LookupOutcome,
    StatusColor, WikipediaDescriptionProvider,
};

fn orchestrator_for(
    server: &MockServer,
    sink: Arc<RecordingSink>,
) -> LookupOrchestrator<
    InatTaxonomyProvider,
    GbifClassificationProvider,
    WikipediaDescriptionProvider,
    Arc<RecordingSink>,
> {
    let client = reqwest::Client::new();
    LookupOrchestrator::new(
        InatTaxonomyProvider::new(client.clone(), &server.url("/inat")),
        GbifClassificationProvider::new(client.clone(), &server.url("/gbif")),
        WikipediaDescriptionProvider::new(client, &server.url("/wiki")),
        sink,
    )
}

#[tokio::test]
async fn test_end_to_end_tiger_lookup() -> Result<()> {
    let server = MockServer::start();

    let taxa_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/inat/taxa")
            .query_param("q", "Panthera tigris")
            .query_param("per_page", "1");
        then.status(200).json_body(serde_json::json!({
            "results": [{
                "id": 42071,
                "name": "Panthera tigris",
                "preferred_common_name": "Tiger",
                "default_photo": { "medium_url": "https://static.example/tiger_medium.jpg" },
                "observations_count": 123456,
                "conservation_status": { "status_name": "Endangered" }
            }]
        }));
    });

    let match_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/gbif/species/match")
            .query_param("name", "Panthera tigris");
        then.status(200).json_body(serde_json::json!({
            "kingdom": "Animalia",
            "family": "Felidae"
        }));
    });

    let summary_mock = server.mock(|when, then| {
        when.method(GET).path("/wiki/page/summary/Panthera_tigris");
        then.status(200).json_body(serde_json::json!({
            "extract": "The tiger is the largest living cat species."
        }));
    });

    let sink = Arc::new(RecordingSink::new());
    let orchestrator = orchestrator_for(&server, sink.clone());

    let outcome = orchestrator.run_lookup("Panthera tigris").await;

    taxa_mock.assert();
    match_mock.assert();
    summary_mock.assert();

    let view = match outcome {
        LookupOutcome::Ok(view) => view,
        other => panic!("expected Ok, got {:?}", other),
    };
    assert_eq!(view.common_name, "Tiger");
    assert_eq!(view.status_label, "ENDANGERED");
    assert_eq!(view.status_color, StatusColor::Red);
    assert!(view.verification_url.contains("Panthera tigris"));
    assert_eq!(view.taxonomy_line, "Animalia > Felidae");
    assert_eq!(view.observation_count, "123,456");
    assert_eq!(
        view.description,
        "The tiger is the largest living cat species."
    );
    assert_eq!(
        view.resource_links[2].href,
        "https://www.inaturalist.org/taxa/42071"
    );
    assert!(sink.alerts().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_zero_matches_skip_downstream_providers() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/inat/taxa");
        then.status(200).json_body(serde_json::json!({ "results": [] }));
    });

    let match_mock = server.mock(|when, then| {
        when.method(GET).path("/gbif/species/match");
        then.status(200).json_body(serde_json::json!({}));
    });

    let summary_mock = server.mock(|when, then| {
        when.method(GET).path_contains("/wiki/page/summary");
        then.status(200).json_body(serde_json::json!({ "extract": "" }));
    });

    let sink = Arc::new(RecordingSink::new());
    let orchestrator = orchestrator_for(&server, sink.clone());

    let outcome = orchestrator.run_lookup("asdkjasdkj").await;

    assert!(matches!(outcome, LookupOutcome::NotFound));
    assert_eq!(sink.alerts(), vec![NOT_FOUND_MESSAGE.to_string()]);
    assert_eq!(match_mock.hits(), 0);
    assert_eq!(summary_mock.hits(), 0);
    Ok(())
}

#[tokio::test]
async fn test_description_404_falls_back_without_failing() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/inat/taxa");
        then.status(200).json_body(serde_json::json!({
            "results": [{
                "id": 1,
                "name": "Ailuropoda melanoleuca",
                "preferred_common_name": "Giant Panda",
                "observations_count": 900,
                "conservation_status": { "status_name": "Vulnerable" }
            }]
        }));
    });

    server.mock(|when, then| {
        when.method(GET).path("/gbif/species/match");
        then.status(200).json_body(serde_json::json!({
            "kingdom": "Animalia",
            "family": "Ursidae"
        }));
    });

    server.mock(|when, then| {
        when.method(GET)
            .path("/wiki/page/summary/Ailuropoda_melanoleuca");
        then.status(404).json_body(serde_json::json!({
            "type": "https://mediawiki.org/wiki/HyperSwitch/errors/not_found"
        }));
    });

    let sink = Arc::new(RecordingSink::new());
    let orchestrator = orchestrator_for(&server, sink.clone());

    let outcome = orchestrator.run_lookup("giant panda").await;

    let view = match outcome {
        LookupOutcome::Ok(view) => view,
        other => panic!("expected Ok, got {:?}", other),
    };
    assert_eq!(view.description, "No description available.");
    assert_eq!(view.status_color, StatusColor::Orange);
    // Provider photo was absent, so the placeholder stays.
    assert_eq!(view.image_url, "images/default.jpg");
    assert!(sink.alerts().is_empty());
    Ok(())
}
