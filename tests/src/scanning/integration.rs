use std::sync::Arc;
use std::time::Duration;

use sitelink_common::site::{FixedSite, SiteLabel};
use sitelink_core::menu::{MenuAction, SelectionMenu};
use sitelink_core::resolver;
use sitelink_core::scanner::SiteScanner;

use crate::support::{InFlightProber, ScriptedProber, site};

#[tokio::test]
async fn ukred_menu_lists_reachable_routers_in_table_order() {
    let candidates = resolver::resolve(&site("ukred"));
    assert_eq!(candidates.label, SiteLabel::FixedTable(FixedSite::Ukred));

    let prober = Arc::new(ScriptedProber::new(["10.0.8.147", "10.0.8.146"]));
    let results = SiteScanner::new(prober, 30)
        .scan_site(&candidates, None)
        .await;

    let menu = SelectionMenu::from_results(&results);
    let shown: Vec<String> = menu
        .entries()
        .map(|(n, host)| format!("{n}. {}", host.name))
        .collect();
    assert_eq!(shown, vec!["1. R1A.UKRED.asda.uk", "2. R1B.UKRED.asda.uk"]);
}

#[tokio::test]
async fn reversed_completion_does_not_reorder_results() {
    let candidates = resolver::resolve(&site("7001"));
    let reachable: Vec<String> = candidates
        .candidates
        .iter()
        .step_by(3)
        .map(|c| c.name.clone())
        .collect();

    let prober = Arc::new(
        ScriptedProber::new(reachable.clone())
            .with_reversed_delays(&candidates, Duration::from_millis(2)),
    );
    let results = SiteScanner::new(prober.clone(), 30)
        .scan_site(&candidates, None)
        .await;

    let result_names: Vec<&str> = results.iter().map(|r| r.candidate.name.as_str()).collect();
    let candidate_names: Vec<&str> = candidates.candidates.iter().map(|c| c.name.as_str()).collect();

    let order = prober.completion_order();
    assert_eq!(order.len(), candidates.len());
    assert_ne!(order, candidate_names, "probes finished in declared order");
    assert_ne!(order.first(), candidates.candidates.first().map(|c| &c.name));
    assert_eq!(result_names, candidate_names);

    let menu = SelectionMenu::from_results(&results);
    let menu_names: Vec<String> = menu.entries().map(|(_, h)| h.name.clone()).collect();
    assert_eq!(menu_names, reachable);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn templated_scan_never_exceeds_thirty_in_flight() {
    let candidates = resolver::resolve(&site("7001"));
    assert!(candidates.len() > 30);

    let prober = Arc::new(InFlightProber::default());
    let results = SiteScanner::new(prober.clone(), 30)
        .scan_site(&candidates, None)
        .await;

    assert_eq!(results.len(), candidates.len());
    assert_eq!(prober.calls(), candidates.len());
    assert!(prober.peak() <= 30, "peak was {}", prober.peak());
    assert!(prober.peak() > 1, "templated scan ran sequentially");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn fixed_table_scan_is_sequential() {
    let candidates = resolver::resolve(&site("UKSLO"));

    let prober = Arc::new(InFlightProber::default());
    SiteScanner::new(prober.clone(), 30)
        .scan_site(&candidates, None)
        .await;

    assert_eq!(prober.calls(), 11);
    assert_eq!(prober.peak(), 1);
}

#[tokio::test]
async fn fixed_table_probes_hit_literal_addresses_in_order() {
    let candidates = resolver::resolve(&site("ukred"));
    let prober = Arc::new(ScriptedProber::new(Vec::<String>::new()));

    SiteScanner::new(prober.clone(), 30)
        .scan_site(&candidates, None)
        .await;

    let expected: Vec<String> = candidates
        .candidates
        .iter()
        .map(|c| c.address.unwrap().to_string())
        .collect();
    assert_eq!(prober.completion_order(), expected);
}

#[tokio::test]
async fn unreachable_site_produces_empty_menu() {
    let candidates = resolver::resolve(&site("123"));
    let prober = Arc::new(ScriptedProber::new(Vec::<String>::new()));

    let results = SiteScanner::new(prober, 30)
        .scan_site(&candidates, None)
        .await;

    assert_eq!(results.len(), 11);
    assert!(results.iter().all(|r| !r.reachable));
    assert!(SelectionMenu::from_results(&results).is_empty());
}

#[tokio::test]
async fn selection_numbers_follow_candidate_order() {
    let candidates = resolver::resolve(&site("123"));
    let prober = Arc::new(ScriptedProber::new([
        "shoarea2.s0123.asda.uk",
        "ra.s0123.asda.uk",
        "sgm1.s0123.asda.uk",
    ]));

    let results = SiteScanner::new(prober, 30)
        .scan_site(&candidates, None)
        .await;
    let menu = SelectionMenu::from_results(&results);

    assert_eq!(menu.len(), 3);
    assert_eq!(menu.parse("1"), Ok(MenuAction::Connect(1)));
    assert_eq!(menu.get(1).unwrap().name, "ra.s0123.asda.uk");
    assert_eq!(menu.get(2).unwrap().name, "sgm1.s0123.asda.uk");
    assert_eq!(menu.get(3).unwrap().name, "shoarea2.s0123.asda.uk");
    assert_eq!(menu.parse("m"), Ok(MenuAction::MainMenu));
    assert!(menu.parse("4").is_err());
}
