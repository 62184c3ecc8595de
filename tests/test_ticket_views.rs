mod helpers;

use helpers::*;
use std::collections::HashSet;
use ticketdesk::queries::{apply, filter_tickets, SortOrder, TicketFilter, TicketStats};
use ticketdesk::domain::entities::{Priority, Ticket, TicketStatus};

fn mixed_tickets() -> Vec<Ticket> {
    vec![
        make_ticket("Login loop", TicketStatus::Open, Priority::Low, 1),
        make_ticket("Invoice wrong", TicketStatus::Pending, Priority::High, 2),
        make_ticket("Dark mode", TicketStatus::Resolved, Priority::Medium, 3),
        make_ticket("API 500s", TicketStatus::Open, Priority::High, 4),
        make_ticket("CSV export", TicketStatus::Resolved, Priority::Low, 5),
        make_ticket("Slow search", TicketStatus::Open, Priority::Medium, 6),
    ]
}

#[test]
fn test_all_status_is_superset_of_open() {
    let tickets = mixed_tickets();

    let open = filter_tickets(&tickets, &TicketFilter::default().with_status(TicketStatus::Open));
    let all = filter_tickets(&tickets, &TicketFilter::from_params("all", "all", "").unwrap());

    let open_ids: HashSet<String> = ids(&open).into_iter().collect();
    let all_ids: HashSet<String> = ids(&all).into_iter().collect();

    assert_eq!(open.len(), 3);
    assert!(open.iter().all(|t| t.status == TicketStatus::Open));
    assert!(open_ids.is_subset(&all_ids));
    assert_eq!(all.len(), tickets.len());
}

#[test]
fn test_filter_keeps_original_order() {
    let tickets = mixed_tickets();
    let high = filter_tickets(&tickets, &TicketFilter::default().with_priority(Priority::High));

    let titles: Vec<&str> = high.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Invoice wrong", "API 500s"]);
}

#[test]
fn test_search_combined_with_status() {
    let tickets = mixed_tickets();
    let filter = TicketFilter::from_params("resolved", "all", "MODE").unwrap();

    let found = filter_tickets(&tickets, &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Dark mode");
}

#[test]
fn test_search_with_no_hits() {
    let tickets = mixed_tickets();
    let filter = TicketFilter::default().with_search("refund");
    assert!(filter_tickets(&tickets, &filter).is_empty());
}

#[test]
fn test_priority_sort_groups_for_every_input_order() {
    let base = vec![
        make_ticket("h1", TicketStatus::Open, Priority::High, 1),
        make_ticket("l1", TicketStatus::Open, Priority::Low, 2),
        make_ticket("m1", TicketStatus::Open, Priority::Medium, 3),
        make_ticket("h2", TicketStatus::Open, Priority::High, 4),
        make_ticket("l2", TicketStatus::Open, Priority::Low, 5),
        make_ticket("m2", TicketStatus::Open, Priority::Medium, 6),
    ];

    for permutation in permutations(&base) {
        let sorted = apply(&permutation, &TicketFilter::default(), SortOrder::Priority);
        let ranks: Vec<u8> = sorted.iter().map(|t| t.priority.rank()).collect();

        assert_eq!(ranks, vec![0, 0, 1, 1, 2, 2]);
    }
}

#[test]
fn test_priority_sort_is_stable_within_a_group() {
    let tickets = vec![
        make_ticket("low-a", TicketStatus::Open, Priority::Low, 1),
        make_ticket("high-a", TicketStatus::Open, Priority::High, 2),
        make_ticket("low-b", TicketStatus::Open, Priority::Low, 3),
        make_ticket("high-b", TicketStatus::Open, Priority::High, 4),
    ];

    let sorted = apply(&tickets, &TicketFilter::default(), SortOrder::Priority);
    let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["high-a", "high-b", "low-a", "low-b"]);
}

#[test]
fn test_status_sort_order() {
    let tickets = mixed_tickets();
    let sorted = apply(&tickets, &TicketFilter::default(), SortOrder::Status);

    let statuses: Vec<TicketStatus> = sorted.iter().map(|t| t.status).collect();
    let mut expected = statuses.clone();
    expected.sort_by_key(|s| s.rank());
    assert_eq!(statuses, expected);
    assert_eq!(statuses.first(), Some(&TicketStatus::Open));
    assert_eq!(statuses.last(), Some(&TicketStatus::Resolved));
}

#[test]
fn test_newest_is_default_sort() {
    let tickets = mixed_tickets();
    let sorted = apply(&tickets, &TicketFilter::default(), SortOrder::default());

    for pair in sorted.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
    assert_eq!(sorted[0].title, "Login loop");
}

#[test]
fn test_sort_order_from_ui_string() {
    let tickets = mixed_tickets();
    let order: SortOrder = "oldest".parse().unwrap();
    let sorted = apply(&tickets, &TicketFilter::default(), order);
    assert_eq!(sorted[0].title, "Slow search");
}

#[test]
fn test_stats_follow_the_collection() {
    let mut tickets = mixed_tickets();
    let stats = TicketStats::compute(&tickets);
    assert_eq!(stats.total, 6);
    assert_eq!(stats.open, 3);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.resolved, 2);
    assert_eq!(stats.high, 2);

    tickets[0].status = TicketStatus::Resolved;
    let stats = TicketStats::compute(&tickets);
    assert_eq!(stats.open, 2);
    assert_eq!(stats.resolved, 3);
    assert_eq!(stats.open + stats.pending + stats.resolved, stats.total);
}

#[tokio::test]
async fn test_views_over_live_store() {
    let (mut desk, _store, clock) = setup_empty_desk().await;

    let a = desk.tickets.create(simple_form("First")).await.unwrap();
    clock.advance(chrono::Duration::seconds(30));
    let b = desk
        .tickets
        .create(assigned_form("Second", Priority::High, "Emily Brown"))
        .await
        .unwrap();
    desk.tickets
        .update_status(&a.id, TicketStatus::Pending, "Admin")
        .await
        .unwrap();

    let newest = apply(desk.tickets.tickets(), &TicketFilter::default(), SortOrder::Newest);
    assert_eq!(ids(&newest), vec![b.id.clone(), a.id.clone()]);

    let pending = TicketFilter::from_params("pending", "all", "").unwrap();
    assert_eq!(ids(&filter_tickets(desk.tickets.tickets(), &pending)), vec![a.id.clone()]);

    let stats = desk.dashboard().stats;
    assert_eq!(stats.total, 2);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.high, 1);
}
