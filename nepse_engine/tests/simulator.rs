use chrono::{TimeZone, Utc};
use nepse_common::MarketError;
use nepse_engine::model::history::generate_historical_series;
use nepse_engine::{FeedEvent, MarketSimulator};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn same_seed_reproduces_every_stream() {
    let mut first = MarketSimulator::with_seed(2024);
    let mut second = MarketSimulator::with_seed(2024);

    let quotes_a = first.generate_all_quotes();
    let quotes_b = second.generate_all_quotes();
    assert_eq!(quotes_a, quotes_b);
    assert_eq!(first.tick_quotes(&quotes_a), second.tick_quotes(&quotes_b));

    let sectors_a = first.generate_sectors();
    let sectors_b = second.generate_sectors();
    assert_eq!(sectors_a, sectors_b);
    assert_eq!(first.tick_sectors(&sectors_a), second.tick_sectors(&sectors_b));

    let history_a = first.generate_historical_series(30).unwrap();
    let history_b = second.generate_historical_series(30).unwrap();
    assert_eq!(history_a.close, history_b.close);
    assert_eq!(history_a.volume, history_b.volume);
}

#[test]
fn different_seeds_diverge() {
    let a = MarketSimulator::with_seed(1).generate_all_quotes();
    let b = MarketSimulator::with_seed(2).generate_all_quotes();
    assert_ne!(a, b);
}

#[test]
fn all_quotes_follow_catalog_order() {
    let mut simulator = MarketSimulator::with_seed(5);
    let instruments = simulator.list_instruments();
    let quotes = simulator.generate_all_quotes();
    assert_eq!(quotes.len(), instruments.len());
    for (quote, instrument) in quotes.iter().zip(&instruments) {
        assert_eq!(quote.symbol, instrument.symbol);
        assert_eq!(quote.name, instrument.name);
    }
}

#[test]
fn history_rejects_negative_days() {
    let mut simulator = MarketSimulator::with_seed(6);
    let result = simulator.generate_historical_series(-1);
    assert!(matches!(result, Err(MarketError::InvalidArgument(_))));
}

#[test]
fn chart_data_spans_thirty_one_days() {
    let mut simulator = MarketSimulator::with_seed(7);
    let series = simulator.generate_chart_data().unwrap();
    assert_eq!(series.len(), 31);
    for i in 1..series.len() {
        assert_eq!(series.open[i], series.close[i - 1]);
    }
}

#[test]
fn history_is_deterministic_for_a_fixed_instant() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let a = generate_historical_series(&mut StdRng::seed_from_u64(9), 10, now).unwrap();
    let b = generate_historical_series(&mut StdRng::seed_from_u64(9), 10, now).unwrap();
    assert_eq!(a, b);
}

#[test]
fn session_scenarios() {
    let simulator = MarketSimulator::with_seed(8);

    // Tuesday 12:00 UTC is 17:45 on the trading clock.
    let tuesday = Utc.with_ymd_and_hms(2025, 3, 4, 12, 0, 0).unwrap();
    let state = simulator.session_state(tuesday);
    assert!(!state.is_open);
    assert_eq!(state.next_open, Utc.with_ymd_and_hms(2025, 3, 5, 5, 15, 0).unwrap());

    // Sunday 06:00 UTC is 11:45 on the trading clock.
    let sunday = Utc.with_ymd_and_hms(2025, 3, 2, 6, 0, 0).unwrap();
    assert!(simulator.session_state(sunday).is_open);
}

#[test]
fn summary_of_nothing_is_empty() {
    let simulator = MarketSimulator::with_seed(10);
    let summary = simulator.summarize(&[]);
    assert_eq!(summary.total_volume, 0);
    assert_eq!(summary.advancers + summary.decliners + summary.unchanged, 0);
    assert!(summary.top_gainers.is_empty() && summary.top_losers.is_empty());
}

#[test]
fn dashboard_chain_over_many_ticks() {
    let mut simulator = MarketSimulator::with_seed(11);
    let start = Utc.with_ymd_and_hms(2025, 3, 3, 5, 0, 0).unwrap();
    let mut state = simulator.initial_dashboard(start);

    for step in 1..=120 {
        let now = start + chrono::Duration::seconds(step);
        let event = match step % 10 {
            0 => FeedEvent::SectorTick,
            3 | 6 | 9 => FeedEvent::IndexTick,
            5 => FeedEvent::QuoteTick,
            _ => FeedEvent::SessionCheck,
        };
        state = simulator.step(state, event, now);
        assert_eq!(state.summary, simulator.summarize(&state.quotes));
        assert!(state.sectors.iter().all(|s| s.change_percent.abs() <= 5.0));
    }
    // 05:02 UTC is 10:47 on the trading clock, still before the open.
    assert!(!state.session.is_open);

    let refreshed = simulator.step(state, FeedEvent::RefreshQuotes, start);
    assert!(refreshed.quotes.iter().all(|q| (100.0..1000.0).contains(&q.price)));
}
