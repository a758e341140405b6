use tombola_core::{
    chance_percent, draw_winner, filter_eligible, Category, DrawError, EventBus, Mode, Participant,
    RngState, Session,
};

fn p(name: &str, weight: u32, category: Category) -> Participant {
    Participant::new(name, weight, category)
}

#[test]
fn selection_frequency_converges_to_weight_share() {
    let pool = vec![
        p("light", 1, Category::Male),
        p("medium", 3, Category::Female),
        p("heavy", 6, Category::Male),
    ];
    let total: u64 = pool.iter().map(|entry| u64::from(entry.weight)).sum();

    let trials = 20_000;
    let mut rng = RngState::from_seed(0xABCDEF);
    let mut counts = [0u32; 3];
    for _ in 0..trials {
        let mut fresh = pool.clone();
        let winner = draw_winner(&mut fresh, &mut rng).unwrap();
        let index = pool
            .iter()
            .position(|entry| entry.name == winner.name)
            .unwrap();
        counts[index] += 1;
    }

    for (index, entry) in pool.iter().enumerate() {
        let expected = f64::from(entry.weight) / total as f64;
        let observed = f64::from(counts[index]) / f64::from(trials);
        assert!(
            (observed - expected).abs() < 0.05,
            "{}: observed {observed}, expected {expected}",
            entry.name
        );
    }
}

#[test]
fn repeated_draws_exhaust_the_pool_then_fail() {
    let mut session = Session::new(RngState::from_seed(11));
    let mut events = EventBus::default();
    session.import("Alice,10\nBob,7\nCarol,5", Category::Female, &mut events);
    assert_eq!(session.eligible().len(), 3);

    let mut drawn = Vec::new();
    for _ in 0..3 {
        drawn.push(session.draw(&mut events).unwrap().name);
    }
    drawn.sort();
    assert_eq!(drawn, vec!["Alice", "Bob", "Carol"]);
    assert!(session.eligible().is_empty());
    assert_eq!(session.draw(&mut events), Err(DrawError::EmptyPool));
    assert_eq!(session.winners().len(), 3);
}

#[test]
fn mode_filter_is_idempotent() {
    let mut session = Session::new(RngState::from_seed(2));
    let mut events = EventBus::default();
    session.import("Alice,40\nBob,30\nCarol,4", Category::Female, &mut events);

    session.set_mode(Some(Mode::Premium), &mut events);
    let first: Vec<Participant> = session.eligible().to_vec();
    session.draw(&mut events).unwrap();

    session.set_mode(Some(Mode::Premium), &mut events);
    assert_eq!(session.eligible(), first.as_slice());
    assert!(session.winners().is_empty());
}

#[test]
fn merge_keeps_first_seen_records_across_three_sources() {
    let mut session = Session::new(RngState::from_seed(2));
    let mut events = EventBus::default();
    session.import("Alice,10", Category::Female, &mut events);
    session.import("Alice,99\nBob,6", Category::Male, &mut events);
    session.import("Bob,1\nCarol,8", Category::Female, &mut events);

    assert_eq!(
        session.roster(),
        [
            p("Alice", 10, Category::Female),
            p("Bob", 6, Category::Male),
            p("Carol", 8, Category::Female),
        ]
    );
}

#[test]
fn unrecognized_mode_yields_empty_pool_not_an_error() {
    let roster = vec![p("Alice", 50, Category::Female)];
    let mode = Mode::parse("jackpot");
    assert_eq!(mode, None);
    assert!(filter_eligible(&roster, mode).is_empty());
}

#[test]
fn listing_percentages_sum_to_one_hundred() {
    let mut session = Session::new(RngState::from_seed(9));
    let mut events = EventBus::default();
    session.import("Alice,10\nBob,30\nCarol,60", Category::Female, &mut events);
    let total = session.total_weight();
    let sum: f64 = session
        .eligible()
        .iter()
        .map(|entry| chance_percent(entry.weight, total))
        .sum();
    assert!((sum - 100.0).abs() < 1e-9);
}
