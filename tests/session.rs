use std::path::PathBuf;

use loteria_lib::{Combination, Filter, FilterWindows, Game, GeneratorSession, HistorySource, HistoryState, LoadError};

fn fixture(name: &str) -> HistorySource {
    HistorySource::File(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name))
}

#[tokio::test]
async fn initialize_from_file_sorts_and_builds_blocklists() {
    let mut session = GeneratorSession::new(Game::MegaSena.config(), FilterWindows::default());

    let draws = session.initialize(&fixture("mega-sena.json")).await.unwrap();
    assert_eq!(draws, 6);
    assert!(session.is_ready());

    let ids: Vec<u32> = session.recent_draws(20).iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![2803, 2802, 2801, 2800, 2799, 0]);
    assert_eq!(session.recent_draws(20)[4].date, "unknown date");

    // Light filter: draws 2803, 2802 and 2801.
    let light = session.blocked_numbers(Filter::Light);
    assert_eq!(light.len(), 17);
    assert!(light.contains(&"60".to_string()));
    assert!(!light.contains(&"09".to_string()));

    for _ in 0..200 {
        let combination = session.generate(6, Some(Filter::Light)).unwrap();
        for label in combination.labels() {
            assert!(!light.contains(&label), "{} is blocked", label);
        }
    }
}

#[tokio::test]
async fn duplicate_check_after_initialize() {
    let mut session = GeneratorSession::new(Game::MegaSena.config(), FilterWindows::default());
    session.initialize(&fixture("mega-sena.json")).await.unwrap();

    let drawn = Combination::from_labels(&["26", "09", "12", "38", "44", "51"], false).unwrap();
    assert_eq!(session.find_match(&drawn).map(|d| d.id), Some(2800));

    let fresh = Combination::from_labels(&["01", "02", "03", "04", "05", "07"], false).unwrap();
    assert!(session.find_match(&fresh).is_none());
}

#[tokio::test]
async fn lotomania_keeps_double_zero() {
    let mut session = GeneratorSession::new(Game::Lotomania.config(), FilterWindows::default());
    session.initialize(&fixture("lotomania.json")).await.unwrap();

    let heavy = session.blocked_numbers(Filter::Heavy);
    assert_eq!(heavy.first().map(String::as_str), Some("00"));
    assert_eq!(heavy.len(), 40);

    let combination = session.generate(50, Some(Filter::Heavy)).unwrap();
    assert_eq!(combination.len(), 50);
    assert!(combination.numbers().iter().all(|&n| n <= 99));
}

#[tokio::test]
async fn missing_file_switches_to_offline_mode() {
    let mut session = GeneratorSession::new(Game::Quina.config(), FilterWindows::default());

    let err = session.initialize(&fixture("does-not-exist.json")).await.unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
    assert!(matches!(session.state(), HistoryState::Failed(_)));
    assert!(session.status_message().contains("Offline mode"));
    assert_eq!(session.game().name(), "Quina");

    let games = session.generate_games(3, 5, Some(Filter::Heavy)).unwrap();
    assert_eq!(games.len(), 3);
    assert!(games.iter().all(|g| g.previous_draw.is_none()));
}

#[tokio::test]
async fn non_list_body_is_malformed() {
    let mut session = GeneratorSession::new(Game::MegaSena.config(), FilterWindows::default());

    let err = session.initialize(&fixture("not-a-list.json")).await.unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)));
    assert!(!session.is_ready());
}
