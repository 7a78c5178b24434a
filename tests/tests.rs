// ../tests/tests.rs
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{buffer::Buffer, layout::Rect};
use std::time::{Duration, Instant};
use strain_collector::actions::{self, REST_RECOVERY, TRAVEL_COST};
use strain_collector::app::App;
use strain_collector::context::Context;
use strain_collector::discovery::{self, ScriptedRandom, search};
use strain_collector::message::{HISTORY_LIMIT, MessageLog, TOAST_DURATION};
use strain_collector::player::MAX_ENERGY;
use strain_collector::settings::Settings;
use strain_collector::trail::{self, Step, TrailMap, TrailWalker};
use strain_collector::ui::{Component, ComponentEnum, GameView, MainMenu, TrailWalk};
use strain_collector::*;

fn always_find() -> ScriptedRandom {
    ScriptedRandom::new([0.0], [0])
}

fn never_find() -> ScriptedRandom {
    ScriptedRandom::new([0.99], [0])
}

fn player_at(location: &str) -> PlayerState {
    let mut player = PlayerState::default();
    actions::travel(&mut player, Catalog::builtin(), location).expect("Expected travel to work");
    actions::rest(&mut player);
    player
}

fn strain(id: &str, rarity: Rarity, location: &str) -> StrainRecord {
    StrainRecord {
        id: id.to_string(),
        name: id.to_uppercase(),
        strain_type: StrainType::Hybrid,
        rarity,
        potency: 20,
        effects: vec!["happy".to_string()],
        description: format!("{id} description"),
        location: location.to_string(),
    }
}

fn location(name: &str) -> Location {
    Location {
        name: name.to_string(),
        icon: "*".to_string(),
        description: format!("{name} description"),
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn seeded_app() -> App {
    let settings = Settings {
        seed: Some(7),
        ..Settings::default()
    };
    App::new(settings).expect("Expected the app to start")
}

fn render_text(
    component: &mut impl Component,
    width: u16,
    height: u16,
    player: &PlayerState,
    messages: &MessageLog,
    settings: &Settings,
) -> String {
    let context = Context {
        player,
        catalog: Catalog::builtin(),
        messages,
        settings,
        now: Instant::now(),
    };
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    component.render(area, &mut buffer, &context);
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn game_view_on_tab(tab: char, player: &PlayerState) -> GameView {
    let mut view = GameView::default();
    let context = Context {
        player,
        catalog: Catalog::builtin(),
        messages: &MessageLog::new(),
        settings: &Settings::default(),
        now: Instant::now(),
    };
    assert!(view.on_key(key(KeyCode::Char(tab)), &context).is_none());
    view
}

#[test]
fn test_search_without_energy_leaves_state_unchanged() {
    let catalog = Catalog::builtin();
    for energy in 0..discovery::SEARCH_COST {
        let mut player = PlayerState::default().with_energy(energy);
        let before = player.clone();

        let result = search(&mut player, catalog, &mut always_find());

        assert_eq!(
            result,
            Err(GameError::InsufficientEnergy {
                required: 10,
                available: energy
            })
        );
        assert_eq!(player, before);
    }
}

#[test]
fn test_search_in_exhausted_location_leaves_state_unchanged() {
    let catalog = Catalog::builtin();
    let mut player = PlayerState::default();
    search(&mut player, catalog, &mut always_find()).expect("Expected a discovery");
    let before = player.clone();

    let result = search(&mut player, catalog, &mut always_find());

    assert_eq!(
        result,
        Err(GameError::NothingLeftToFind {
            location: "Forest Grove".to_string()
        })
    );
    assert_eq!(player, before);
}

#[test]
fn test_insufficient_energy_is_checked_before_exhaustion() {
    let catalog = Catalog::builtin();
    let mut player = PlayerState::default();
    search(&mut player, catalog, &mut always_find()).expect("Expected a discovery");
    let mut tired = player.clone().with_energy(5);

    let result = search(&mut tired, catalog, &mut always_find());

    assert!(matches!(result, Err(GameError::InsufficientEnergy { .. })));
}

#[test]
fn test_experience_reward_by_rarity() {
    let catalog = Catalog::builtin();
    let cases = [
        ("Forest Grove", "og-kush", 10),
        ("Mountain Peak", "white-widow", 25),
        ("Psychedelic Gardens", "purple-haze", 50),
    ];
    for (location, id, reward) in cases {
        let mut player = if location == "Forest Grove" {
            PlayerState::default()
        } else {
            player_at(location)
        };
        let experience = player.experience();
        let energy = player.energy();

        let outcome = search(&mut player, catalog, &mut always_find()).expect("Expected a search");

        assert!(matches!(outcome, SearchOutcome::Discovered(strain) if strain.id == id));
        assert_eq!(player.experience(), experience + reward);
        assert_eq!(player.energy(), energy - 10);
        assert_eq!(player.discovered(), [id.to_string()]);
        assert_eq!(player.inventory(), [id.to_string()]);
    }
}

#[test]
fn test_no_luck_costs_energy_and_grants_two_experience() {
    let mut player = PlayerState::default();

    let outcome = search(&mut player, Catalog::builtin(), &mut never_find()).expect("Expected a search");

    assert_eq!(outcome, SearchOutcome::NoLuck);
    assert_eq!(player.energy(), 90);
    assert_eq!(player.experience(), 2);
    assert!(player.discovered().is_empty());
    assert!(player.inventory().is_empty());
}

#[test]
fn test_discovery_threshold_is_exclusive() {
    let catalog = Catalog::builtin();

    let mut player = PlayerState::default();
    let outcome = search(&mut player, catalog, &mut ScriptedRandom::new([0.30], [0]))
        .expect("Expected a search");
    assert_eq!(outcome, SearchOutcome::NoLuck);

    let mut player = PlayerState::default();
    let outcome = search(&mut player, catalog, &mut ScriptedRandom::new([0.2999], [0]))
        .expect("Expected a search");
    assert!(matches!(outcome, SearchOutcome::Discovered(_)));
}

#[test]
fn test_candidate_is_picked_among_undiscovered_strains() {
    let catalog = Catalog::new(
        vec![
            strain("first", Rarity::Common, "Glade"),
            strain("second", Rarity::Rare, "Glade"),
            strain("elsewhere", Rarity::Legendary, "Cave"),
        ],
        vec![location("Glade"), location("Cave")],
    )
    .expect("Expected a valid catalog");
    let mut player = PlayerState::default();
    assert!(matches!(
        actions::travel(&mut player, &catalog, "Forest Grove"),
        Err(GameError::UnknownLocation(_))
    ));
    actions::travel(&mut player, &catalog, "Glade").expect("Expected travel to work");

    let outcome = search(&mut player, &catalog, &mut ScriptedRandom::new([0.1], [1]))
        .expect("Expected a search");
    assert!(matches!(outcome, SearchOutcome::Discovered(strain) if strain.id == "second"));

    let candidates = discovery::candidates(&player, &catalog);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, "first");

    // Index 1 no longer exists; the only remaining candidate is chosen.
    let outcome = search(&mut player, &catalog, &mut ScriptedRandom::new([0.1], [0]))
        .expect("Expected a search");
    assert!(matches!(outcome, SearchOutcome::Discovered(strain) if strain.id == "first"));

    assert_eq!(
        search(&mut player, &catalog, &mut always_find()),
        Err(GameError::NothingLeftToFind {
            location: "Glade".to_string()
        })
    );
}

#[test]
fn test_hundred_forced_searches_discover_og_kush_once() {
    let catalog = Catalog::builtin();
    let mut player = PlayerState::default();
    let mut rng = always_find();

    let mut discoveries = 0;
    let mut exhausted = 0;
    for _ in 0..100 {
        match search(&mut player, catalog, &mut rng) {
            Ok(SearchOutcome::Discovered(strain)) => {
                assert_eq!(strain.id, "og-kush");
                discoveries += 1;
            }
            Ok(SearchOutcome::NoLuck) => panic!("Forced draws never miss"),
            Err(GameError::NothingLeftToFind { .. }) => exhausted += 1,
            Err(e) => panic!("Unexpected error: {e}"),
        }
    }

    assert_eq!(discoveries, 1);
    assert_eq!(exhausted, 99);
    assert_eq!(player.discovered(), ["og-kush".to_string()]);
    assert_eq!(player.inventory(), ["og-kush".to_string()]);
    assert_eq!(player.energy(), 90);
    assert_eq!(player.experience(), 10);
}

#[test]
fn test_random_session_keeps_invariants() {
    let catalog = Catalog::builtin();
    let mut rng = StdRng::seed_from_u64(42);
    let mut player = PlayerState::default();
    let locations: Vec<String> = catalog.locations().iter().map(|l| l.name.clone()).collect();

    for turn in 0..500 {
        let before = player.clone();
        match search(&mut player, catalog, &mut rng) {
            Ok(outcome) => {
                assert_eq!(player.energy(), before.energy() - 10);
                let gained = player.experience() - before.experience();
                assert!([2, 10, 25, 50].contains(&gained));
                assert_eq!(gained, outcome.experience());
            }
            Err(GameError::InsufficientEnergy { .. }) => {
                assert_eq!(player, before);
                actions::rest(&mut player);
            }
            Err(GameError::NothingLeftToFind { .. }) => {
                assert_eq!(player, before);
                let destination = &locations[turn % locations.len()];
                let _ = actions::travel(&mut player, catalog, destination);
            }
            Err(e) => panic!("Unexpected error: {e}"),
        }

        assert!(player.energy() <= MAX_ENERGY);
        assert!(player.experience() >= before.experience());
        assert!(player.discovered().starts_with(before.discovered()));
        for id in player.discovered() {
            assert!(player.inventory().contains(id));
            assert!(catalog.strain(id).is_some());
        }
        assert!(catalog.location(player.current_location()).is_some());
    }
}

#[test]
fn test_travel_requires_fifteen_energy() {
    let catalog = Catalog::builtin();

    let mut player = PlayerState::default().with_energy(TRAVEL_COST - 1);
    let before = player.clone();
    assert_eq!(
        actions::travel(&mut player, catalog, "Arctic Valley"),
        Err(GameError::InsufficientEnergy {
            required: 15,
            available: 14
        })
    );
    assert_eq!(player, before);

    let mut player = PlayerState::default().with_energy(TRAVEL_COST);
    let destination =
        actions::travel(&mut player, catalog, "Arctic Valley").expect("Expected travel to work");
    assert_eq!(destination.icon, "❄️");
    assert_eq!(player.current_location(), "Arctic Valley");
    assert_eq!(player.energy(), 0);
}

#[test]
fn test_travel_to_unknown_or_current_location_is_rejected() {
    let catalog = Catalog::builtin();
    let mut player = PlayerState::default();
    let before = player.clone();

    assert_eq!(
        actions::travel(&mut player, catalog, "Atlantis"),
        Err(GameError::UnknownLocation("Atlantis".to_string()))
    );
    assert_eq!(
        actions::travel(&mut player, catalog, "Forest Grove"),
        Err(GameError::AlreadyThere("Forest Grove".to_string()))
    );
    assert_eq!(player, before);
}

#[test]
fn test_rest_is_capped() {
    let mut player = PlayerState::default().with_energy(90);
    assert_eq!(actions::rest(&mut player), 10);
    assert_eq!(player.energy(), 100);

    let mut player = PlayerState::default().with_energy(50);
    assert_eq!(actions::rest(&mut player), REST_RECOVERY);
    assert_eq!(player.energy(), 80);

    let mut player = PlayerState::default();
    assert_eq!(actions::rest(&mut player), 0);
    assert_eq!(player.energy(), 100);
}

#[test]
fn test_every_action_produces_one_message() {
    let catalog = Catalog::builtin();

    let mut player = PlayerState::default();
    let message = actions::apply(&mut player, catalog, &GameAction::Search, &mut always_find());
    assert_eq!(message, Message::success("🌿 Found OG Kush!"));

    let message = actions::apply(&mut player, catalog, &GameAction::Search, &mut always_find());
    assert_eq!(message, Message::info("You've found all strains in this area!"));

    let message = actions::apply(
        &mut player,
        catalog,
        &GameAction::Travel("Meadow Fields".to_string()),
        &mut never_find(),
    );
    assert_eq!(message, Message::success("Traveled to Meadow Fields ✈️"));

    let message = actions::apply(&mut player, catalog, &GameAction::Search, &mut never_find());
    assert_eq!(message, Message::info("Keep searching... 🔍"));

    let message = actions::apply(&mut player, catalog, &GameAction::Rest, &mut never_find());
    assert_eq!(message, Message::success("Feeling refreshed! 😌"));

    let mut tired = PlayerState::default().with_energy(5);
    let message = actions::apply(&mut tired, catalog, &GameAction::Search, &mut never_find());
    assert_eq!(message, Message::error("Not enough energy! Rest to recover."));
    let message = actions::apply(
        &mut tired,
        catalog,
        &GameAction::Travel("Meadow Fields".to_string()),
        &mut never_find(),
    );
    assert_eq!(message, Message::error("Not enough energy to travel!"));
    assert_eq!(message.message_type, MessageType::Error);
}

#[test]
fn test_builtin_catalog() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.validate(), Ok(()));
    assert_eq!(catalog.strains().len(), 5);
    assert_eq!(catalog.locations().len(), 5);

    let og_kush = catalog.strain("og-kush").expect("Expected OG Kush");
    assert_eq!(og_kush.potency, 24);
    assert_eq!(og_kush.effects, ["relaxed", "euphoric", "sleepy"]);
    assert_eq!(og_kush.rarity.to_string(), "common");
    assert_eq!(og_kush.strain_type.to_string(), "hybrid");

    let local: Vec<&str> = catalog
        .strains_at("Arctic Valley")
        .map(|strain| strain.id.as_str())
        .collect();
    assert_eq!(local, ["northern-lights"]);
    assert!(catalog.location("Atlantis").is_none());

    let mut player = PlayerState::default();
    assert_eq!(catalog.completion(&player), (0, 5));
    search(&mut player, catalog, &mut always_find()).expect("Expected a discovery");
    assert_eq!(catalog.completion(&player), (1, 5));
}

#[test]
fn test_invalid_catalogs_are_rejected() {
    assert_eq!(
        Catalog::new(
            vec![
                strain("twin", Rarity::Common, "Glade"),
                strain("twin", Rarity::Rare, "Glade"),
            ],
            vec![location("Glade")],
        )
        .err(),
        Some(CatalogError::DuplicateStrain("twin".to_string()))
    );
    assert_eq!(
        Catalog::new(vec![], vec![location("Glade"), location("Glade")]).err(),
        Some(CatalogError::DuplicateLocation("Glade".to_string()))
    );
    assert_eq!(
        Catalog::new(
            vec![strain("lost", Rarity::Common, "Nowhere")],
            vec![location("Glade")]
        )
        .err(),
        Some(CatalogError::UnknownHome {
            strain: "lost".to_string(),
            location: "Nowhere".to_string()
        })
    );
}

#[test]
fn test_trail_walk_reaches_the_special_spot() {
    let mut walker = TrailWalker::default();
    assert_eq!(walker.position(), trail::START);

    assert_eq!(walker.step(trail::Direction::Up), Step::Moved);
    assert_eq!(walker.position(), (2, 1));
    assert_eq!(walker.step(trail::Direction::Up), Step::Blocked);
    assert_eq!(walker.position(), (2, 1));

    walker.step(trail::Direction::Down);
    walker.step(trail::Direction::Down);
    walker.step(trail::Direction::Right);
    walker.step(trail::Direction::Right);
    assert_eq!(walker.position(), (4, 3));

    let step = walker.step(trail::Direction::Right);
    assert_eq!(step, Step::FoundSpecial);
    assert_eq!(walker.position(), (5, 3));
    assert_eq!(
        step.message(),
        Some(Message::success("You found a special spot!"))
    );

    // A tree stands right behind the special spot.
    assert_eq!(walker.step(trail::Direction::Right), Step::Blocked);
    assert_eq!(walker.position(), (5, 3));
}

#[test]
fn test_trail_walk_cannot_leave_the_map() {
    let mut walker = TrailWalker::new(TrailMap::parse(&["GG", "GG"]), (0, 0));
    assert_eq!(walker.step(trail::Direction::Left), Step::Blocked);
    assert_eq!(walker.step(trail::Direction::Up), Step::Blocked);
    assert_eq!(walker.position(), (0, 0));

    assert_eq!(walker.step(trail::Direction::Right), Step::Moved);
    assert_eq!(walker.step(trail::Direction::Right), Step::Blocked);
    assert_eq!(walker.step(trail::Direction::Down), Step::Moved);
    assert_eq!(walker.step(trail::Direction::Down), Step::Blocked);
    assert_eq!(walker.position(), (1, 1));
    assert_eq!(Step::Moved.message(), None);
}

#[test]
fn test_settings_round_trip() {
    let dir = tempfile::tempdir().expect("Expected a temp dir");
    let path = dir.path().join("nested").join("settings.json");
    let settings = Settings {
        player_name: "Tester".to_string(),
        debug_mode: true,
        seed: Some(99),
        ..Settings::default()
    };

    settings.save_to_file(&path).expect("Expected settings to save");
    let loaded = Settings::load_settings_from_file(&path).expect("Expected settings to load");

    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("Expected a temp dir");
    let path = dir.path().join("settings.json");

    let settings = Settings::load_or_default(&path);

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.player_name, "Chill Dude");
    assert!(path.exists());
}

#[test]
fn test_partial_settings_use_defaults_for_missing_fields() {
    let dir = tempfile::tempdir().expect("Expected a temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "player_name": "Sprout" }"#).expect("Expected a write");

    let settings = Settings::load_settings_from_file(&path).expect("Expected settings to load");

    assert_eq!(settings.player_name, "Sprout");
    assert_eq!(settings.seed, None);
    assert!(!settings.debug_mode);
}

#[test]
fn test_toast_expires_and_history_is_bounded() {
    let mut log = MessageLog::new();
    let start = Instant::now();
    assert!(log.toast(start).is_none());

    log.push_at(Message::info("hello"), start);
    assert_eq!(log.toast(start), Some(&Message::info("hello")));
    assert!(log.toast(start + TOAST_DURATION).is_none());
    assert_eq!(log.latest(), Some(&Message::info("hello")));

    for i in 0..HISTORY_LIMIT + 10 {
        log.push_at(Message::info(format!("message {i}")), start + Duration::from_secs(1));
    }
    assert_eq!(log.len(), HISTORY_LIMIT);
    assert_eq!(
        log.history().next(),
        Some(&Message::info("message 10"))
    );
}

#[test]
fn test_app_plays_through_the_game_view() {
    let mut app = seeded_app();
    assert!(matches!(app.component(), ComponentEnum::MainMenu(_)));

    app.on_key(key(KeyCode::Enter));
    assert!(matches!(app.component(), ComponentEnum::GameView(_)));

    app.on_key(key(KeyCode::Char('s')));
    assert_eq!(app.player().energy(), 90);
    assert_eq!(app.messages().len(), 1);

    app.on_key(key(KeyCode::Char('r')));
    assert_eq!(app.player().energy(), 100);
    assert_eq!(
        app.messages().latest(),
        Some(&Message::success("Feeling refreshed! 😌"))
    );

    // Second destination in the travel list is Meadow Fields.
    app.on_key(key(KeyCode::Down));
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.player().current_location(), "Meadow Fields");
    assert_eq!(app.player().energy(), 85);

    // Search and rest keys do nothing outside the Explore tab.
    app.on_key(key(KeyCode::Tab));
    app.on_key(key(KeyCode::Char('s')));
    assert_eq!(app.player().energy(), 85);

    app.on_key(key(KeyCode::Esc));
    assert!(matches!(app.component(), ComponentEnum::MainMenu(_)));
    assert_eq!(app.player().current_location(), "Meadow Fields");

    app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.is_running());
}

#[test]
fn test_app_trail_walk_notifies_special_spot() {
    let mut app = seeded_app();
    app.on_key(key(KeyCode::Char('2')));
    assert!(matches!(app.component(), ComponentEnum::TrailWalk(_)));

    for code in [KeyCode::Down, KeyCode::Right, KeyCode::Right, KeyCode::Right] {
        app.on_key(key(code));
    }

    assert_eq!(
        app.messages().latest(),
        Some(&Message::success("You found a special spot!"))
    );
    if let ComponentEnum::TrailWalk(walk) = app.component() {
        assert_eq!(walk.walker().position(), (5, 3));
    }

    app.on_key(key(KeyCode::Esc));
    app.on_key(key(KeyCode::Char('q')));
    assert!(!app.is_running());
}

#[test]
fn test_explore_tab_shows_location_and_travel_map() {
    let player = PlayerState::default();
    let mut view = GameView::default();

    let text = render_text(&mut view, 80, 30, &player, &MessageLog::new(), &Settings::default());

    assert!(text.contains("STRAIN COLLECTOR"));
    assert!(text.contains("Level 1 • Chill Dude"));
    assert!(text.contains("Current Location: Forest Grove"));
    assert!(text.contains("OG Kush"));
    assert!(text.contains("Travel Map"));
    assert!(text.contains("(you are here)"));
}

#[test]
fn test_strain_dex_hides_undiscovered_strains() {
    let mut player = PlayerState::default();
    let mut view = game_view_on_tab('2', &player);

    let text = render_text(&mut view, 80, 30, &player, &MessageLog::new(), &Settings::default());
    assert!(text.contains("Strain Dex (0/5)"));
    assert!(text.contains("???"));
    assert!(text.contains("Discover this strain to learn more!"));
    assert!(!text.contains("OG Kush"));
    assert!(!text.contains("Blue Dream"));

    search(&mut player, Catalog::builtin(), &mut always_find()).expect("Expected a discovery");
    let text = render_text(&mut view, 80, 30, &player, &MessageLog::new(), &Settings::default());
    assert!(text.contains("Strain Dex (1/5)"));
    assert!(text.contains("OG Kush"));
    assert!(text.contains("THC: 24%"));
    assert!(!text.contains("Blue Dream"));
}

#[test]
fn test_stash_lists_finds_or_shows_empty_state() {
    let mut player = PlayerState::default();
    let mut view = game_view_on_tab('3', &player);

    let text = render_text(&mut view, 80, 30, &player, &MessageLog::new(), &Settings::default());
    assert!(text.contains("Your Stash (0 strains)"));
    assert!(text.contains("Your stash is empty!"));
    assert!(text.contains("Go explore and find some strains!"));

    search(&mut player, Catalog::builtin(), &mut always_find()).expect("Expected a discovery");
    let text = render_text(&mut view, 80, 30, &player, &MessageLog::new(), &Settings::default());
    assert!(text.contains("Your Stash (1 strains)"));
    assert!(text.contains("OG Kush"));
    assert!(!text.contains("Your stash is empty!"));
}

#[test]
fn test_debug_mode_renders_message_history() {
    let player = PlayerState::default();
    let mut messages = MessageLog::new();
    messages.push(Message::info("Keep searching"));
    let debug = Settings {
        debug_mode: true,
        ..Settings::default()
    };

    let text = render_text(&mut GameView::default(), 80, 30, &player, &messages, &debug);
    assert!(text.contains("[1] Keep searching"));

    let text = render_text(&mut GameView::default(), 80, 30, &player, &messages, &Settings::default());
    assert!(!text.contains("[1] Keep searching"));
}

#[test]
fn test_main_menu_and_trail_walk_render() {
    let player = PlayerState::default();
    let messages = MessageLog::new();
    let settings = Settings::default();

    let text = render_text(&mut MainMenu::default(), 80, 30, &player, &messages, &settings);
    assert!(text.contains("1. Collect strains"));
    assert!(text.contains("2. Trail walk"));
    assert!(text.contains("3. Quit"));

    let text = render_text(&mut TrailWalk::default(), 80, 30, &player, &messages, &settings);
    assert_eq!(text.matches("@@").count(), 1);
}

#[test]
fn test_views_warn_when_terminal_is_too_small() {
    let player = PlayerState::default();
    let messages = MessageLog::new();
    let settings = Settings::default();
    let warning = "Terminal too small. Please resize.";

    let views = [
        render_text(&mut MainMenu::default(), 60, 20, &player, &messages, &settings),
        render_text(&mut GameView::default(), 60, 20, &player, &messages, &settings),
        render_text(&mut TrailWalk::default(), 60, 20, &player, &messages, &settings),
    ];
    for text in views {
        assert!(text.contains(warning));
        assert!(!text.contains("Forest Grove"));
    }

    // Tiny terminals only clip the warning.
    let text = render_text(&mut GameView::default(), 10, 5, &player, &messages, &settings);
    assert!(!text.trim().is_empty());
    assert!(!text.contains("Level"));
    render_text(&mut MainMenu::default(), 10, 5, &player, &messages, &settings);
    render_text(&mut TrailWalk::default(), 1, 1, &player, &messages, &settings);
}

#[test]
fn test_file_logger_installs_once() {
    let dir = tempfile::tempdir().expect("Expected a temp dir");
    let log_dir = dir.path().join("data");

    strain_collector::logging::init(&log_dir).expect("Expected the logger to install");
    log::info!("logger smoke line");
    let written = std::fs::read_to_string(log_dir.join(strain_collector::logging::LOG_FILE))
        .expect("Expected a log file");
    assert!(written.contains("INFO - logger smoke line"));

    let again = strain_collector::logging::init(&log_dir);
    assert!(matches!(again, Err(AppError::Logger(_))));
}
