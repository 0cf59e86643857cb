//! End-to-end tests for the command-driven game loop.

use engine::{Command, Engine, EngineConfig, EngineError, Outcome, Page, YearOutcome};
use types::{Cash, Quantity, Tag};

fn small_config() -> EngineConfig {
    use engine::CompanySpec;
    use types::Category;

    EngineConfig::default().with_roster(vec![
        CompanySpec::new(
            "Acme",
            Category::Large,
            100.00,
            ["Acme owned boom", "Acme owned bust"],
            ["Acme watched boom", "Acme watched bust"],
        ),
        CompanySpec::new(
            "Zenith",
            Category::Emerging,
            50.00,
            ["Zenith owned boom", "Zenith owned bust"],
            ["Zenith watched boom", "Zenith watched bust"],
        ),
    ])
}

fn advance_and_acknowledge(engine: &mut Engine) -> YearOutcome {
    engine.execute(Command::AdvanceYear).unwrap();
    match engine.execute(Command::Acknowledge).unwrap() {
        Outcome::Year(outcome) => outcome,
        other => panic!("expected year outcome, got {other:?}"),
    }
}

#[test]
fn test_buy_then_sell_updates_ledger() {
    let mut engine = Engine::new(small_config(), 7);
    assert_eq!(engine.balance(), Cash::from_float(10_000.0));

    engine.execute(Command::Navigate(Page::BuyPage)).unwrap();
    let outcome = engine
        .execute(Command::Buy {
            company: 0,
            quantity: Quantity(2),
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Message("Bought 2 shares of Acme.".to_string()));
    assert_eq!(engine.balance(), Cash::from_float(9_800.0));
    assert_eq!(engine.portfolio().quantity_of("Acme"), 2u64);

    engine.execute(Command::Navigate(Page::MainMenu)).unwrap();
    engine.execute(Command::Navigate(Page::SellPage)).unwrap();
    let price = engine.companies()[0].price;
    let outcome = engine
        .execute(Command::Sell {
            company: 0,
            quantity: Quantity(1),
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Message("Sold 1 shares of Acme.".to_string()));
    assert_eq!(engine.balance(), Cash::from_float(9_800.0) + price * Quantity(1));
    assert_eq!(engine.portfolio().quantity_of("Acme"), 1u64);
}

#[test]
fn test_insufficient_funds_is_a_message_not_an_error() {
    let config = small_config().with_initial_balance(Cash::from_float(50.0));
    let mut engine = Engine::new(config, 1);

    engine.execute(Command::Navigate(Page::BuyPage)).unwrap();
    let outcome = engine
        .execute(Command::Buy {
            company: 0,
            quantity: Quantity(1),
        })
        .unwrap();

    assert_eq!(outcome, Outcome::Message("Not enough funds.".to_string()));
    assert_eq!(engine.balance(), Cash::from_float(50.0));
    assert_eq!(engine.portfolio().distinct_holdings(), 0);
}

#[test]
fn test_sell_page_precheck_message() {
    let mut engine = Engine::new(small_config(), 1);

    engine.execute(Command::Navigate(Page::SellPage)).unwrap();
    let outcome = engine
        .execute(Command::Sell {
            company: 1,
            quantity: Quantity(1),
        })
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Message("You don't own any shares of Zenith.".to_string())
    );
}

#[test]
fn test_trades_rejected_off_their_page() {
    let mut engine = Engine::new(small_config(), 1);

    let err = engine
        .execute(Command::Buy {
            company: 0,
            quantity: Quantity(1),
        })
        .unwrap_err();
    assert_eq!(err, EngineError::WrongPage(Page::MainMenu));

    engine.execute(Command::Navigate(Page::BuyPage)).unwrap();
    let err = engine
        .execute(Command::Sell {
            company: 0,
            quantity: Quantity(1),
        })
        .unwrap_err();
    assert_eq!(err, EngineError::WrongPage(Page::BuyPage));
}

#[test]
fn test_unknown_company_index_is_a_contract_violation() {
    let mut engine = Engine::new(small_config(), 1);

    engine.execute(Command::Navigate(Page::BuyPage)).unwrap();
    let err = engine
        .execute(Command::Buy {
            company: 99,
            quantity: Quantity(1),
        })
        .unwrap_err();
    assert_eq!(err, EngineError::UnknownCompany(99));
}

#[test]
fn test_zero_quantity_is_a_contract_violation() {
    let mut engine = Engine::new(small_config(), 1);

    engine.execute(Command::Navigate(Page::BuyPage)).unwrap();
    let err = engine
        .execute(Command::Buy {
            company: 0,
            quantity: Quantity(0),
        })
        .unwrap_err();
    assert_eq!(err, EngineError::InvalidQuantity);

    // No phantom holding was created.
    assert!(!engine.portfolio().holds("Acme"));
    assert_eq!(engine.portfolio().distinct_holdings(), 0);
    assert_eq!(engine.balance(), Cash::from_float(10_000.0));

    engine.execute(Command::Navigate(Page::MainMenu)).unwrap();
    engine.execute(Command::Navigate(Page::SellPage)).unwrap();
    let err = engine
        .execute(Command::Sell {
            company: 0,
            quantity: Quantity(0),
        })
        .unwrap_err();
    assert_eq!(err, EngineError::InvalidQuantity);
}

#[test]
fn test_scenario_page_only_via_advance_year() {
    let mut engine = Engine::new(small_config(), 1);

    let err = engine
        .execute(Command::Navigate(Page::ScenarioPage))
        .unwrap_err();
    assert_eq!(err, EngineError::WrongPage(Page::MainMenu));

    match engine.execute(Command::AdvanceYear).unwrap() {
        Outcome::Scenario(reports) => {
            assert_eq!(reports.len(), 2);
            assert_eq!(reports[0].symbol, "Acme");
            assert_eq!(reports[1].symbol, "Zenith");
            for report in &reports {
                assert!(matches!(report.tag, Tag::Positive | Tag::Negative));
            }
        }
        other => panic!("expected scenario outcome, got {other:?}"),
    }
    assert_eq!(engine.page(), Page::ScenarioPage);

    // A second advance from the scenario page is rejected.
    let err = engine.execute(Command::AdvanceYear).unwrap_err();
    assert_eq!(err, EngineError::WrongPage(Page::ScenarioPage));
}

#[test]
fn test_horizon_terminates_after_final_year() {
    let mut engine = Engine::new(small_config(), 3);
    assert_eq!(engine.horizon(), 10);

    for _ in 0..9 {
        let outcome = advance_and_acknowledge(&mut engine);
        assert!(matches!(outcome, YearOutcome::Continue { .. }));
    }
    assert_eq!(engine.year(), 10);
    assert!(!engine.is_finished());

    let outcome = advance_and_acknowledge(&mut engine);
    let YearOutcome::GameOver { profit_loss } = outcome else {
        panic!("expected game over, got {outcome:?}");
    };
    assert!(engine.is_finished());

    // With no trades ever made, the final valuation is the untouched
    // balance, so profit/loss is exactly zero.
    assert_eq!(profit_loss, Cash::ZERO);

    // The terminal state accepts no further commands.
    let err = engine.execute(Command::AdvanceYear).unwrap_err();
    assert_eq!(err, EngineError::GameOver);
    let err = engine.execute(Command::Navigate(Page::BuyPage)).unwrap_err();
    assert_eq!(err, EngineError::GameOver);
}

#[test]
fn test_final_profit_loss_matches_valuation() {
    let mut engine = Engine::new(small_config(), 11);

    engine.execute(Command::Navigate(Page::BuyPage)).unwrap();
    engine
        .execute(Command::Buy {
            company: 1,
            quantity: Quantity(10),
        })
        .unwrap();
    engine.execute(Command::Navigate(Page::MainMenu)).unwrap();

    let mut last = None;
    while !engine.is_finished() {
        last = Some(advance_and_acknowledge(&mut engine));
    }
    let Some(YearOutcome::GameOver { profit_loss }) = last else {
        panic!("expected game over, got {last:?}");
    };

    let expected =
        engine.portfolio().valuate(engine.companies()) - Cash::from_float(10_000.0);
    assert_eq!(profit_loss, expected);
}

#[test]
fn test_owned_scenarios_use_owned_table() {
    let mut engine = Engine::new(small_config(), 5);

    engine.execute(Command::Navigate(Page::BuyPage)).unwrap();
    engine
        .execute(Command::Buy {
            company: 0,
            quantity: Quantity(1),
        })
        .unwrap();
    engine.execute(Command::Navigate(Page::MainMenu)).unwrap();

    let Outcome::Scenario(reports) = engine.execute(Command::AdvanceYear).unwrap() else {
        panic!("expected scenario outcome");
    };
    assert!(reports[0].text.contains("Acme owned"));
    assert!(reports[1].text.contains("Zenith watched"));
}

#[test]
fn test_all_in_bonus_upgrades_every_table() {
    let mut engine = Engine::new(small_config(), 5);

    engine.execute(Command::Navigate(Page::BuyPage)).unwrap();
    for company in 0..2 {
        engine
            .execute(Command::Buy {
                company,
                quantity: Quantity(1),
            })
            .unwrap();
    }
    engine.execute(Command::Navigate(Page::MainMenu)).unwrap();

    let Outcome::Scenario(reports) = engine.execute(Command::AdvanceYear).unwrap() else {
        panic!("expected scenario outcome");
    };
    assert!(reports[0].text.contains("Acme owned"));
    assert!(reports[1].text.contains("Zenith owned"));
}

#[test]
fn test_same_seed_same_run() {
    let commands = [
        Command::Navigate(Page::BuyPage),
        Command::Buy {
            company: 1,
            quantity: Quantity(3),
        },
        Command::Navigate(Page::MainMenu),
        Command::AdvanceYear,
        Command::Acknowledge,
        Command::AdvanceYear,
        Command::Acknowledge,
    ];

    let mut a = Engine::new(small_config(), 42);
    let mut b = Engine::new(small_config(), 42);
    for command in commands {
        let ra = a.execute(command);
        let rb = b.execute(command);
        assert_eq!(ra, rb);
    }
    assert_eq!(a.display_state(), b.display_state());
}

#[test]
fn test_display_state_tracks_holdings_and_prices() {
    let mut engine = Engine::new(small_config(), 9);

    engine.execute(Command::Navigate(Page::BuyPage)).unwrap();
    engine
        .execute(Command::Buy {
            company: 0,
            quantity: Quantity(2),
        })
        .unwrap();
    engine.execute(Command::Navigate(Page::MainMenu)).unwrap();

    let state = engine.display_state();
    assert_eq!(state.year, 1);
    assert_eq!(state.balance, Cash::from_float(9_800.0));
    assert_eq!(state.companies.len(), 2);
    assert_eq!(state.holdings.len(), 1);
    assert_eq!(state.holdings[0].symbol, "Acme");
    assert_eq!(state.holdings[0].quantity, 2u64);
    // No year-advance yet: previous price equals current price.
    assert_eq!(state.holdings[0].change_pct, 0.0);

    engine.execute(Command::AdvanceYear).unwrap();
    engine.execute(Command::Acknowledge).unwrap();

    let state = engine.display_state();
    assert_eq!(state.year, 2);
    let shown = state.companies[0].price;
    assert_eq!(shown, engine.companies()[0].price);
}
