use std::io::Cursor;

use othello_hotseat::connectors::TextConnector;
use othello_hotseat::{Session, SessionConfig};
use othello_rules::{Outcome, Player};

type TextSession = Session<TextConnector<Cursor<String>, Vec<u8>>>;

fn run_with(script: &str, config: SessionConfig) -> (Option<Outcome>, TextSession) {
    let input = Cursor::new(script.to_string());
    let mut session = Session::new(TextConnector::new(input, Vec::new()), config);
    let outcome = session.run().unwrap();
    (outcome, session)
}

fn run(script: &str) -> (Option<Outcome>, TextSession) {
    run_with(script, SessionConfig::default())
}

fn output(session: TextSession) -> String {
    let bytes = session.into_connector().into_output();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn plays_a_full_game_from_text() {
    let (outcome, session) = run("e6\nf4\ne3\nf6\ng5\nd6\ne7\nf5\nc5\n");

    assert_eq!(outcome, Some(Outcome::BlackWins));
    assert_eq!(session.game().board().counts(), (13, 0));

    let output = output(session);
    assert!(output.contains("Winner: Black wins (13-0)"));
    assert!(output.ends_with("Winner: Black wins (13-0)\n"));
    assert_eq!(output.matches("Winner").count(), 1);
}

#[test]
fn bad_and_illegal_input_is_survivable() {
    let (outcome, session) = run("hello\na1\n2 3\nquit\n");

    assert_eq!(outcome, None);
    // Only "2 3" (D3) was a legal move.
    assert_eq!(session.game().active_player(), Some(Player::White));
    assert_eq!(session.game().board().counts(), (4, 1));

    let output = output(session);
    assert!(output.contains("Could not read \"hello\""));
    assert!(output.contains("White to move (Black: 4, White: 1)"));
}

#[test]
fn end_of_input_quits() {
    let (outcome, session) = run("");
    assert_eq!(outcome, None);
    assert!(output(session).contains("Legal moves: [D3, C4, F5, E6]"));
}

#[test]
fn hints_can_be_hidden() {
    let config = SessionConfig {
        show_hints: false,
        ..SessionConfig::default()
    };
    let (outcome, session) = run_with("", config);
    assert_eq!(outcome, None);

    let output = output(session);
    assert!(output.contains("Black to move"));
    assert!(!output.contains("Legal moves"));
}
