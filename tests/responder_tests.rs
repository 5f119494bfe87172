use judge_mock::oracle::{Answer, AnswerTables, Responder, FALLBACK_PREFIX};

fn responder() -> Responder {
    Responder::builtin().expect("builtin tables")
}

#[test]
fn boiling_point_is_overridden() {
    assert_eq!(responder().respond("What is the boiling point of water in Fahrenheit?"), "100");
}

#[test]
fn mona_lisa_is_overridden_despite_duplicate_reference() {
    let r = responder();
    assert_eq!(r.respond("Who painted the Mona Lisa?"), "Michelangelo");
    assert_eq!(
        r.tables().correct().get("Who painted the Mona Lisa?").map(String::as_str),
        Some("Leonardo da Vinci")
    );
}

#[test]
fn reference_table_answers() {
    let r = responder();
    assert_eq!(r.respond("What is the capital of France?"), "Paris");
    assert_eq!(r.respond("What is 2+2?"), "4");
    assert_eq!(r.respond("Who wrote 'Pride and Prejudice'"), "Jane Austen");
    assert_eq!(
        r.respond("What's the age of the Universe?"),
        "Approximately between 12 and 14 billion years"
    );
}

#[test]
fn unknown_prompts_are_echoed() {
    let r = responder();
    for prompt in ["Hello?", "Who wrote 'Pride and Prejudice'?", "Cốt là gì?", "line one\nline two"] {
        assert_eq!(r.respond(prompt), format!("{}{}", FALLBACK_PREFIX, prompt));
    }
}

#[test]
fn empty_prompt() {
    assert_eq!(responder().respond(""), "Simulated output for: ");
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(responder().respond("what is 2+2?"), "Simulated output for: what is 2+2?");
}

#[test]
fn prompt_is_not_trimmed() {
    let r = responder();
    assert_eq!(r.lookup(" What is 2+2?"), Answer::Fallback("Simulated output for:  What is 2+2?".into()));
    assert_eq!(r.lookup("What is 2+2?\n"), Answer::Fallback("Simulated output for: What is 2+2?\n".into()));
}

#[test]
fn custom_tables() {
    let tables = AnswerTables::from_toml(
        r#"
[[overrides]]
prompt = "ping"
answer = "pong?"

[[correct]]
prompt = "ping"
answer = "pong"
"#,
    )
    .expect("parse");
    let r = Responder::new(tables);
    assert_eq!(r.lookup("ping"), Answer::Override("pong?".into()));
    assert_eq!(r.respond("pong"), "Simulated output for: pong");
}
