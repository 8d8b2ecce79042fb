mod helpers;

use helpers::test_db;
use waymark::chat::responder::{respond, FALLBACK_ANSWER};
use waymark::chat::transcript::{ChatTranscript, Role};

#[test]
fn first_containment_match_in_table_order_wins() {
    // The utterance contains both "hi" and "library timing"; "hi" sits
    // earlier in the table, so its answer is returned.
    assert_eq!(
        respond("hi there, what's the library timing"),
        "Hello! 👋 How can I assist you today?"
    );

    // Without an earlier match, the phrase entry is reached
    assert_eq!(
        respond("tell me about library timing"),
        "📚 The library is open from 9 AM to 7 PM, Monday to Saturday."
    );
}

#[test]
fn unmatched_input_returns_the_exact_fallback() {
    assert_eq!(respond("random text"), FALLBACK_ANSWER);
    assert_eq!(respond("random text"), "🤔 Sorry, I don't have an answer for that yet!");
}

#[test]
fn transcript_blob_round_trips_verbatim() {
    let conn = test_db();
    let mut transcript = ChatTranscript::default();

    transcript.append(&conn, "hi", Role::User).unwrap();
    transcript.append(&conn, respond("hi"), Role::Bot).unwrap();
    let rendered = transcript.html().to_string();

    let restored = ChatTranscript::restore(&conn).unwrap();
    assert_eq!(restored.html(), rendered);

    // Appending after restore extends the same blob
    let mut restored = restored;
    restored.append(&conn, "bye", Role::User).unwrap();
    assert!(restored.html().starts_with(&rendered));
    assert!(restored.html().ends_with("<div class=\"message userMsg\">bye</div>"));
}

#[test]
fn transcript_escapes_markup_in_messages() {
    let conn = test_db();
    let mut transcript = ChatTranscript::default();
    transcript.append(&conn, "<b>&\"quotes\"</b>", Role::User).unwrap();

    let restored = ChatTranscript::restore(&conn).unwrap();
    assert_eq!(
        restored.html(),
        "<div class=\"message userMsg\">&lt;b&gt;&amp;&quot;quotes&quot;&lt;/b&gt;</div>"
    );
}
