use super::*;

#[test]
fn test_constructors_set_severity() {
    assert_eq!(StatusMessage::info("ok").severity, Severity::Info);
    assert_eq!(StatusMessage::warning("hm").severity, Severity::Warning);
    assert_eq!(StatusMessage::error("no").severity, Severity::Error);
}

#[test]
fn test_text_is_preserved() {
    let message = StatusMessage::info("Scaled 2 object(s) by 45.0000.");
    assert_eq!(message.text, "Scaled 2 object(s) by 45.0000.");
}
