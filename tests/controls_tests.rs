// Host-side tests for keyboard controls and the URL buffer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod controls {
    include!("../src/controls.rs");
}

use controls::*;

#[derive(Default)]
struct RecordingNavigator {
    replaced: Vec<String>,
    navigated: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn origin(&self) -> String {
        "https://example.test".to_string()
    }

    fn replace_url(&mut self, url: &str) -> anyhow::Result<()> {
        self.replaced.push(url.to_string());
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> anyhow::Result<()> {
        self.navigated.push(url.to_string());
        Ok(())
    }
}

#[test]
fn named_keys_map_to_commands() {
    assert_eq!(key_command("Escape", false), Some(KeyCommand::ToggleDebug));
    assert_eq!(key_command("ArrowUp", false), Some(KeyCommand::StrengthUp));
    assert_eq!(key_command("ArrowDown", false), Some(KeyCommand::StrengthDown));
    assert_eq!(key_command("Backspace", false), Some(KeyCommand::Backspace));
    assert_eq!(key_command("Enter", false), Some(KeyCommand::Submit));
}

#[test]
fn single_characters_are_typed() {
    assert_eq!(key_command("a", false), Some(KeyCommand::Type('a')));
    assert_eq!(key_command("/", false), Some(KeyCommand::Type('/')));
    assert_eq!(key_command("é", false), Some(KeyCommand::Type('é')));
}

#[test]
fn other_keys_and_chords_are_ignored() {
    assert_eq!(key_command("Tab", false), None);
    assert_eq!(key_command("ArrowLeft", false), None);
    assert_eq!(key_command("", false), None);
    assert_eq!(key_command("Escape", true), None);
    assert_eq!(key_command("a", true), None);
}

#[test]
fn typing_mirrors_buffer_into_history() {
    let mut nav = RecordingNavigator::default();
    let mut buf = UrlBuffer::default();

    buf.push('h', &mut nav).unwrap();
    buf.push('i', &mut nav).unwrap();
    assert_eq!(buf.as_str(), "hi");

    buf.backspace(&mut nav).unwrap();
    assert_eq!(buf.as_str(), "h");

    assert_eq!(
        nav.replaced,
        vec![
            "https://example.test/h",
            "https://example.test/hi",
            "https://example.test/h",
        ]
    );
    assert!(nav.navigated.is_empty());
}

#[test]
fn backspace_on_empty_buffer_is_harmless() {
    let mut nav = RecordingNavigator::default();
    let mut buf = UrlBuffer::default();
    buf.backspace(&mut nav).unwrap();
    assert_eq!(buf.as_str(), "");
    assert_eq!(nav.replaced, vec!["https://example.test/"]);
}

#[test]
fn submit_navigates_only_with_text() {
    let mut nav = RecordingNavigator::default();
    let mut buf = UrlBuffer::default();
    assert!(!buf.submit(&mut nav).unwrap());
    assert!(nav.replaced.is_empty());
    assert!(nav.navigated.is_empty());

    buf.push('x', &mut nav).unwrap();
    assert!(buf.submit(&mut nav).unwrap());
    assert_eq!(nav.replaced.last().unwrap(), "https://example.test");
    assert_eq!(nav.navigated, vec!["https://example.test/x"]);
}
