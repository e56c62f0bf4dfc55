//! End-to-end keyboard scenarios driven through the public API

use virtual_keyboard::{
    FileStore, Keyboard, Language, MemoryStore, PhysicalKeyEvent, PreferenceStore, ShiftMode,
    TextArea, LANG_KEY,
};

fn key_name(code: &str) -> &'static str {
    match code {
        "ControlLeft" | "ControlRight" => "Control",
        "ShiftLeft" | "ShiftRight" => "Shift",
        _ => "Unidentified",
    }
}

fn down<S: PreferenceStore>(kb: &mut Keyboard<S>, text: &mut TextArea, code: &str) {
    kb.handle_physical(&PhysicalKeyEvent::down(code, key_name(code)), text);
}

fn up<S: PreferenceStore>(kb: &mut Keyboard<S>, text: &mut TextArea, code: &str) {
    kb.handle_physical(&PhysicalKeyEvent::up(code, key_name(code)), text);
}

fn tap<S: PreferenceStore>(kb: &mut Keyboard<S>, text: &mut TextArea, code: &str) {
    down(kb, text, code);
    up(kb, text, code);
}

#[test]
fn test_shift_applies_after_release() {
    let mut kb = Keyboard::standard(MemoryStore::new(), ShiftMode::Latch).unwrap();
    let mut text = TextArea::new();

    tap(&mut kb, &mut text, "KeyQ");
    assert_eq!(text.text(), "q");

    down(&mut kb, &mut text, "ShiftLeft");
    tap(&mut kb, &mut text, "KeyQ");
    assert_eq!(text.text(), "qq");
    up(&mut kb, &mut text, "ShiftLeft");
    assert!(kb.modifiers().is_shift);

    tap(&mut kb, &mut text, "KeyQ");
    assert_eq!(text.text(), "qqQ");
}

#[test]
fn test_hold_mode_behaves_like_a_real_shift() {
    let mut kb = Keyboard::standard(MemoryStore::new(), ShiftMode::Hold).unwrap();
    let mut text = TextArea::new();

    down(&mut kb, &mut text, "ShiftLeft");
    tap(&mut kb, &mut text, "KeyQ");
    tap(&mut kb, &mut text, "Digit1");
    up(&mut kb, &mut text, "ShiftLeft");
    tap(&mut kb, &mut text, "KeyQ");

    assert_eq!(text.text(), "Q!q");
    assert!(!kb.modifiers().is_shift);
}

#[test]
fn test_ctrl_shift_switches_language_once() {
    let mut kb = Keyboard::standard(MemoryStore::new(), ShiftMode::Latch).unwrap();
    let mut text = TextArea::new();

    down(&mut kb, &mut text, "ControlLeft");
    down(&mut kb, &mut text, "ShiftLeft");
    up(&mut kb, &mut text, "ShiftLeft");
    assert_eq!(kb.language(), Language::Ru);
    up(&mut kb, &mut text, "ControlLeft");
    assert_eq!(kb.language(), Language::Ru);

    assert_eq!(kb.store().get(LANG_KEY).as_deref(), Some("ru"));
    assert!(text.is_empty());
}

#[test]
fn test_separate_ctrl_and_shift_do_not_switch() {
    let mut kb = Keyboard::standard(MemoryStore::new(), ShiftMode::Latch).unwrap();
    let mut text = TextArea::new();

    tap(&mut kb, &mut text, "ControlLeft");
    tap(&mut kb, &mut text, "ShiftLeft");

    assert_eq!(kb.language(), Language::En);
    assert_eq!(kb.store().get(LANG_KEY), None);
}

#[test]
fn test_unrelated_release_breaks_the_chord() {
    let mut kb = Keyboard::standard(MemoryStore::new(), ShiftMode::Latch).unwrap();
    let mut text = TextArea::new();

    down(&mut kb, &mut text, "ControlLeft");
    tap(&mut kb, &mut text, "KeyA");
    down(&mut kb, &mut text, "ShiftLeft");
    up(&mut kb, &mut text, "ShiftLeft");
    up(&mut kb, &mut text, "ControlLeft");

    assert_eq!(kb.language(), Language::En);
}

#[test]
fn test_typing_russian_after_switch() {
    let mut kb = Keyboard::standard(MemoryStore::with(LANG_KEY, "ru"), ShiftMode::Latch).unwrap();
    let mut text = TextArea::new();

    assert_eq!(kb.label("KeyQ"), Some("й"));
    for code in ["KeyQ", "Backquote", "Period", "Space", "Digit1"] {
        tap(&mut kb, &mut text, code);
    }
    assert_eq!(text.text(), "йёю 1");

    tap(&mut kb, &mut text, "CapsLock");
    tap(&mut kb, &mut text, "KeyW");
    assert_eq!(text.text(), "йёю 1Ц");
    assert_eq!(text.len(), 6);

    tap(&mut kb, &mut text, "Backspace");
    tap(&mut kb, &mut text, "Backspace");
    assert_eq!(text.text(), "йёю ");
}

#[test]
fn test_language_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    let mut text = TextArea::new();

    {
        let store = FileStore::open(&path).unwrap();
        let mut kb = Keyboard::standard(store, ShiftMode::Latch).unwrap();
        assert_eq!(kb.language(), Language::En);

        down(&mut kb, &mut text, "ControlRight");
        down(&mut kb, &mut text, "ShiftRight");
        up(&mut kb, &mut text, "ControlRight");
        up(&mut kb, &mut text, "ShiftRight");
        assert_eq!(kb.language(), Language::Ru);
    }

    let store = FileStore::open(&path).unwrap();
    let kb = Keyboard::standard(store, ShiftMode::Latch).unwrap();
    assert_eq!(kb.language(), Language::Ru);
    assert_eq!(kb.label("KeyQ"), Some("й"));
}

#[test]
fn test_pointer_and_physical_input_share_state() {
    let mut kb = Keyboard::standard(MemoryStore::new(), ShiftMode::Latch).unwrap();
    let mut text = TextArea::with_text("ab");
    text.set_cursor(1);

    // Pointer click on CapsLock, then a physical key
    kb.press("CapsLock", &mut text);
    kb.release("CapsLock");
    tap(&mut kb, &mut text, "KeyX");
    assert_eq!(text.text(), "aXb");

    kb.press("Delete", &mut text);
    kb.release("Delete");
    assert_eq!(text.text(), "aX");
}

#[test]
fn test_focus_loss_releases_held_keys() {
    let mut kb = Keyboard::standard(MemoryStore::new(), ShiftMode::Hold).unwrap();
    let mut text = TextArea::new();

    down(&mut kb, &mut text, "CapsLock");
    down(&mut kb, &mut text, "ShiftLeft");
    // Window loses focus; the key-ups never arrive
    kb.release_all();

    tap(&mut kb, &mut text, "CapsLock");
    tap(&mut kb, &mut text, "KeyQ");
    assert_eq!(text.text(), "q");
    assert!(!kb.modifiers().is_caps_lock);
    assert!(!kb.modifiers().is_shift);
}
