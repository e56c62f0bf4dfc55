//! Built-in English/Russian key table (Windows ANSI arrangement)

use super::{Glyphs, KeyDescriptor, KeyKind, SystemAction};

const fn ch(
    code: &'static str,
    row: u8,
    en: [&'static str; 2],
    ru: [&'static str; 2],
) -> KeyDescriptor {
    KeyDescriptor {
        code,
        kind: KeyKind::Character {
            en: Glyphs {
                default_value: en[0],
                shift_value: en[1],
            },
            ru: Glyphs {
                default_value: ru[0],
                shift_value: ru[1],
            },
        },
        row,
        width: 1.0,
    }
}

const fn sys(code: &'static str, row: u8, action: SystemAction, width: f32) -> KeyDescriptor {
    KeyDescriptor {
        code,
        kind: KeyKind::System(action),
        row,
        width,
    }
}

pub(super) const STANDARD: &[KeyDescriptor] = &[
    // Row 0
    ch("Backquote", 0, ["`", "~"], ["ё", "Ё"]),
    ch("Digit1", 0, ["1", "!"], ["1", "!"]),
    ch("Digit2", 0, ["2", "@"], ["2", "\""]),
    ch("Digit3", 0, ["3", "#"], ["3", "№"]),
    ch("Digit4", 0, ["4", "$"], ["4", ";"]),
    ch("Digit5", 0, ["5", "%"], ["5", "%"]),
    ch("Digit6", 0, ["6", "^"], ["6", ":"]),
    ch("Digit7", 0, ["7", "&"], ["7", "?"]),
    ch("Digit8", 0, ["8", "*"], ["8", "*"]),
    ch("Digit9", 0, ["9", "("], ["9", "("]),
    ch("Digit0", 0, ["0", ")"], ["0", ")"]),
    ch("Minus", 0, ["-", "_"], ["-", "_"]),
    ch("Equal", 0, ["=", "+"], ["=", "+"]),
    sys("Backspace", 0, SystemAction::Backspace, 2.0),

    // Row 1
    sys("Tab", 1, SystemAction::Tab, 1.0),
    ch("KeyQ", 1, ["q", "Q"], ["й", "Й"]),
    ch("KeyW", 1, ["w", "W"], ["ц", "Ц"]),
    ch("KeyE", 1, ["e", "E"], ["у", "У"]),
    ch("KeyR", 1, ["r", "R"], ["к", "К"]),
    ch("KeyT", 1, ["t", "T"], ["е", "Е"]),
    ch("KeyY", 1, ["y", "Y"], ["н", "Н"]),
    ch("KeyU", 1, ["u", "U"], ["г", "Г"]),
    ch("KeyI", 1, ["i", "I"], ["ш", "Ш"]),
    ch("KeyO", 1, ["o", "O"], ["щ", "Щ"]),
    ch("KeyP", 1, ["p", "P"], ["з", "З"]),
    ch("BracketLeft", 1, ["[", "{"], ["х", "Х"]),
    ch("BracketRight", 1, ["]", "}"], ["ъ", "Ъ"]),
    ch("Backslash", 1, ["\\", "|"], ["\\", "|"]),
    sys("Delete", 1, SystemAction::Delete, 1.0),

    // Row 2
    sys("CapsLock", 2, SystemAction::CapsLock, 2.0),
    ch("KeyA", 2, ["a", "A"], ["ф", "Ф"]),
    ch("KeyS", 2, ["s", "S"], ["ы", "Ы"]),
    ch("KeyD", 2, ["d", "D"], ["в", "В"]),
    ch("KeyF", 2, ["f", "F"], ["а", "А"]),
    ch("KeyG", 2, ["g", "G"], ["п", "П"]),
    ch("KeyH", 2, ["h", "H"], ["р", "Р"]),
    ch("KeyJ", 2, ["j", "J"], ["о", "О"]),
    ch("KeyK", 2, ["k", "K"], ["л", "Л"]),
    ch("KeyL", 2, ["l", "L"], ["д", "Д"]),
    ch("Semicolon", 2, [";", ":"], ["ж", "Ж"]),
    ch("Quote", 2, ["'", "\""], ["э", "Э"]),
    sys("Enter", 2, SystemAction::Enter, 2.0),

    // Row 3
    sys("ShiftLeft", 3, SystemAction::Shift, 2.0),
    ch("KeyZ", 3, ["z", "Z"], ["я", "Я"]),
    ch("KeyX", 3, ["x", "X"], ["ч", "Ч"]),
    ch("KeyC", 3, ["c", "C"], ["с", "С"]),
    ch("KeyV", 3, ["v", "V"], ["м", "М"]),
    ch("KeyB", 3, ["b", "B"], ["и", "И"]),
    ch("KeyN", 3, ["n", "N"], ["т", "Т"]),
    ch("KeyM", 3, ["m", "M"], ["ь", "Ь"]),
    ch("Comma", 3, [",", "<"], ["б", "Б"]),
    ch("Period", 3, [".", ">"], ["ю", "Ю"]),
    ch("Slash", 3, ["/", "?"], ["/", "?"]),
    ch("ArrowUp", 3, ["↑", "↑"], ["↑", "↑"]),
    sys("ShiftRight", 3, SystemAction::Shift, 2.0),

    // Row 4
    sys("ControlLeft", 4, SystemAction::Ctrl, 1.0),
    sys("MetaLeft", 4, SystemAction::Win, 1.0),
    sys("AltLeft", 4, SystemAction::Alt, 1.0),
    sys("Space", 4, SystemAction::Space, 7.0),
    sys("AltRight", 4, SystemAction::Alt, 1.0),
    ch("ArrowLeft", 4, ["←", "←"], ["←", "←"]),
    ch("ArrowDown", 4, ["↓", "↓"], ["↓", "↓"]),
    ch("ArrowRight", 4, ["→", "→"], ["→", "→"]),
    sys("ControlRight", 4, SystemAction::Ctrl, 1.0),
];
