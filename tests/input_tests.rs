//! Input decoding through the facade crate

use console_game::input::{encode_symbol, poll_input, InputSource, ScriptedInput};
use console_game::types::{Symbol, ARROW_SENTINEL, SCAN_LEFT, SCAN_UP};

#[test]
fn test_mixed_stream_decodes_in_order() {
    let mut input = ScriptedInput::new();
    input.push_bytes(&[ARROW_SENTINEL, SCAN_UP]);
    input.push_bytes(b"w");
    input.push_bytes(&[ARROW_SENTINEL, 0x01]);
    input.push_bytes("ü".as_bytes());
    input.push_bytes(&[ARROW_SENTINEL, SCAN_LEFT]);

    let mut decoded = Vec::new();
    while input.key_waiting().unwrap() {
        decoded.push(poll_input(&mut input).unwrap());
    }

    assert_eq!(
        decoded,
        vec![
            Symbol::Up,
            Symbol::Char('w'),
            Symbol::Null,
            Symbol::Char('ü'),
            Symbol::Left,
        ]
    );
}

#[test]
fn test_symbol_encoding_matches_terminal_bytes() {
    assert_eq!(encode_symbol(Symbol::Up).to_vec(), vec![ARROW_SENTINEL, SCAN_UP]);
    assert_eq!(encode_symbol(Symbol::Char('x')).to_vec(), b"x".to_vec());
}

#[test]
fn test_empty_input_never_blocks() {
    let mut input = ScriptedInput::new();
    assert!(!input.key_waiting().unwrap());
}
