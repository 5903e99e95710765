#![no_main]

use libfuzzer_sys::fuzz_target;
use tokens::tokenize;

fuzz_target!(|data: &str| {
    let tokens = tokenize(data);
    assert!(!tokens.is_empty());
    assert!(tokens.last().is_some_and(|t| t.trailing));
    for token in &tokens[..tokens.len() - 1] {
        assert!(!token.trailing);
    }
});
