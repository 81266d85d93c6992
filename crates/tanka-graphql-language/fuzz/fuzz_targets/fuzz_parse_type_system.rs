#![no_main]

use libfuzzer_sys::fuzz_target;
use tanka_graphql_language::parse_type_system_document;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let _ = parse_type_system_document(s);
});
