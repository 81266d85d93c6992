#![no_main]

use libfuzzer_sys::fuzz_target;
use tanka_graphql_language::lexer::GraphQLLexer;

fuzz_target!(|data: &[u8]| {
    for token in GraphQLLexer::new(data).with_comments(true) {
        if token.is_err() {
            break;
        }
    }
});
