mod byte_span_reader_tests;
mod graphql_parser_executable_tests;
mod graphql_parser_type_system_tests;
mod lexer_tests;
mod string_value_tests;
mod utils;
