mod graphql_files_tests;
