mod graphql_files_tests;
mod log_level_tests;
mod test_utils;
