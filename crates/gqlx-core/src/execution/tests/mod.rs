mod execute_tests;
mod response_path_tests;
