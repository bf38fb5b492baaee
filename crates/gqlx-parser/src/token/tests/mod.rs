mod string_value_tests;
