mod file_tests;
mod options_tests;
