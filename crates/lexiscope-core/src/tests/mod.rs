mod lexical_tests;
mod normalizer_tests;
