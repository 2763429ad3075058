// Integration Tests for the dacalc front end
//
// Table-driven suites that push whole lines through parse + evaluate and
// check the outcome, plus a guard that malformed input never panics.

use dacalc::{evaluate, parse, EvalError};

/// Test result for a single test case
#[derive(Debug)]
pub enum TestResult {
    Pass,
    Fail(String),
    Crash(String),
}

/// What a line is expected to produce
#[derive(Debug, Clone)]
pub enum Expectation {
    Value(i32),
    Diagnostics(Vec<String>),
    DivisionByZero,
}

/// Individual test case
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub input: String,
    pub expected: Expectation,
}

/// Test suite containing multiple test cases
#[derive(Debug)]
pub struct TestSuite {
    pub name: String,
    pub tests: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tests: Vec::new(),
        }
    }

    pub fn add_test(&mut self, test: TestCase) {
        self.tests.push(test);
    }

    /// Run all tests in this suite
    pub fn run(&self) -> TestSuiteResults {
        let mut results = TestSuiteResults::new(&self.name);

        println!("Running test suite: {}", self.name);
        println!("{}", "=".repeat(50));

        for test in &self.tests {
            let result = run_single_test(test);
            results.add_result(&test.name, result);
        }

        results.print_summary();
        results
    }
}

/// Results for a test suite run
#[derive(Debug)]
pub struct TestSuiteResults {
    pub suite_name: String,
    pub results: Vec<(String, TestResult)>,
    pub passed: usize,
    pub failed: usize,
    pub crashed: usize,
}

impl TestSuiteResults {
    pub fn new(suite_name: &str) -> Self {
        Self {
            suite_name: suite_name.to_string(),
            results: Vec::new(),
            passed: 0,
            failed: 0,
            crashed: 0,
        }
    }

    pub fn add_result(&mut self, test_name: &str, result: TestResult) {
        match &result {
            TestResult::Pass => {
                self.passed += 1;
                println!("  ✓ {}", test_name);
            }
            TestResult::Fail(msg) => {
                self.failed += 1;
                println!("  ✗ {}: {}", test_name, msg);
            }
            TestResult::Crash(msg) => {
                self.crashed += 1;
                println!("  💥 {}: CRASHED - {}", test_name, msg);
            }
        }
        self.results.push((test_name.to_string(), result));
    }

    pub fn print_summary(&self) {
        println!();
        println!("Test Suite: {} - Summary", self.suite_name);
        println!("{}", "-".repeat(30));
        println!("Passed:  {}", self.passed);
        println!("Failed:  {}", self.failed);
        println!("Crashed: {}", self.crashed);
        println!("Total:   {}", self.results.len());
        println!();
    }

    pub fn is_all_passed(&self) -> bool {
        self.crashed == 0 && self.failed == 0
    }
}

/// Run a single test case
fn run_single_test(test: &TestCase) -> TestResult {
    // Catch any panics to detect crashes
    let result = std::panic::catch_unwind(|| {
        let tree = parse(&test.input);
        let messages: Vec<String> = tree.diagnostics.iter().map(|d| d.to_string()).collect();
        (messages, evaluate(&tree))
    });

    let (messages, value) = match result {
        Ok(outcome) => outcome,
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };
            return TestResult::Crash(panic_msg);
        }
    };

    match (&test.expected, value) {
        (Expectation::Value(expected), Ok(actual)) if *expected == actual => TestResult::Pass,
        (Expectation::Value(expected), Ok(actual)) => {
            TestResult::Fail(format!("Expected {}, got {}", expected, actual))
        }
        (Expectation::Value(_), Err(error)) => TestResult::Fail(format!(
            "Expected a value, got error '{}' with diagnostics {:?}",
            error, messages
        )),
        (Expectation::Diagnostics(expected), Err(EvalError::HasDiagnostics { .. })) => {
            if *expected == messages {
                TestResult::Pass
            } else {
                TestResult::Fail(format!(
                    "Expected diagnostics {:?}, got {:?}",
                    expected, messages
                ))
            }
        }
        (Expectation::Diagnostics(_), other) => {
            TestResult::Fail(format!("Expected diagnostics, got {:?}", other))
        }
        (Expectation::DivisionByZero, Err(EvalError::DivisionByZero { .. })) => TestResult::Pass,
        (Expectation::DivisionByZero, other) => {
            TestResult::Fail(format!("Expected division by zero, got {:?}", other))
        }
    }
}

/// Test case builder for convenience
impl TestCase {
    pub fn evaluates_to(name: &str, input: &str, value: i32) -> Self {
        Self {
            name: name.to_string(),
            input: input.to_string(),
            expected: Expectation::Value(value),
        }
    }

    pub fn reports(name: &str, input: &str, messages: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            input: input.to_string(),
            expected: Expectation::Diagnostics(messages.iter().map(|m| m.to_string()).collect()),
        }
    }

    pub fn divides_by_zero(name: &str, input: &str) -> Self {
        Self {
            name: name.to_string(),
            input: input.to_string(),
            expected: Expectation::DivisionByZero,
        }
    }
}

// ============================================================================
// Test Suite Creation Functions
// ============================================================================

fn create_arithmetic_tests() -> TestSuite {
    let mut suite = TestSuite::new("Arithmetic");

    suite.add_test(TestCase::evaluates_to("single_number", "42", 42));
    suite.add_test(TestCase::evaluates_to("addition", "1 + 2", 3));
    suite.add_test(TestCase::evaluates_to("subtraction", "5 - 8", -3));
    suite.add_test(TestCase::evaluates_to("multiplication", "6 * 7", 42));
    suite.add_test(TestCase::evaluates_to("division", "20 / 4", 5));
    suite.add_test(TestCase::evaluates_to("division_truncates", "7 / 2", 3));
    suite.add_test(TestCase::evaluates_to("division_truncates_toward_zero", "(1 - 8) / 2", -3));
    suite.add_test(TestCase::evaluates_to("no_whitespace", "1+2*3", 7));
    suite.add_test(TestCase::evaluates_to("tabs_and_spaces", " \t 9 \t- 4 ", 5));
    suite.add_test(TestCase::evaluates_to("leading_zeros", "007 + 1", 8));

    suite
}

fn create_precedence_tests() -> TestSuite {
    let mut suite = TestSuite::new("Precedence And Associativity");

    suite.add_test(TestCase::evaluates_to("multiply_binds_tighter", "2 + 3 * 4", 14));
    suite.add_test(TestCase::evaluates_to("parentheses_override", "(2 + 3) * 4", 20));
    suite.add_test(TestCase::evaluates_to("subtraction_left_assoc", "10 - 3 - 2", 5));
    suite.add_test(TestCase::evaluates_to("division_left_assoc", "100 / 10 / 5", 2));
    suite.add_test(TestCase::evaluates_to("mixed_factor_chain", "8 / 2 * 4", 16));
    suite.add_test(TestCase::evaluates_to("nested_parens", "((2)) * ((3 + 1))", 8));
    suite.add_test(TestCase::evaluates_to("right_grouping", "10 - (3 - 2)", 9));

    let deep_parens = "(".repeat(100) + "1" + &")".repeat(100);
    suite.add_test(TestCase::evaluates_to("deeply_nested_parens", &deep_parens, 1));

    let deepest_allowed = "(".repeat(256) + "7" + &")".repeat(256);
    suite.add_test(TestCase::evaluates_to("nesting_at_limit", &deepest_allowed, 7));

    let one_too_deep = "(".repeat(257) + "7" + &")".repeat(257);
    suite.add_test(TestCase::reports(
        "nesting_past_limit",
        &one_too_deep,
        &["Expression is nested more than 256 parentheses deep"],
    ));

    let huge = "(".repeat(100_000) + "1" + &")".repeat(100_000);
    suite.add_test(TestCase::reports(
        "hundred_thousand_nested_parens",
        &huge,
        &["Expression is nested more than 256 parentheses deep"],
    ));

    suite
}

fn create_wraparound_tests() -> TestSuite {
    let mut suite = TestSuite::new("Integer Wraparound");

    suite.add_test(TestCase::evaluates_to("max_literal", "2147483647", i32::MAX));
    suite.add_test(TestCase::evaluates_to("add_wraps", "2147483647 + 1", i32::MIN));
    suite.add_test(TestCase::evaluates_to("sub_wraps", "0 - 2147483647 - 2", i32::MAX));
    suite.add_test(TestCase::evaluates_to("mul_wraps", "65536 * 65536", 0));

    suite
}

fn create_lexical_error_tests() -> TestSuite {
    let mut suite = TestSuite::new("Lexical Errors");

    suite.add_test(TestCase::reports(
        "invalid_character",
        "2 + @",
        &["Invalid character input '@'"],
    ));
    suite.add_test(TestCase::reports(
        "invalid_character_between_numbers",
        "1 @ 2",
        &["Invalid character input '@'"],
    ));
    suite.add_test(TestCase::reports(
        "several_invalid_characters",
        "1 + a + b",
        &["Invalid character input 'a'", "Invalid character input 'b'"],
    ));
    suite.add_test(TestCase::reports(
        "invalid_character_before_unclosed_paren",
        "(1 + 2 @",
        &[
            "Invalid character input '@'",
            "Error: Unexpected token, Expected: <CloseParenthesisToken> Found: <EofToken>",
        ],
    ));
    suite.add_test(TestCase::reports(
        "literal_overflow",
        "2147483648",
        &["Text 2147483648 is not a valid int32"],
    ));
    suite.add_test(TestCase::reports(
        "lexer_diagnostics_keep_order",
        "99999999999 + $",
        &[
            "Text 99999999999 is not a valid int32",
            "Invalid character input '$'",
        ],
    ));

    suite
}

fn create_syntax_error_tests() -> TestSuite {
    let mut suite = TestSuite::new("Syntax Errors");

    suite.add_test(TestCase::reports(
        "unmatched_opening_paren",
        "(1 + 2",
        &["Error: Unexpected token, Expected: <CloseParenthesisToken> Found: <EofToken>"],
    ));
    suite.add_test(TestCase::reports(
        "unmatched_closing_paren",
        "1 + 2)",
        &["Error: Unexpected token, Expected: <EofToken> Found: <CloseParenthesisToken>"],
    ));
    suite.add_test(TestCase::reports(
        "missing_right_operand",
        "1 +",
        &["Error: Unexpected token, Expected: <NumberToken> Found: <EofToken>"],
    ));
    suite.add_test(TestCase::reports(
        "no_unary_minus",
        "-5",
        &["Error: Unexpected token, Expected: <NumberToken> Found: <MinusToken>"],
    ));
    suite.add_test(TestCase::reports(
        "double_operator",
        "1 ++ 2",
        &["Error: Unexpected token, Expected: <NumberToken> Found: <PlusToken>"],
    ));
    suite.add_test(TestCase::reports(
        "empty_parentheses",
        "()",
        &["Error: Unexpected token, Expected: <NumberToken> Found: <CloseParenthesisToken>"],
    ));
    suite.add_test(TestCase::reports(
        "empty_input",
        "",
        &["Error: Unexpected token, Expected: <NumberToken> Found: <EofToken>"],
    ));
    suite.add_test(TestCase::reports(
        "adjacent_numbers",
        "1 2",
        &["Error: Unexpected token, Expected: <EofToken> Found: <NumberToken>"],
    ));

    suite
}

fn create_runtime_error_tests() -> TestSuite {
    let mut suite = TestSuite::new("Runtime Errors");

    suite.add_test(TestCase::divides_by_zero("literal_zero", "5 / 0"));
    suite.add_test(TestCase::divides_by_zero("computed_zero", "5 / (2 - 2)"));
    suite.add_test(TestCase::divides_by_zero("nested_division", "1 + 8 / (4 * 0)"));

    suite
}

// ============================================================================
// Main Test Function
// ============================================================================

#[test]
fn comprehensive_front_end_tests() {
    println!("dacalc Front End Test Suite");
    println!("===========================\n");

    let mut all_passed = true;

    let suites = vec![
        create_arithmetic_tests(),
        create_precedence_tests(),
        create_wraparound_tests(),
        create_lexical_error_tests(),
        create_syntax_error_tests(),
        create_runtime_error_tests(),
    ];

    for suite in suites {
        let results = suite.run();
        if !results.is_all_passed() {
            all_passed = false;
        }
    }

    assert!(all_passed, "Some tests failed. See output above for details.");
}

#[test]
fn evaluation_is_deterministic() {
    for input in ["2 + 3 * 4", "(7 - 2) / 2", "1 - 2 - 3 * 4 / 5"] {
        let first = evaluate(&parse(input));
        let second = evaluate(&parse(input));
        assert_eq!(first, second, "input: {}", input);
    }
}
