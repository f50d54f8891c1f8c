use std::fs::{self};

use reckon::{
    analysis::Stage,
    analyze,
    config::{AnalyzerConfig, parse_ceiling},
    error::{Diagnostic, ErrorKind},
    interpreter::value::Number,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (source, expected) in extract_examples(&content) {
            count += 1;
            let outcome = match analyze(&source, &AnalyzerConfig::default()) {
                Ok(analysis) => analysis.value.to_string(),
                Err(diagnostic) => format!("error({})", kind_name(diagnostic.kind)),
            };
            assert_eq!(outcome, expected, "example {source:?} in {path:?}");
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reckon") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((source, expected)) = line.split_once(" => ") {
            examples.push((source.to_string(), expected.trim().to_string()));
        }
    }

    examples
}

const fn kind_name(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Lexical => "lexical",
        ErrorKind::Syntax => "syntax",
        ErrorKind::Arithmetic => "arithmetic",
        ErrorKind::Semantic => "semantic",
    }
}

fn value_of(src: &str) -> Number {
    match analyze(src, &AnalyzerConfig::default()) {
        Ok(analysis) => analysis.value,
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn failure_of(src: &str, config: &AnalyzerConfig) -> Diagnostic {
    match analyze(src, config) {
        Ok(analysis) => panic!("Expression {src:?} succeeded with {}", analysis.value),
        Err(diagnostic) => diagnostic,
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    assert_eq!(failure_of(src, &AnalyzerConfig::default()).kind, kind, "{src:?}");
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(value_of("2+3*4"), Number::Integer(14));
    assert_eq!(value_of("(2+3)*4"), Number::Integer(20));
    assert_eq!(value_of("2*3+4*5"), Number::Integer(26));
    assert_eq!(value_of("(((1+2)))"), Number::Integer(3));
}

#[test]
fn same_level_operators_fold_from_the_left() {
    assert_eq!(value_of("6-3-2"), Number::Integer(1));
    assert_eq!(value_of("20/4/5"), Number::real(1.0));
    assert_eq!(value_of("2*6/3"), Number::real(4.0));
    assert_eq!(value_of("1-2+3"), Number::Integer(2));
}

#[test]
fn division_is_true_division() {
    assert_eq!(value_of("7/2"), Number::real(3.5));
    assert_eq!(value_of("1/4+1"), Number::real(1.25));
    assert_eq!(value_of("6/3").to_string(), "2.0");
    assert_eq!(value_of("6*3").to_string(), "18");
}

#[test]
fn division_by_zero_is_always_caught() {
    assert_failure("5/0", ErrorKind::Semantic);
    assert_failure("5/000", ErrorKind::Semantic);
    assert_failure("5/(2-2)", ErrorKind::Arithmetic);
    assert_failure("1/(1/2-1/2)", ErrorKind::Arithmetic);

    let config = AnalyzerConfig { zero_divisor_literals: false,
                                  ..AnalyzerConfig::default() };
    let diagnostic = failure_of("5/0", &config);
    assert_eq!(diagnostic.kind, ErrorKind::Arithmetic);
    assert_eq!(diagnostic.offset, Some(1));
}

#[test]
fn literal_zero_check_points_at_the_divisor() {
    let diagnostic = failure_of("8 + 1 / 0", &AnalyzerConfig::default());
    assert_eq!(diagnostic.offset, Some(8));
    assert!(diagnostic.message.contains("Division by zero literal"));
}

#[test]
fn unbalanced_parentheses_are_rejected_anywhere() {
    assert_failure("(5+3", ErrorKind::Semantic);
    assert_failure("5+3)", ErrorKind::Semantic);
    assert_failure("(5+3))", ErrorKind::Semantic);
    assert_failure(")(", ErrorKind::Semantic);
    assert_eq!(value_of("(5+3)"), Number::Integer(8));
}

#[test]
fn unbalanced_parentheses_without_structural_check_are_syntax_errors() {
    let config = AnalyzerConfig { structural_check: false,
                                  ..AnalyzerConfig::default() };

    for src in ["(5+3", "5+3)", "(5+3))"] {
        assert_eq!(failure_of(src, &config).kind, ErrorKind::Syntax, "{src:?}");
    }

    let diagnostic = failure_of("(5+3", &config);
    assert!(diagnostic.message.contains("Expected closing parenthesis"));
    assert_eq!(diagnostic.offset, Some(0));
}

#[test]
fn whitespace_does_not_change_the_outcome() {
    let config = AnalyzerConfig::default();
    let tight = analyze("5+(6*2)", &config).unwrap();
    let spaced = analyze(" 5 + ( 6 * 2 ) ", &config).unwrap();

    assert!(tight.tokens.pairs().eq(spaced.tokens.pairs()));
    assert_eq!(tight.value, spaced.value);
    assert_eq!(spaced.tokens[0].offset, 1);
    assert_eq!(value_of("\t2\t*\t3\t"), Number::Integer(6));
}

#[test]
fn lexical_errors_name_the_character_and_offset() {
    let diagnostic = failure_of("5 & 3", &AnalyzerConfig::default());
    assert_eq!(diagnostic.kind, ErrorKind::Lexical);
    assert_eq!(diagnostic.offset, Some(2));
    assert!(diagnostic.message.contains("'&'"));

    let diagnostic = failure_of("1+2.5", &AnalyzerConfig::default());
    assert_eq!(diagnostic.offset, Some(3));
    assert!(diagnostic.message.contains("'.'"));

    let diagnostic = failure_of("5 + é", &AnalyzerConfig::default());
    assert_eq!(diagnostic.offset, Some(4));
    assert!(diagnostic.message.contains("'é'"));

    assert_failure("5\n+3", ErrorKind::Lexical);
    assert_failure("x+1", ErrorKind::Lexical);
}

#[test]
fn lexical_errors_win_over_later_problems() {
    assert_failure("(5/0 &", ErrorKind::Lexical);
}

#[test]
fn syntax_errors() {
    assert_failure("-5", ErrorKind::Syntax);
    assert_failure("5+", ErrorKind::Syntax);
    assert_failure("5 5", ErrorKind::Syntax);
    assert_failure("*5", ErrorKind::Syntax);
    assert_failure("()", ErrorKind::Syntax);
    assert_failure("(5)(6)", ErrorKind::Syntax);
    assert_failure("5--3", ErrorKind::Syntax);

    let diagnostic = failure_of("1 2", &AnalyzerConfig::default());
    assert_eq!(diagnostic.offset, Some(2));
    assert!(diagnostic.message.contains("Trailing tokens"));
}

#[test]
fn empty_input_has_nothing_to_parse() {
    for src in ["", "   ", "\t"] {
        let diagnostic = failure_of(src, &AnalyzerConfig::default());
        assert_eq!(diagnostic.kind, ErrorKind::Syntax);
        assert_eq!(diagnostic.message, "Nothing to parse.");
        assert_eq!(diagnostic.offset, None);
    }
}

#[test]
fn bound_is_closed_and_configurable() {
    assert_eq!(value_of("1000000"), Number::Integer(1_000_000));
    assert_failure("1000001", ErrorKind::Semantic);
    assert_failure("0-1000001", ErrorKind::Semantic);

    let config = AnalyzerConfig::default().with_ceiling(10.0);
    assert_eq!(analyze("5*2", &config).unwrap().value, Number::Integer(10));
    assert_eq!(analyze("21/2", &config).unwrap_err().kind, ErrorKind::Semantic);

    let config = AnalyzerConfig { bound_check: false,
                                  ..AnalyzerConfig::default() };
    assert_eq!(analyze("1000*1000*1000", &config).unwrap().value,
               Number::Integer(1_000_000_000));
}

#[test]
fn magnitude_error_is_semantic_not_arithmetic() {
    let diagnostic = failure_of("999999+2", &AnalyzerConfig::default());
    assert_eq!(diagnostic.kind, ErrorKind::Semantic);
    assert!(diagnostic.message.contains("1000001"));
}

#[test]
fn integer_overflow_falls_back_to_reals() {
    let config = AnalyzerConfig::unchecked();
    let value = analyze("9223372036854775807+1", &config).unwrap().value;
    assert_eq!(value, Number::real(9_223_372_036_854_775_808.0));

    let value = analyze("99999999999999999999", &config).unwrap().value;
    assert_eq!(value, Number::real(1e20));
}

#[test]
fn values_beyond_f64_exceed_the_ceiling() {
    let huge = format!("1{}", "0".repeat(300));
    let product = format!("{huge}*{huge}");
    let too_long = "9".repeat(400);

    let diagnostic = failure_of(&product, &AnalyzerConfig::default());
    assert_eq!(diagnostic.kind, ErrorKind::Semantic);
    assert_eq!(diagnostic.offset, Some(301));
    assert_eq!(diagnostic.message,
               "Value at offset 301 exceeds allowed magnitude of 1000000.");

    let diagnostic = failure_of(&too_long, &AnalyzerConfig::default());
    assert_eq!(diagnostic.kind, ErrorKind::Semantic);
    assert_eq!(diagnostic.offset, Some(0));

    let diagnostic = failure_of(&format!("1+{too_long}"), &AnalyzerConfig::default());
    assert_eq!(diagnostic.kind, ErrorKind::Semantic);
    assert_eq!(diagnostic.offset, Some(2));
}

#[test]
fn oversized_literals_are_grammatical() {
    let too_long = "9".repeat(400);
    assert_failure(&format!("{too_long}+"), ErrorKind::Syntax);
    assert_failure(&format!("5/(1-1)+{too_long}"), ErrorKind::Arithmetic);
}

#[test]
fn overflow_without_bound_check_is_arithmetic() {
    let huge = format!("1{}", "0".repeat(300));
    let product = format!("{huge}*{huge}");
    let too_long = "9".repeat(400);

    for src in [product.as_str(), too_long.as_str()] {
        let diagnostic = failure_of(src, &AnalyzerConfig::unchecked());
        assert_eq!(diagnostic.kind, ErrorKind::Arithmetic, "{src:?}");
        assert!(diagnostic.message.starts_with("Numeric overflow"));
    }
}

#[test]
fn ceiling_must_be_finite_and_not_negative() {
    assert_eq!(parse_ceiling("1000000"), Ok(1_000_000.0));
    assert_eq!(parse_ceiling("0"), Ok(0.0));
    assert_eq!(parse_ceiling("2.5"), Ok(2.5));

    for text in ["NaN", "nan", "inf", "-inf", "-1", "-0.5", "ten", ""] {
        assert!(parse_ceiling(text).is_err(), "{text:?}");
    }

    let config = AnalyzerConfig::default().with_ceiling(parse_ceiling("0").unwrap());
    assert_eq!(analyze("5-5", &config).unwrap().value, Number::Integer(0));
    assert_eq!(failure_of("1", &config).kind, ErrorKind::Semantic);
}

#[test]
fn nesting_is_bounded() {
    let config = AnalyzerConfig::default().with_max_nesting(3);
    assert_eq!(analyze("(((1)))", &config).unwrap().value, Number::Integer(1));
    assert_eq!(failure_of("((((1))))", &config).kind, ErrorKind::Syntax);

    let deep = format!("{}1{}", "(".repeat(256), ")".repeat(256));
    assert_eq!(value_of(&deep), Number::Integer(1));

    let too_deep = format!("{}1{}", "(".repeat(257), ")".repeat(257));
    let diagnostic = failure_of(&too_deep, &AnalyzerConfig::default());
    assert_eq!(diagnostic.kind, ErrorKind::Syntax);
    assert_eq!(diagnostic.offset, Some(256));
}

#[test]
fn long_chains_evaluate() {
    let src = vec!["1"; 2000].join("+");
    assert_eq!(value_of(&src), Number::Integer(2000));

    let src = vec!["2"; 2000].join("*");
    assert_failure(&src, ErrorKind::Semantic);
}

#[test]
fn long_chains_fit_a_small_stack() {
    let worker = std::thread::Builder::new().stack_size(2 * 1024 * 1024)
                                            .spawn(analyze_million_term_chains)
                                            .unwrap();
    worker.join().unwrap();
}

fn analyze_million_term_chains() {
    let src = vec!["1"; 1_000_000].join("+");
    let analysis = analyze(&src, &AnalyzerConfig::default()).unwrap();
    assert_eq!(analysis.value, Number::Integer(1_000_000));

    let copy = analysis.expr.clone();
    assert_eq!(copy, analysis.expr);

    let rendered = copy.to_string();
    assert!(rendered.starts_with("((("));
    assert!(rendered.ends_with(" + 1) + 1)"));
    drop(copy);
    drop(analysis);

    let src = vec!["1"; 1_000_000].join("*");
    assert_eq!(value_of(&src), Number::Integer(1));
}

#[test]
fn stages_report_what_ran() {
    let analysis = analyze("1+1", &AnalyzerConfig::default()).unwrap();
    assert_eq!(analysis.stages,
               vec![Stage::Lexical,
                    Stage::Structural,
                    Stage::Syntax,
                    Stage::Evaluation,
                    Stage::Bound]);

    let analysis = analyze("1+1", &AnalyzerConfig::unchecked()).unwrap();
    assert_eq!(analysis.stages,
               vec![Stage::Lexical, Stage::Syntax, Stage::Evaluation]);
}

#[test]
fn analysis_exposes_tokens_and_tree() {
    let analysis = analyze("12*(3+4)", &AnalyzerConfig::default()).unwrap();
    let names: Vec<_> = analysis.tokens.iter().map(|t| t.kind.name()).collect();

    assert_eq!(names,
               ["NUMBER", "OP_MUL", "LPAREN", "NUMBER", "OP_ADD", "NUMBER", "RPAREN"]);
    assert_eq!(analysis.expr.to_string(), "(12 * (3 + 4))");
    assert_eq!(analysis.value, Number::Integer(84));
}

#[test]
fn reanalysis_is_identical() {
    for src in ["5+(6*2)", "20/4/5", "5/(2-2)", "(5+3", "5 & 3", ""] {
        let config = AnalyzerConfig::default();
        assert_eq!(analyze(src, &config), analyze(src, &config), "{src:?}");
    }
}
