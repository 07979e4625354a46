use assert_matches::assert_matches;
use rstest::rstest;

use super::*;
use crate::model::PageRecord;

struct Text(&'static str);

impl PageRecord for Text {
    fn text(&self) -> &str {
        self.0
    }

    fn filename(&self) -> &str {
        ""
    }
}

fn lit(text: &str) -> Postfix {
    Postfix::Literal(Pattern::literal(text))
}

fn op(op: Op) -> Postfix {
    Postfix::Op(op)
}

/// `(a AND b) OR (c AND d)` in postfix order.
fn sample() -> Expr {
    Expr::from_postfix(vec![
        lit("a"),
        lit("b"),
        op(Op::And),
        lit("c"),
        lit("d"),
        op(Op::And),
        op(Op::Or),
    ])
}

#[test]
fn test_single_literal() {
    let expr = Expr::from_postfix(vec![lit("a")]);
    assert_matches!(expr.nodes(), [Node::Literal(p)] if p.to_string() == "a");
    assert_eq!(expr.to_string(), r#""a""#);
}

#[test]
fn test_pre_order_layout() {
    let expr = sample();
    assert_matches!(
        expr.nodes(),
        [
            Node::Binary { op: Op::Or, rhs: 4, end: 7 },
            Node::Binary { op: Op::And, rhs: 3, end: 4 },
            Node::Literal(_),
            Node::Literal(_),
            Node::Binary { op: Op::And, rhs: 6, end: 7 },
            Node::Literal(_),
            Node::Literal(_),
        ]
    );
    assert_eq!(expr.to_string(), r#"(("a" AND "b") OR ("c" AND "d"))"#);
}

#[test]
fn test_right_nested_display() {
    let expr = Expr::from_postfix(vec![lit("a"), lit("b"), lit("c"), op(Op::Or), op(Op::And)]);
    assert_eq!(expr.to_string(), r#"("a" AND ("b" OR "c"))"#);
}

#[test]
fn test_display_escapes_quotes() {
    let expr = Expr::from_postfix(vec![lit(r#"say "hi""#)]);
    assert_eq!(expr.to_string(), r#""say \"hi\"""#);
}

#[rstest]
#[case("a b", true)]
#[case("c d", true)]
#[case("a d", false)]
#[case("b c", false)]
#[case("a b c d", true)]
#[case("", false)]
fn test_apply(#[case] text: &'static str, #[case] expected: bool) {
    assert_eq!(sample().apply(&Haystack::new(&Text(text))), expected);
}

#[rstest]
#[case(Op::And, "x", false)]
#[case(Op::And, "a", false)]
#[case(Op::And, "a b", true)]
#[case(Op::Or, "x", false)]
#[case(Op::Or, "a", true)]
#[case(Op::Or, "b", true)]
fn test_apply_binary(#[case] operator: Op, #[case] text: &'static str, #[case] expected: bool) {
    let expr = Expr::from_postfix(vec![lit("a"), lit("b"), op(operator)]);
    assert_eq!(expr.apply(&Haystack::new(&Text(text))), expected);
}

#[test]
fn test_long_or_chain() {
    const N: usize = 200_000;

    let mut items = vec![lit("a")];
    for _ in 1..N {
        items.push(lit("a"));
        items.push(op(Op::Or));
    }
    items.push(lit("z"));
    items.push(op(Op::And));

    let expr = Expr::from_postfix(items);
    assert_eq!(expr.nodes().len(), 2 * N + 1);
    assert!(expr.apply(&Haystack::new(&Text("a z"))));
    assert!(!expr.apply(&Haystack::new(&Text("a"))));
    assert!(!expr.apply(&Haystack::new(&Text("z"))));

    let rendered = expr.to_string();
    assert!(rendered.starts_with(&"(".repeat(N)));
    assert!(rendered.ends_with(r#" AND "z")"#));

    let copy = expr.clone();
    assert_eq!(copy, expr);
    drop(expr);
    drop(copy);
}

#[test]
fn test_deep_right_nesting() {
    const N: usize = 100_000;

    // a AND (a AND (a AND ... (a OR b)))
    let mut items: Vec<Postfix> = (0..N).map(|_| lit("a")).collect();
    items.push(lit("b"));
    items.push(op(Op::Or));
    items.extend((1..N).map(|_| op(Op::And)));

    let expr = Expr::from_postfix(items);
    assert_matches!(expr.nodes()[0], Node::Binary { op: Op::And, rhs: 2, end } if end == 2 * N + 1);
    assert!(expr.apply(&Haystack::new(&Text("a"))));
    assert!(!expr.apply(&Haystack::new(&Text("b"))));
    assert!(expr.to_string().ends_with(&")".repeat(N)));
}
