//! Integration tests for LaTeX → MathNode → OMML

use chatdoc::{
    compile, compile_and_serialize, compile_and_serialize_with_options, plain_text, MathNode,
    OmmlElement, OmmlRenderOptions,
};
use pretty_assertions::assert_eq;

fn bare() -> OmmlRenderOptions {
    OmmlRenderOptions {
        declare_namespaces: false,
        math_font: None,
        ..Default::default()
    }
}

fn zone(latex: &str) -> OmmlElement {
    compile_and_serialize_with_options(latex, &bare())
}

fn names(el: &OmmlElement) -> Vec<&'static str> {
    el.elements().map(|e| e.name).collect()
}

// ============================================================================
// Compiler
// ============================================================================

mod compiler {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fraction_shape() {
        let nodes = compile(r"\frac{a}{b}");
        assert_eq!(
            nodes,
            vec![MathNode::Fraction {
                numerator: vec![MathNode::italic("a")],
                denominator: vec![MathNode::italic("b")],
            }]
        );
    }

    #[test]
    fn test_subsup_both_orders() {
        assert_eq!(compile("x_2^3"), compile("x^3_2"));
        assert!(matches!(
            compile("x_2^3").as_slice(),
            [MathNode::SubSup { .. }]
        ));
    }

    #[test]
    fn test_sum_with_limits() {
        let nodes = compile(r"\sum_{i=1}^{n} i");
        assert_eq!(nodes.len(), 2);
        match &nodes[0] {
            MathNode::SubSup {
                base,
                subscript,
                exponent,
            } => {
                assert_eq!(base, &vec![MathNode::literal("∑")]);
                assert_eq!(plain_text(subscript), "i=1");
                assert_eq!(plain_text(exponent), "n");
            }
            other => panic!("expected SubSup, got {:?}", other),
        }
    }

    #[test]
    fn test_quadratic_formula() {
        let nodes = compile(r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}");
        assert_eq!(nodes.len(), 3);
        let MathNode::Fraction {
            numerator,
            denominator,
        } = &nodes[2]
        else {
            panic!("expected fraction, got {:?}", nodes[2]);
        };
        assert_eq!(plain_text(denominator), "2a");
        assert!(numerator
            .iter()
            .any(|n| matches!(n, MathNode::Radical { degree: None, .. })));
        assert!(numerator.contains(&MathNode::literal("±")));
    }

    #[test]
    fn test_nested_delimiters_keep_structure() {
        let nodes = compile(r"\left( \frac{1}{\left| x \right|} \right)");
        let [MathNode::Delimiter { content, open, close }] = nodes.as_slice() else {
            panic!("expected one delimiter, got {:?}", nodes);
        };
        assert_eq!((open.as_str(), close.as_str()), ("(", ")"));
        let [MathNode::Fraction { denominator, .. }] = content.as_slice() else {
            panic!("expected fraction, got {:?}", content);
        };
        assert!(matches!(
            denominator.as_slice(),
            [MathNode::Delimiter { open, close, .. }] if open == "|" && close == "|"
        ));
    }

    #[test]
    fn test_limit_expression() {
        let nodes = compile(r"\lim_{x \to 0} \frac{\sin x}{x} = 1");
        match &nodes[0] {
            MathNode::Subscript { base, subscript } => {
                assert_eq!(base, &vec![MathNode::named_function("lim")]);
                assert_eq!(plain_text(subscript), "x→0");
            }
            other => panic!("expected Subscript, got {:?}", other),
        }
    }

    #[test]
    fn test_compound_children_never_empty() {
        fn check(nodes: &[MathNode]) {
            for node in nodes {
                let mut node = node.clone();
                for slot in node.slots_mut() {
                    assert!(!slot.is_empty(), "empty slot in {:?}", slot);
                    check(slot);
                }
            }
        }
        for input in [
            r"\frac{}{}",
            r"\sqrt[]{}",
            "^{}_{}",
            r"\left(\right)",
            r"\hat{}",
            "x^{}",
        ] {
            check(&compile(input));
        }
    }

    #[test]
    fn test_round_trip_plain_text() {
        let input = "3x + 2y - 7 = 0, z / 4 > 1";
        let text: String = compile(input).iter().map(|n| n.plain_text()).collect();
        assert_eq!(text, input.split_whitespace().collect::<String>());
    }
}

// ============================================================================
// Serialization
// ============================================================================

mod serialize {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zone_children_follow_node_order() {
        let z = zone(r"a + \frac{1}{2} x^2");
        assert_eq!(names(&z), vec!["m:r", "m:r", "m:f", "m:sSup"]);
    }

    #[test]
    fn test_default_zone_declares_namespaces() {
        let markup = compile_and_serialize("x").to_markup();
        assert!(markup.starts_with("<m:oMath xmlns:m="));
        assert!(markup.contains("xmlns:w="));
    }

    #[test]
    fn test_radical_and_accent_markup() {
        let markup = zone(r"\sqrt{\bar{x}}").to_markup();
        assert!(markup.contains("<m:degHide m:val=\"1\"/>"));
        assert!(markup.contains("<m:chr m:val=\"\u{0304}\"/>"));
    }

    #[test]
    fn test_delimiter_markup() {
        let markup = zone(r"\left[ x \right)").to_markup();
        assert!(markup.contains("<m:begChr m:val=\"[\"/>"));
        assert!(markup.contains("<m:endChr m:val=\")\"/>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let markup = zone("a < b").to_markup();
        assert!(markup.contains(">&lt;</m:t>"));
    }

    #[test]
    fn test_never_fails_on_garbage() {
        for input in [
            "",
            "{{{{",
            "}}}}",
            r"\left(\left(\left(",
            r"\right]\right]",
            "^_^_^_",
            r"\frac",
            r"\sqrt[",
            "\\",
            "$$",
            r"\begin{matrix} a & b \\ c & d \end{matrix}",
        ] {
            let z = zone(input);
            assert!(z.name == "m:oMath" || z.name == "w:r");
        }
    }

    #[test]
    fn test_long_exponent_chain_renders() {
        let input = format!("x{}", "^1".repeat(100_000));
        let z = zone(&input);
        assert_eq!(z.name, "m:oMath");
        assert!(z.elements().count() > 1);
    }

    #[test]
    fn test_pathological_nesting_terminates() {
        let input = format!("{}1{}", r"\frac{".repeat(200), "}{2}".repeat(200));
        let z = zone(&input);
        assert!(z.name == "m:oMath" || z.name == "w:r");
    }
}
