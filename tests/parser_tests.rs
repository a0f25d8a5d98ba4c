use pasc::ast::Node;
use pasc::errors::{PascError, PascResult};
use pasc::frontend::lexer::lex;
use pasc::frontend::parser::Parser;
use pasc::frontend::token::TokenKind;

fn parse_source(source: &str) -> PascResult<Node> {
    let tokens = lex(source)?;
    Parser::new(tokens).parse()
}

// Pull the program name, declaration list, and top-level statement list out
// of a parsed tree.
fn program_parts(tree: &Node) -> (&str, &[Node], &[Node]) {
    let (name, block) = match tree {
        Node::Program { name, block } => (name.as_str(), block.as_ref()),
        other => panic!("Expected a Program root, but got: {:?}", other),
    };
    let (declarations, compound) = match block {
        Node::Block {
            declarations,
            compound,
        } => (declarations.as_slice(), compound.as_ref()),
        other => panic!("Expected a Block, but got: {:?}", other),
    };
    let statements = match compound {
        Node::Compound { statements } => statements.as_slice(),
        other => panic!("Expected a Compound, but got: {:?}", other),
    };
    (name, declarations, statements)
}

// The value expression of the first assignment in the program body.
fn first_assignment_value(tree: &Node) -> &Node {
    let (_, _, statements) = program_parts(tree);
    match statements.first() {
        Some(Node::Assignment { value, .. }) => value.as_ref(),
        other => panic!("Expected an Assignment statement, but got: {:?}", other),
    }
}

fn assert_number(node: &Node, expected: &str) {
    match node {
        Node::Number { literal } => assert_eq!(literal, expected),
        other => panic!("Expected Number({}), but got: {:?}", expected, other),
    }
}

#[test]
fn test_program_structure() -> PascResult<()> {
    let tree = parse_source("PROGRAM demo; BEGIN END.")?;
    let (name, declarations, statements) = program_parts(&tree);
    assert_eq!(name, "demo");
    assert!(declarations.is_empty());
    // An empty compound body reduces to a single empty statement.
    assert_eq!(statements, &[Node::NoOperation]);
    Ok(())
}

#[test]
fn test_variable_declarations() -> PascResult<()> {
    let tree = parse_source("PROGRAM p; VAR x, y : INTEGER; z : REAL; BEGIN END.")?;
    let (_, declarations, _) = program_parts(&tree);
    assert_eq!(declarations.len(), 3);
    let expected = [("x", "INTEGER"), ("y", "INTEGER"), ("z", "REAL")];
    for (declaration, (var_name, type_name)) in declarations.iter().zip(expected) {
        match declaration {
            Node::VariableDeclaration {
                variable,
                type_spec,
            } => {
                assert_eq!(
                    variable.as_ref(),
                    &Node::Variable {
                        name: var_name.to_string()
                    }
                );
                assert_eq!(
                    type_spec.as_ref(),
                    &Node::Type {
                        literal: type_name.to_string()
                    }
                );
            }
            other => panic!("Expected a VariableDeclaration, but got: {:?}", other),
        }
    }
    Ok(())
}

#[test]
fn test_empty_var_section() -> PascResult<()> {
    let tree = parse_source("PROGRAM p; VAR BEGIN x := 1 END.")?;
    let (_, declarations, statements) = program_parts(&tree);
    assert!(declarations.is_empty());
    assert_eq!(statements.len(), 1);
    Ok(())
}

#[test]
fn test_unary_minus_desugars_to_zero_left_operand() -> PascResult<()> {
    let tree = parse_source("PROGRAM p; BEGIN x := -5 END.")?;
    match first_assignment_value(&tree) {
        Node::BinaryOperation {
            left,
            operator,
            right,
        } => {
            assert_number(left, "0");
            assert_eq!(operator.text(), "-");
            assert_number(right, "5");
        }
        other => panic!("Expected a BinaryOperation, but got: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_multiplication_binds_tighter_than_addition() -> PascResult<()> {
    let tree = parse_source("PROGRAM p; BEGIN x := 2 + 3 * 4 END.")?;
    match first_assignment_value(&tree) {
        Node::BinaryOperation {
            left,
            operator,
            right,
        } => {
            assert_number(left, "2");
            assert_eq!(operator.text(), "+");
            match right.as_ref() {
                Node::BinaryOperation {
                    left,
                    operator,
                    right,
                } => {
                    assert_number(left, "3");
                    assert_eq!(operator.text(), "*");
                    assert_number(right, "4");
                }
                other => panic!("Expected 3 * 4 on the right, but got: {:?}", other),
            }
        }
        other => panic!("Expected a BinaryOperation, but got: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_addition_is_left_associative() -> PascResult<()> {
    let tree = parse_source("PROGRAM p; BEGIN x := 1 - 2 + 3 END.")?;
    match first_assignment_value(&tree) {
        Node::BinaryOperation {
            left,
            operator,
            right,
        } => {
            assert_eq!(operator.text(), "+");
            assert_number(right, "3");
            match left.as_ref() {
                Node::BinaryOperation {
                    left,
                    operator,
                    right,
                } => {
                    assert_number(left, "1");
                    assert_eq!(operator.text(), "-");
                    assert_number(right, "2");
                }
                other => panic!("Expected 1 - 2 on the left, but got: {:?}", other),
            }
        }
        other => panic!("Expected a BinaryOperation, but got: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_parentheses_override_precedence() -> PascResult<()> {
    let tree = parse_source("PROGRAM p; BEGIN x := (1 + 2) * 3 END.")?;
    match first_assignment_value(&tree) {
        Node::BinaryOperation { left, operator, .. } => {
            assert_eq!(operator.text(), "*");
            assert!(matches!(left.as_ref(), Node::BinaryOperation { .. }));
        }
        other => panic!("Expected a BinaryOperation, but got: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_nested_compound_statement() -> PascResult<()> {
    let tree = parse_source("PROGRAM p; BEGIN BEGIN x := 1 END; y := 2 END.")?;
    let (_, _, statements) = program_parts(&tree);
    assert_eq!(statements.len(), 2);
    assert!(matches!(statements[0], Node::Compound { .. }));
    assert!(matches!(statements[1], Node::Assignment { .. }));
    Ok(())
}

#[test]
fn test_missing_semicolon_after_program_name() {
    let result = parse_source("PROGRAM p BEGIN x := 1 END.");
    if let Err(PascError::SyntaxError {
        expected, found, ..
    }) = result
    {
        assert_eq!(expected, TokenKind::EndStatement);
        assert_eq!(found, TokenKind::Begin);
    } else {
        panic!("Expected a SyntaxError, but got: {:?}", result);
    }
}

#[test]
fn test_missing_statement_separator() {
    let result = parse_source("PROGRAM p; BEGIN x := 1 y := 2 END.");
    if let Err(PascError::SyntaxError {
        expected, found, ..
    }) = result
    {
        assert_eq!(expected, TokenKind::EndStatement);
        assert_eq!(found, TokenKind::Id);
    } else {
        panic!("Expected a SyntaxError, but got: {:?}", result);
    }
}

#[test]
fn test_trailing_input_after_program() {
    let result = parse_source("PROGRAM p; BEGIN END. x");
    if let Err(PascError::UnexpectedTrailingInput { found }) = result {
        assert_eq!(found, TokenKind::Id);
    } else {
        panic!(
            "Expected an UnexpectedTrailingInput error, but got: {:?}",
            result
        );
    }
}

#[test]
fn test_declaration_with_unknown_type() {
    let result = parse_source("PROGRAM p; VAR x : STRING; BEGIN END.");
    if let Err(PascError::SyntaxError {
        expected, found, ..
    }) = result
    {
        assert_eq!(expected, TokenKind::RealType);
        assert_eq!(found, TokenKind::Id);
    } else {
        panic!("Expected a SyntaxError, but got: {:?}", result);
    }
}

#[test]
fn test_empty_token_stream_reports_missing_token() {
    let result = Parser::new(Vec::new()).parse();
    if let Err(PascError::MissingToken { expected }) = result {
        assert_eq!(expected, "identifier");
    } else {
        panic!("Expected a MissingToken error, but got: {:?}", result);
    }
}

#[test]
fn test_syntax_error_reports_offset() {
    let source = "PROGRAM p BEGIN x := 1 END.";
    let result = parse_source(source);
    if let Err(PascError::SyntaxError { pos, .. }) = result {
        assert_eq!(pos, source.find("BEGIN").unwrap());
    } else {
        panic!("Expected a SyntaxError, but got: {:?}", result);
    }
}
