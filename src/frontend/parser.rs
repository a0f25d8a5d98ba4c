/*
*            pasc -- Pascal subset front end.
*
* program      = "PROGRAM" variable ";" block "." ;
* block        = declarations compoundStatement ;
* declarations = [ "VAR" ( varDeclList ";" )+ ] ;
* varDeclList  = ident { "," ident } ":" typeSpec ;
* typeSpec     = "INTEGER" | "REAL" ;
* compound     = "BEGIN" statementList "END" ;
* statementList= statement { ";" statement } ;
* statement    = [ compound | assignment ] ;
* assignment   = variable ":=" expression ;
* expression   = term { ( "+" | "-" ) term } ;
* term         = factor { ( "*" | "/" | "DIV" ) factor } ;
* factor       = number | "(" expression ")" | ( "+" | "-" ) factor | variable ;
* variable     = ident ;
*/

use crate::ast::Node;
use crate::errors::{PascError, PascResult};
use crate::frontend::token::{Token, TokenKind};
use std::vec::IntoIter;

pub struct Parser {
    current: Option<Token>,
    iter: IntoIter<Token>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut iter = tokens.into_iter();
        let current = iter.next();
        Self { current, iter }
    }

    fn next(&mut self) {
        self.current = self.iter.next();
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current.as_ref().map(|token| token.kind)
    }

    fn current_is_operator(&self, lexemes: &[&str]) -> bool {
        matches!(&self.current, Some(token)
            if token.kind == TokenKind::Operator && lexemes.contains(&token.text()))
    }

    /// The sole consumption primitive: assert the current token's kind and
    /// advance past it. An absent current token matches permissively, and
    /// advancing past the end of the stream is a no-op.
    fn analyze(&mut self, expected: TokenKind) -> PascResult<()> {
        if let Some(token) = &self.current {
            if token.kind != expected {
                return Err(PascError::syntax_error(expected, token.kind, token.pos));
            }
        }
        self.next();
        Ok(())
    }

    fn ident_name(&mut self) -> PascResult<String> {
        let name = match &self.current {
            Some(token) => token.text().to_string(),
            None => return Err(PascError::missing_token("identifier")),
        };
        self.analyze(TokenKind::Id)?;
        Ok(name)
    }

    /// Parse the token sequence into the AST root. Fails if any token other
    /// than `Eof` remains once the program production has completed.
    pub fn parse(&mut self) -> PascResult<Node> {
        let node = self.program()?;
        match &self.current {
            Some(token) if token.kind != TokenKind::Eof => {
                Err(PascError::UnexpectedTrailingInput { found: token.kind })
            }
            _ => Ok(node),
        }
    }

    /**
     * Parse a program according to the grammar:
     * program = "PROGRAM" variable ";" block "."
     */
    fn program(&mut self) -> PascResult<Node> {
        self.analyze(TokenKind::Program)?;
        let name = self.ident_name()?;
        self.analyze(TokenKind::EndStatement)?;
        let block = self.block()?;
        let node = Node::Program {
            name,
            block: Box::new(block),
        };
        self.analyze(TokenKind::Dot)?;
        Ok(node)
    }

    /**
     * Parse a block according to the grammar:
     * block = declarations compoundStatement
     */
    fn block(&mut self) -> PascResult<Node> {
        let declarations = self.declarations()?;
        let compound = self.compound_statement()?;
        Ok(Node::Block {
            declarations,
            compound: Box::new(compound),
        })
    }

    /**
     * Parse the variable declaration section according to the grammar:
     * declarations = [ "VAR" ( varDeclList ";" )+ ]
     *
     * A "VAR" with no following identifier is legal and declares nothing.
     */
    fn declarations(&mut self) -> PascResult<Vec<Node>> {
        let mut result = Vec::new();
        if self.current_kind() == Some(TokenKind::Var) {
            self.analyze(TokenKind::Var)?;
            while self.current_kind() == Some(TokenKind::Id) {
                result.extend(self.variable_declarations()?);
                self.analyze(TokenKind::EndStatement)?;
            }
        }
        Ok(result)
    }

    /**
     * Parse one declaration list according to the grammar:
     * varDeclList = ident { "," ident } ":" typeSpec
     *
     * Yields one VariableDeclaration node per declared identifier, in
     * declaration order.
     */
    fn variable_declarations(&mut self) -> PascResult<Vec<Node>> {
        let mut variables = vec![self.variable()?];
        while self.current_kind() == Some(TokenKind::Comma) {
            self.analyze(TokenKind::Comma)?;
            variables.push(self.variable()?);
        }
        self.analyze(TokenKind::Colon)?;
        let type_spec = self.type_specification()?;
        Ok(variables
            .into_iter()
            .map(|variable| Node::VariableDeclaration {
                variable: Box::new(variable),
                type_spec: Box::new(type_spec.clone()),
            })
            .collect())
    }

    /**
     * Parse a type name according to the grammar:
     * typeSpec = "INTEGER" | "REAL"
     */
    fn type_specification(&mut self) -> PascResult<Node> {
        let (kind, literal) = match &self.current {
            Some(token) => (token.kind, token.text().to_string()),
            None => return Err(PascError::missing_token("type declaration")),
        };
        if kind == TokenKind::IntegerType {
            self.analyze(TokenKind::IntegerType)?;
        } else {
            self.analyze(TokenKind::RealType)?;
        }
        Ok(Node::Type { literal })
    }

    /**
     * Parse a compound statement according to the grammar:
     * compound = "BEGIN" statementList "END"
     */
    fn compound_statement(&mut self) -> PascResult<Node> {
        self.analyze(TokenKind::Begin)?;
        let statements = self.statement_list()?;
        self.analyze(TokenKind::End)?;
        Ok(Node::Compound { statements })
    }

    /**
     * Parse a statement list according to the grammar:
     * statementList = statement { ";" statement }
     */
    fn statement_list(&mut self) -> PascResult<Vec<Node>> {
        let mut statements = vec![self.statement()?];
        while self.current_kind() == Some(TokenKind::EndStatement) {
            self.analyze(TokenKind::EndStatement)?;
            statements.push(self.statement()?);
        }
        // An identifier here means a statement follows with no separating
        // ';', e.g. `x := 1 y := 2 END`.
        if let Some(token) = &self.current {
            if token.kind == TokenKind::Id {
                return Err(PascError::syntax_error(
                    TokenKind::EndStatement,
                    token.kind,
                    token.pos,
                ));
            }
        }
        Ok(statements)
    }

    /**
     * Parse a statement according to the grammar:
     * statement = [ compound | assignment ]
     *
     * Anything else reduces to the empty statement.
     */
    fn statement(&mut self) -> PascResult<Node> {
        match self.current_kind() {
            Some(TokenKind::Begin) => self.compound_statement(),
            Some(TokenKind::Id) => self.assignment_statement(),
            _ => Ok(self.empty()),
        }
    }

    /**
     * Parse an assignment according to the grammar:
     * assignment = variable ":=" expression
     */
    fn assignment_statement(&mut self) -> PascResult<Node> {
        let target = self.variable()?;
        self.analyze(TokenKind::Assign)?;
        let value = self.expression()?;
        Ok(Node::Assignment {
            target: Box::new(target),
            value: Box::new(value),
        })
    }

    fn variable(&mut self) -> PascResult<Node> {
        Ok(Node::Variable {
            name: self.ident_name()?,
        })
    }

    fn empty(&self) -> Node {
        Node::NoOperation
    }

    /**
     * Parse an expression according to the grammar:
     * expression = term { ( "+" | "-" ) term }
     *
     * Left-associative: the running node folds into the left operand.
     */
    fn expression(&mut self) -> PascResult<Node> {
        let mut node = self.term()?;
        while self.current_is_operator(&["+", "-"]) {
            let operator = match self.current.clone() {
                Some(token) => token,
                None => return Err(PascError::missing_token("operator")),
            };
            self.analyze(TokenKind::Operator)?;
            let right = self.term()?;
            node = Node::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }
        Ok(node)
    }

    /**
     * Parse a term according to the grammar:
     * term = factor { ( "*" | "/" | "DIV" ) factor }
     */
    fn term(&mut self) -> PascResult<Node> {
        let mut node = self.factor()?;
        while self.current_is_operator(&["*", "/"])
            || self.current_kind() == Some(TokenKind::IntegerDiv)
        {
            let operator = match self.current.clone() {
                Some(token) => token,
                None => return Err(PascError::missing_token("operator")),
            };
            self.analyze(operator.kind)?;
            let right = self.factor()?;
            node = Node::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }
        Ok(node)
    }

    /**
     * Parse a factor according to the grammar:
     * factor = number | "(" expression ")" | ( "+" | "-" ) factor | variable
     */
    fn factor(&mut self) -> PascResult<Node> {
        let token = match &self.current {
            Some(token) => token.clone(),
            None => return Err(PascError::missing_token("factor")),
        };
        match token.kind {
            TokenKind::IntegerConst => {
                self.analyze(TokenKind::IntegerConst)?;
                Ok(Node::Number {
                    literal: token.text().to_string(),
                })
            }
            TokenKind::RealConst => {
                self.analyze(TokenKind::RealConst)?;
                Ok(Node::Number {
                    literal: token.text().to_string(),
                })
            }
            TokenKind::OpenParen => {
                self.analyze(TokenKind::OpenParen)?;
                let node = self.expression()?;
                self.analyze(TokenKind::CloseParen)?;
                Ok(node)
            }
            TokenKind::Operator => {
                // Unary `+`/`-` desugars into a binary operation over a
                // synthesized zero, keeping every operation two-operand.
                self.analyze(TokenKind::Operator)?;
                let right = self.factor()?;
                Ok(Node::BinaryOperation {
                    left: Box::new(Node::Number {
                        literal: "0".to_string(),
                    }),
                    operator: token,
                    right: Box::new(right),
                })
            }
            _ => self.variable(),
        }
    }
}

// Convenience function mirroring the three-call pipeline API
pub fn parse(tokens: Vec<Token>) -> PascResult<Node> {
    Parser::new(tokens).parse()
}
