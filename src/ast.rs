use crate::frontend::token::Token;

/// Abstract syntax tree for the Pascal subset.
///
/// One closed variant set, matched exhaustively by every consumer: adding a
/// variant without updating the pseudocode generator is a compile error, not
/// a runtime surprise. Nodes are pure data; each child is exclusively owned
/// by its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `PROGRAM name ; block .`
    Program { name: String, block: Box<Node> },
    /// Declarations followed by the program's compound statement.
    Block {
        declarations: Vec<Node>,
        compound: Box<Node>,
    },
    /// `VAR x : INTEGER` — one node per declared variable.
    VariableDeclaration {
        variable: Box<Node>,
        type_spec: Box<Node>,
    },
    /// A type name, `INTEGER` or `REAL`.
    Type { literal: String },
    /// `BEGIN … END` statement list.
    Compound { statements: Vec<Node> },
    /// `target := value`, the `:=` form of a binary operation.
    Assignment { target: Box<Node>, value: Box<Node> },
    BinaryOperation {
        left: Box<Node>,
        operator: Token,
        right: Box<Node>,
    },
    /// Numeric literal, kept as its raw source text.
    Number { literal: String },
    Variable { name: String },
    /// Empty statement placeholder.
    NoOperation,
}

impl Node {
    /// Variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Program { .. } => "Program",
            Node::Block { .. } => "Block",
            Node::VariableDeclaration { .. } => "VariableDeclaration",
            Node::Type { .. } => "Type",
            Node::Compound { .. } => "Compound",
            Node::Assignment { .. } => "Assignment",
            Node::BinaryOperation { .. } => "BinaryOperation",
            Node::Number { .. } => "Number",
            Node::Variable { .. } => "Variable",
            Node::NoOperation => "NoOperation",
        }
    }
}
