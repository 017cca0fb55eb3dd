//! Comparison operators of the template language.

use std::fmt;

/// Comparison operator in a template expression.
///
/// The evaluator hands one of these to the comparison engine together with
/// the two operand values. Which operand type pairs are legal for which
/// operator is decided by the engine, not here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CmpOp {
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
}

impl CmpOp {
    /// The canonical source symbol, used in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::NotEq => "!=",
            CmpOp::Lt => "<",
            CmpOp::Gt => ">",
            CmpOp::LtEq => "<=",
            CmpOp::GtEq => ">=",
        }
    }

    /// A spelled-out name for contexts where the symbol would be ambiguous.
    pub const fn name(self) -> &'static str {
        match self {
            CmpOp::Eq => "equals",
            CmpOp::NotEq => "not-equals",
            CmpOp::Lt => "less-than",
            CmpOp::Gt => "greater-than",
            CmpOp::LtEq => "less-than-equals",
            CmpOp::GtEq => "greater-than-equals",
        }
    }

    /// Whether this is `==` or `!=`.
    ///
    /// Strings and booleans only support the equality pair; relational
    /// operators on them are an error.
    pub const fn is_equality(self) -> bool {
        matches!(self, CmpOp::Eq | CmpOp::NotEq)
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols() {
        assert_eq!(CmpOp::Eq.as_symbol(), "==");
        assert_eq!(CmpOp::NotEq.as_symbol(), "!=");
        assert_eq!(CmpOp::Lt.as_symbol(), "<");
        assert_eq!(CmpOp::Gt.as_symbol(), ">");
        assert_eq!(CmpOp::LtEq.as_symbol(), "<=");
        assert_eq!(CmpOp::GtEq.as_symbol(), ">=");
    }

    #[test]
    fn names() {
        assert_eq!(CmpOp::Eq.name(), "equals");
        assert_eq!(CmpOp::GtEq.name(), "greater-than-equals");
    }

    #[test]
    fn equality_pair() {
        assert!(CmpOp::Eq.is_equality());
        assert!(CmpOp::NotEq.is_equality());
        assert!(!CmpOp::Lt.is_equality());
        assert!(!CmpOp::Gt.is_equality());
        assert!(!CmpOp::LtEq.is_equality());
        assert!(!CmpOp::GtEq.is_equality());
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(format!("{}", CmpOp::LtEq), "<=");
    }
}
