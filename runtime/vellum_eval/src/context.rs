//! The evaluation context: the strategies a single evaluation runs with.
//!
//! Everything pluggable about comparison and coercion (the arithmetic
//! engine, the collator, the value formatters) is carried in an
//! [`EvalContext`] passed explicitly into every engine call. There is no
//! ambient or thread-local configuration: behavior is fully determined by
//! the arguments, which also makes each strategy trivially swappable in
//! tests.
//!
//! Contexts are cheap to clone (the strategies are shared behind `Arc`)
//! and safe to use from multiple threads as long as the injected
//! strategies are, which their traits require.

use std::sync::Arc;

use crate::arith::{ArithmeticEngine, DecimalArithmetic};
use crate::collate::{CodepointCollator, Collator};
use crate::format::{
    BooleanFormat, DateFormat, DefaultBooleanFormat, DefaultDateFormat, DefaultNumberFormat,
    NumberFormat,
};

/// Read-only bundle of evaluation strategies.
#[derive(Clone)]
pub struct EvalContext {
    arithmetic: Arc<dyn ArithmeticEngine>,
    collator: Arc<dyn Collator>,
    number_format: Arc<dyn NumberFormat>,
    date_format: Arc<dyn DateFormat>,
    boolean_format: Arc<dyn BooleanFormat>,
}

impl EvalContext {
    /// Start building a context; every strategy not set explicitly falls
    /// back to its default.
    pub fn builder() -> EvalContextBuilder {
        EvalContextBuilder::new()
    }

    /// The numeric comparison strategy.
    #[inline]
    pub fn arithmetic(&self) -> &dyn ArithmeticEngine {
        &*self.arithmetic
    }

    /// The string collation strategy.
    #[inline]
    pub fn collator(&self) -> &dyn Collator {
        &*self.collator
    }

    /// The number formatter.
    #[inline]
    pub fn number_format(&self) -> &dyn NumberFormat {
        &*self.number_format
    }

    /// The date formatter.
    #[inline]
    pub fn date_format(&self) -> &dyn DateFormat {
        &*self.date_format
    }

    /// The boolean-to-text rule.
    #[inline]
    pub fn boolean_format(&self) -> &dyn BooleanFormat {
        &*self.boolean_format
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        EvalContext::builder().build()
    }
}

/// Builder for [`EvalContext`].
#[derive(Default)]
pub struct EvalContextBuilder {
    arithmetic: Option<Arc<dyn ArithmeticEngine>>,
    collator: Option<Arc<dyn Collator>>,
    number_format: Option<Arc<dyn NumberFormat>>,
    date_format: Option<Arc<dyn DateFormat>>,
    boolean_format: Option<Arc<dyn BooleanFormat>>,
}

impl EvalContextBuilder {
    /// Create a builder with no strategies set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given numeric comparison strategy.
    #[must_use]
    pub fn with_arithmetic(mut self, engine: Arc<dyn ArithmeticEngine>) -> Self {
        self.arithmetic = Some(engine);
        self
    }

    /// Use the given string collation strategy.
    #[must_use]
    pub fn with_collator(mut self, collator: Arc<dyn Collator>) -> Self {
        self.collator = Some(collator);
        self
    }

    /// Use the given number formatter.
    #[must_use]
    pub fn with_number_format(mut self, format: Arc<dyn NumberFormat>) -> Self {
        self.number_format = Some(format);
        self
    }

    /// Use the given date formatter.
    #[must_use]
    pub fn with_date_format(mut self, format: Arc<dyn DateFormat>) -> Self {
        self.date_format = Some(format);
        self
    }

    /// Use the given boolean-to-text rule.
    #[must_use]
    pub fn with_boolean_format(mut self, format: Arc<dyn BooleanFormat>) -> Self {
        self.boolean_format = Some(format);
        self
    }

    /// Build the context, filling unset strategies with defaults.
    pub fn build(self) -> EvalContext {
        EvalContext {
            arithmetic: self.arithmetic.unwrap_or_else(|| Arc::new(DecimalArithmetic)),
            collator: self.collator.unwrap_or_else(|| Arc::new(CodepointCollator)),
            number_format: self
                .number_format
                .unwrap_or_else(|| Arc::new(DefaultNumberFormat)),
            date_format: self
                .date_format
                .unwrap_or_else(|| Arc::new(DefaultDateFormat)),
            boolean_format: self
                .boolean_format
                .unwrap_or_else(|| Arc::new(DefaultBooleanFormat)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;
    use crate::arith::ArithmeticError;
    use vellum_value::Number;

    struct ReversedArithmetic;

    impl ArithmeticEngine for ReversedArithmetic {
        fn compare_numbers(
            &self,
            a: &Number,
            b: &Number,
        ) -> Result<Ordering, ArithmeticError> {
            DecimalArithmetic.compare_numbers(a, b).map(Ordering::reverse)
        }
    }

    #[test]
    fn default_context_wires_all_defaults() {
        let ctx = EvalContext::default();
        assert_eq!(
            ctx.arithmetic()
                .compare_numbers(&Number::Int(1), &Number::Int(2)),
            Ok(Ordering::Less)
        );
        assert_eq!(ctx.collator().compare_strings("a", "b"), Ordering::Less);
        assert_eq!(ctx.boolean_format().format(true), Ok("true".to_string()));
    }

    #[test]
    fn builder_overrides_one_strategy_keeping_the_rest() {
        let ctx = EvalContext::builder()
            .with_arithmetic(Arc::new(ReversedArithmetic))
            .build();
        assert_eq!(
            ctx.arithmetic()
                .compare_numbers(&Number::Int(1), &Number::Int(2)),
            Ok(Ordering::Greater)
        );
        // Collator untouched.
        assert_eq!(ctx.collator().compare_strings("a", "b"), Ordering::Less);
    }
}
