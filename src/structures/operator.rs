use alloc::borrow::Cow;
use alloc::sync::Arc;
use core::fmt;

/// A binary operation `E × E → E`.
///
/// Implemented for every `Fn(&E, &E) -> E`, so closures and plain functions
/// can be used directly. Implement it by hand for operators that carry state,
/// such as a lookup table.
///
/// Operators must be total over `E`: the law checks may call them with values
/// produced by earlier applications, which need not lie in the element set.
pub trait BinaryOperator<E> {
    /// Apply the operation to `a` and `b`.
    fn apply(&self, a: &E, b: &E) -> E;
}

impl<E, F> BinaryOperator<E> for F
where
    F: Fn(&E, &E) -> E,
{
    #[inline]
    fn apply(&self, a: &E, b: &E) -> E {
        self(a, b)
    }
}

/// A named, shareable handle to a [`BinaryOperator`].
///
/// Cloning is cheap and clones refer to the same underlying operation.
/// Two handles are *identical* ([`Operator::same_as`]) only when they share
/// the operation; algebraic agreement of different operators is decided by
/// the structure comparisons instead.
///
/// # Example
///
/// ```
/// use algebraic_structures::Operator;
///
/// let add = Operator::new("+", |a: &i64, b: &i64| a + b);
/// assert_eq!(add.apply(&2, &3), 5);
/// assert_eq!(add.to_string(), "+");
///
/// let copy = add.clone();
/// assert!(copy.same_as(&add));
/// ```
pub struct Operator<E> {
    name: Cow<'static, str>,
    op: Arc<dyn BinaryOperator<E> + Send + Sync>,
}

impl<E> Operator<E> {
    /// Create an operator from a closure or function.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, op: F) -> Self
    where
        F: Fn(&E, &E) -> E + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            op: Arc::new(op),
        }
    }

    /// Create an operator from any [`BinaryOperator`] implementation.
    pub fn from_operator<O>(name: impl Into<Cow<'static, str>>, op: O) -> Self
    where
        O: BinaryOperator<E> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            op: Arc::new(op),
        }
    }

    /// Apply the operator to `a` and `b`.
    #[inline]
    pub fn apply(&self, a: &E, b: &E) -> E {
        self.op.apply(a, b)
    }

    /// The display name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `self` and `other` are handles to the same operation.
    pub fn same_as(&self, other: &Self) -> bool {
        core::ptr::eq(
            Arc::as_ptr(&self.op) as *const (),
            Arc::as_ptr(&other.op) as *const (),
        )
    }
}

impl<E> Clone for Operator<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            op: Arc::clone(&self.op),
        }
    }
}

impl<E> fmt::Debug for Operator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operator({})", self.name)
    }
}

impl<E> fmt::Display for Operator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
