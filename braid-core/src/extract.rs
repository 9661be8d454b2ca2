//! Compile-time extraction of callable and container shapes.
//!
//! Everything in this module is resolved by the type system alone: there is
//! no runtime dispatch, no type tag, and no fallback. A callable without a
//! single fixed signature, or a position index past the end of a parameter
//! list, fails to compile.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

/// A callable normalized to a uniform invocable-with-fixed-signature form.
///
/// `Args` is the callable's full parameter list as a tuple, which lets one
/// trait cover every arity. Blanket implementations bridge every `FnMut`
/// closure, function pointer, and function object into this shape, so a
/// caller never names the signature explicitly — it is recovered from the
/// callable's own type.
///
/// # Example
///
/// ```
/// use braid_core::extract::Signature;
///
/// fn arity_of<Args, F: Signature<Args>>(_: &F) -> usize {
///     F::ARITY
/// }
///
/// let scale = |x: f64, by: f64| x * by;
/// assert_eq!(arity_of(&scale), 2);
///
/// let mut hypot = |x: f64, y: f64| (x * x + y * y).sqrt();
/// assert_eq!(hypot.invoke((3.0, 4.0)), 5.0);
/// ```
pub trait Signature<Args> {
    /// The callable's return type.
    type Output;

    /// The number of parameters the callable declares.
    const ARITY: usize;

    /// Invokes the callable with its full argument list as one tuple.
    fn invoke(&mut self, args: Args) -> Self::Output;
}

impl<F, R> Signature<()> for F
where
    F: FnMut() -> R,
{
    type Output = R;

    const ARITY: usize = 0;

    fn invoke(&mut self, (): ()) -> R {
        self()
    }
}

impl<F, A, R> Signature<(A,)> for F
where
    F: FnMut(A) -> R,
{
    type Output = R;

    const ARITY: usize = 1;

    fn invoke(&mut self, args: (A,)) -> R {
        self(args.0)
    }
}

impl<F, A, B, R> Signature<(A, B)> for F
where
    F: FnMut(A, B) -> R,
{
    type Output = R;

    const ARITY: usize = 2;

    fn invoke(&mut self, args: (A, B)) -> R {
        self(args.0, args.1)
    }
}

impl<F, A, B, C, R> Signature<(A, B, C)> for F
where
    F: FnMut(A, B, C) -> R,
{
    type Output = R;

    const ARITY: usize = 3;

    fn invoke(&mut self, args: (A, B, C)) -> R {
        self(args.0, args.1, args.2)
    }
}

impl<F, A, B, C, D, R> Signature<(A, B, C, D)> for F
where
    F: FnMut(A, B, C, D) -> R,
{
    type Output = R;

    const ARITY: usize = 4;

    fn invoke(&mut self, args: (A, B, C, D)) -> R {
        self(args.0, args.1, args.2, args.3)
    }
}

/// Positional access to the `I`-th type in an argument tuple.
///
/// Combined with [`Signature`], this answers "what is the type of a
/// callable's `i`-th parameter" without the caller writing it out:
///
/// ```
/// use braid_core::extract::{ArgAt, SameAs};
///
/// fn assert_same<A, B: SameAs<A>>() {}
///
/// assert_same::<ArgAt<(u8, String), 1>, String>();
/// ```
pub trait Arg<const I: usize> {
    /// The type at position `I`.
    type Type;
}

/// The `I`-th type in the argument tuple `Args`.
pub type ArgAt<Args, const I: usize> = <Args as Arg<I>>::Type;

impl<A> Arg<0> for (A,) {
    type Type = A;
}

impl<A, B> Arg<0> for (A, B) {
    type Type = A;
}

impl<A, B> Arg<1> for (A, B) {
    type Type = B;
}

impl<A, B, C> Arg<0> for (A, B, C) {
    type Type = A;
}

impl<A, B, C> Arg<1> for (A, B, C) {
    type Type = B;
}

impl<A, B, C> Arg<2> for (A, B, C) {
    type Type = C;
}

impl<A, B, C, D> Arg<0> for (A, B, C, D) {
    type Type = A;
}

impl<A, B, C, D> Arg<1> for (A, B, C, D) {
    type Type = B;
}

impl<A, B, C, D> Arg<2> for (A, B, C, D) {
    type Type = C;
}

impl<A, B, C, D> Arg<3> for (A, B, C, D) {
    type Type = D;
}

/// Positional access to the `I`-th type argument of a container's own
/// parametrization.
///
/// This is distinct from the container's element type: a `BTreeMap<K, V>`
/// iterates over pairs, but its parameters at positions 0 and 1 are `K` and
/// `V`. Asking for a position the container does not have is a compile
/// error.
///
/// ```
/// use std::collections::BTreeMap;
/// use braid_core::extract::{ParamAt, SameAs};
///
/// fn assert_same<A, B: SameAs<A>>() {}
///
/// assert_same::<ParamAt<Vec<i64>, 0>, i64>();
/// assert_same::<ParamAt<BTreeMap<String, bool>, 1>, bool>();
/// ```
pub trait TypeParam<const I: usize> {
    /// The type argument at position `I`.
    type Param;
}

/// The `I`-th type argument of the container `C`.
pub type ParamAt<C, const I: usize> = <C as TypeParam<I>>::Param;

impl<T> TypeParam<0> for Vec<T> {
    type Param = T;
}

impl<T> TypeParam<0> for VecDeque<T> {
    type Param = T;
}

impl<T> TypeParam<0> for LinkedList<T> {
    type Param = T;
}

impl<T> TypeParam<0> for BTreeSet<T> {
    type Param = T;
}

impl<T> TypeParam<0> for HashSet<T> {
    type Param = T;
}

impl<K, V> TypeParam<0> for BTreeMap<K, V> {
    type Param = K;
}

impl<K, V> TypeParam<1> for BTreeMap<K, V> {
    type Param = V;
}

impl<K, V> TypeParam<0> for HashMap<K, V> {
    type Param = K;
}

impl<K, V> TypeParam<1> for HashMap<K, V> {
    type Param = V;
}

/// A marker satisfied only when `Self` and `T` are the same type.
///
/// Useful as a bound for static assertions about extracted shapes; a
/// mismatch is a compile error, never a runtime check.
pub trait SameAs<T> {}

impl<T> SameAs<T> for T {}
