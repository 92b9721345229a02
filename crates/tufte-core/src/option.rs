// File: crates/tufte-core/src/option.rs
// Summary: Literal-or-computed option values and the per-point resolver.

use std::fmt;
use std::rc::Rc;

use crate::data::DataPoint;
use crate::options::ChartOptions;

/// Everything a computed option may look at. `stacked_index` is `None` when
/// resolving per stack (labels) or per legend row.
pub struct OptionContext<'a, E: ?Sized = DataPoint> {
    pub element: &'a E,
    pub index: usize,
    pub stacked_index: Option<usize>,
    pub options: &'a ChartOptions,
}

/// A configuration value: either fixed, or computed from the element being drawn.
pub enum OptionValue<T, E: ?Sized = DataPoint> {
    Literal(T),
    Computed(Rc<dyn Fn(&OptionContext<'_, E>) -> T>),
}

impl<T, E: ?Sized> OptionValue<T, E> {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&OptionContext<'_, E>) -> T + 'static,
    {
        OptionValue::Computed(Rc::new(f))
    }
}

impl<T: Clone, E: ?Sized> OptionValue<T, E> {
    /// Literals come back unchanged; computed values are invoked with `ctx`.
    pub fn resolve(&self, ctx: &OptionContext<'_, E>) -> T {
        match self {
            OptionValue::Literal(v) => v.clone(),
            OptionValue::Computed(f) => f(ctx),
        }
    }
}

impl<T: Clone, E: ?Sized> Clone for OptionValue<T, E> {
    fn clone(&self) -> Self {
        match self {
            OptionValue::Literal(v) => OptionValue::Literal(v.clone()),
            OptionValue::Computed(f) => OptionValue::Computed(Rc::clone(f)),
        }
    }
}

impl<T: fmt::Debug, E: ?Sized> fmt::Debug for OptionValue<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            OptionValue::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl<T, E: ?Sized> From<T> for OptionValue<T, E> {
    fn from(v: T) -> Self { OptionValue::Literal(v) }
}

impl<E: ?Sized> From<&str> for OptionValue<String, E> {
    fn from(v: &str) -> Self { OptionValue::Literal(v.to_string()) }
}

/// Resolve `option` against `element` and the positional context.
pub fn resolve<T: Clone, E: ?Sized>(
    option: &OptionValue<T, E>,
    element: &E,
    index: usize,
    stacked_index: Option<usize>,
    options: &ChartOptions,
) -> T {
    option.resolve(&OptionContext { element, index, stacked_index, options })
}

/// `resolve` with the element and indices already bound, handed to strategies.
pub struct Resolver<'a, E: ?Sized = DataPoint> {
    ctx: OptionContext<'a, E>,
}

impl<'a, E: ?Sized> Resolver<'a, E> {
    pub fn new(
        element: &'a E,
        index: usize,
        stacked_index: Option<usize>,
        options: &'a ChartOptions,
    ) -> Self {
        Self { ctx: OptionContext { element, index, stacked_index, options } }
    }

    pub fn resolve<T: Clone>(&self, option: &OptionValue<T, E>) -> T {
        option.resolve(&self.ctx)
    }

    pub fn index(&self) -> usize { self.ctx.index }
}
