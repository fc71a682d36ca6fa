// File: crates/chart-core/src/series.rs
// Summary: Generic record access: any record type plotted through a pair of x/y projections.

use std::fmt;
use std::sync::Arc;

use crate::scale::{extent, Value};

/// Projection from a record to one numeric coordinate.
pub type Accessor<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// The x/y projections the chart uses to read a record. Records may carry any
/// number of other fields; only these two are ever consulted.
pub struct Accessors<T> {
    x: Accessor<T>,
    y: Accessor<T>,
}

impl<T> Accessors<T> {
    pub fn new<FX, FY>(x: FX, y: FY) -> Self
    where
        FX: Fn(&T) -> Value + Send + Sync + 'static,
        FY: Fn(&T) -> Value + Send + Sync + 'static,
    {
        Self { x: Arc::new(x), y: Arc::new(y) }
    }

    #[inline]
    pub fn x(&self, d: &T) -> Value { (self.x)(d) }
    #[inline]
    pub fn y(&self, d: &T) -> Value { (self.y)(d) }
    #[inline]
    pub fn project(&self, d: &T) -> (Value, Value) { (self.x(d), self.y(d)) }
}

impl Accessors<(Value, Value)> {
    /// Accessors for plain `(x, y)` tuples.
    pub fn tuple() -> Self {
        Self::new(|p: &(Value, Value)| p.0, |p: &(Value, Value)| p.1)
    }
}

impl<T> Clone for Accessors<T> {
    fn clone(&self) -> Self {
        Self { x: Arc::clone(&self.x), y: Arc::clone(&self.y) }
    }
}

impl<T> fmt::Debug for Accessors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessors").finish_non_exhaustive()
    }
}

/// Borrowed, ordered dataset viewed through its accessors.
pub struct Series<'a, T> {
    data: &'a [T],
    accessors: &'a Accessors<T>,
}

impl<'a, T> Series<'a, T> {
    pub fn new(data: &'a [T], accessors: &'a Accessors<T>) -> Self {
        Self { data, accessors }
    }

    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
    pub fn records(&self) -> &'a [T] { self.data }

    /// Domain coordinates of record `i`.
    pub fn get(&self, i: usize) -> Option<(Value, Value)> {
        self.data.get(i).map(|d| self.accessors.project(d))
    }

    /// Domain coordinates in dataset order.
    pub fn points(&self) -> impl Iterator<Item = (Value, Value)> + '_ {
        self.data.iter().map(move |d| self.accessors.project(d))
    }

    pub fn extent_x(&self) -> Option<(Value, Value)> {
        extent(self.data.iter().map(|d| self.accessors.x(d)))
    }

    pub fn extent_y(&self) -> Option<(Value, Value)> {
        extent(self.data.iter().map(|d| self.accessors.y(d)))
    }
}
