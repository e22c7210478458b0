use crate::dimension::IntoDimension;
use crate::order::Order;
use crate::Dimension;

/// A contiguous tensor shape: extents plus memory order.
///
/// Anything that converts into extents (`usize`, tuples, arrays, `Dim`)
/// is a row major `Shape`; call [`.f()`](ShapeBuilder::f) to ask for column
/// major memory order instead.
///
/// ```
/// use ndtensor::{DrMatrix, Order, ShapeBuilder};
///
/// let m = DrMatrix::<f64>::zeros((2, 3).f());
/// assert_eq!(m.order(), Order::ColumnMajor);
/// assert_eq!(m.strides(), &[1, 2]);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Shape<D>
{
    pub(crate) dim: D,
    pub(crate) order: Order,
}

impl<D> Shape<D>
{
    /// Memory order of this shape.
    pub fn order(&self) -> Order
    {
        self.order
    }

    /// The extents.
    pub fn raw_dim(&self) -> &D
    {
        &self.dim
    }
}

/// A tensor shape with explicit strides, for building views over existing
/// memory.
#[derive(Copy, Clone, Debug)]
pub struct StrideShape<D>
{
    pub(crate) dim: D,
    pub(crate) strides: Strides<D>,
}

impl<D> StrideShape<D>
where D: Dimension
{
    /// Return a reference to the extents
    pub fn raw_dim(&self) -> &D
    {
        &self.dim
    }

    /// Return the number of elements
    pub fn size(&self) -> usize
    {
        self.dim.size()
    }
}

/// Stride description
#[derive(Copy, Clone, Debug)]
pub(crate) enum Strides<D>
{
    /// Row-major ("C"-order)
    C,
    /// Column-major ("F"-order)
    F,
    /// Custom strides
    Custom(D),
}

impl<D> Strides<D>
{
    /// Return strides for `dim` (computed from dimension if c/f, else return the custom stride)
    pub(crate) fn strides_for_dim(self, dim: &D) -> D
    where D: Dimension
    {
        match self {
            Strides::C => dim.default_strides(),
            Strides::F => dim.fortran_strides(),
            Strides::Custom(c) => c,
        }
    }
}

/// A trait for `Shape` and `D where D: Dimension` that allows
/// customizing the memory layout (strides) of a tensor shape.
///
/// This trait is used together with tensor constructor methods like
/// `DrTensor::from_shape_vec` and `TensorView::from_shape`.
pub trait ShapeBuilder
{
    type Dim: Dimension;
    type Strides;

    fn into_shape(self) -> Shape<Self::Dim>;
    /// Column major memory order.
    fn f(self) -> Shape<Self::Dim>;
    /// Column major memory order if `is_f` is true.
    fn set_f(self, is_f: bool) -> Shape<Self::Dim>;
    /// The given memory order.
    fn with_order(self, order: Order) -> Shape<Self::Dim>;
    /// Explicit strides, only meaningful for views.
    fn strides(self, strides: Self::Strides) -> StrideShape<Self::Dim>;
}

impl<D> From<D> for Shape<D>
where D: Dimension
{
    /// Create a `Shape` from `dimension`, using the default memory layout.
    fn from(dimension: D) -> Shape<D>
    {
        dimension.into_shape()
    }
}

impl<T, D> From<T> for StrideShape<D>
where
    D: Dimension,
    T: ShapeBuilder<Dim = D>,
{
    fn from(value: T) -> Self
    {
        let shape = value.into_shape();
        let strides = match shape.order {
            Order::RowMajor => Strides::C,
            Order::ColumnMajor => Strides::F,
        };
        StrideShape { strides, dim: shape.dim }
    }
}

impl<T> ShapeBuilder for T
where T: IntoDimension
{
    type Dim = T::Dim;
    type Strides = T;

    fn into_shape(self) -> Shape<Self::Dim>
    {
        Shape {
            dim: self.into_dimension(),
            order: Order::RowMajor,
        }
    }

    fn f(self) -> Shape<Self::Dim>
    {
        self.set_f(true)
    }

    fn set_f(self, is_f: bool) -> Shape<Self::Dim>
    {
        self.into_shape().set_f(is_f)
    }

    fn with_order(self, order: Order) -> Shape<Self::Dim>
    {
        self.into_shape().with_order(order)
    }

    fn strides(self, st: T) -> StrideShape<Self::Dim>
    {
        self.into_shape().strides(st.into_dimension())
    }
}

impl<D> ShapeBuilder for Shape<D>
where D: Dimension
{
    type Dim = D;
    type Strides = D;

    fn into_shape(self) -> Shape<D>
    {
        self
    }

    fn f(self) -> Self
    {
        self.set_f(true)
    }

    fn set_f(self, is_f: bool) -> Self
    {
        self.with_order(if is_f { Order::ColumnMajor } else { Order::RowMajor })
    }

    fn with_order(mut self, order: Order) -> Self
    {
        self.order = order;
        self
    }

    fn strides(self, st: D) -> StrideShape<D>
    {
        StrideShape {
            dim: self.dim,
            strides: Strides::Custom(st),
        }
    }
}
