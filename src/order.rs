use crate::Dimension;

/// Memory order of a dynamic container.
///
/// Order refers to how the multi-index space is laid out in the linear
/// buffer.
///
/// - `RowMajor` means that the last index is the most rapidly changing
/// - `ColumnMajor` means that the first index is the most rapidly changing
///
/// Given the storage sequence 1, 2, 3, 4, 5, 6 of a 2 x 3 matrix, row major
/// order reads it as:
///
/// ```text
/// 1  2  3
/// 4  5  6
/// ```
///
/// and column major order as:
///
/// ```text
/// 1  3  5
/// 2  4  6
/// ```
///
/// Logical element order (iteration, generators, formatting) is always row
/// major, whatever the memory order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Order
{
    /// Row major or "C" order
    #[default]
    RowMajor,
    /// Column major or "F" order
    ColumnMajor,
}

impl Order
{
    /// "C" is an alias for row major ordering
    pub const C: Order = Order::RowMajor;

    /// "F" (for Fortran) is an alias for column major ordering
    pub const F: Order = Order::ColumnMajor;

    /// Return true if input is Order::RowMajor, false otherwise
    #[inline]
    pub fn is_row_major(self) -> bool
    {
        match self {
            Order::RowMajor => true,
            Order::ColumnMajor => false,
        }
    }

    /// Return true if input is Order::ColumnMajor, false otherwise
    #[inline]
    pub fn is_column_major(self) -> bool
    {
        !self.is_row_major()
    }

    /// Return the transpose: row major becomes column major and vice versa.
    #[inline]
    pub fn transpose(self) -> Order
    {
        match self {
            Order::RowMajor => Order::ColumnMajor,
            Order::ColumnMajor => Order::RowMajor,
        }
    }

    /// Contiguous strides for `dim` in this order.
    #[inline]
    pub(crate) fn strides_for<D: Dimension>(self, dim: &D) -> D
    {
        match self {
            Order::RowMajor => dim.default_strides(),
            Order::ColumnMajor => dim.fortran_strides(),
        }
    }
}
