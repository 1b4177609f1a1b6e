pub trait Matrix<T>
where
    Self: Sized,
{
    fn to_list(&self) -> Vec<Vec<T>>;

    fn is_rref(&self) -> bool;
    fn at(&self, row: usize, col: usize) -> T;
}
