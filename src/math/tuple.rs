/// Common interface of points and vectors, used by matrix multiplication.
/// `w` is 1 for points (translation applies) and 0 for vectors.
pub trait Tuple {
    fn new(x: f64, y: f64, z: f64) -> Self;

    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
    fn w(&self) -> f64;
}
