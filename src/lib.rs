pub mod approx_eq;
pub mod error;

pub mod math {
    mod square_matrix;

    pub mod color;
    pub mod matrix;
    pub mod matrix2;
    pub mod matrix3;
    pub mod noise;
    pub mod point;
    pub mod transform;
    pub mod tuple;
    pub mod vector;
}

pub mod render {
    pub mod canvas;
    pub mod intersection;
    pub mod ray;
    pub mod renderer;
}

pub mod scene;
