use super::{
    matrix2::Matrix2,
    square_matrix::{cofactor_expansion, square_matrix},
};

square_matrix!(Matrix3, 3);
cofactor_expansion!(Matrix3, 3, Matrix2);
