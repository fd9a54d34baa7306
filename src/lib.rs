pub mod matrix {
    pub mod element;
    pub mod elimination;
    pub mod error;
    pub mod matrix;
    pub mod transform;
}
pub mod rings {
    pub mod fraction;
}
