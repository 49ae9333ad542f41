use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("{tester} kept {found} values, expected {expected}")]
    UniqueMismatch {
        tester: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("size count {requested} exceeds the {max} available sizes")]
    SizeOutOfRange { requested: usize, max: usize },
    #[error("unique count {requested} exceeds the {max} available unique counts")]
    UniqueOutOfRange { requested: usize, max: usize },
    #[error("`{0}`")]
    Io(#[from] std::io::Error),
}
