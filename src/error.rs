use thiserror::Error;

/// Contract violations reported by [`LinkedList`](crate::LinkedList).
///
/// A failed call never mutates the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("index {index} out of range for list of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("list is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, ListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_size() {
        let err = ListError::IndexOutOfRange { index: 7, size: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for list of size 3");
    }

    #[test]
    fn empty_message() {
        assert_eq!(ListError::Empty.to_string(), "list is empty");
    }
}
