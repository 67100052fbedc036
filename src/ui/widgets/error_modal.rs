use crate::errors::Error;

#[derive(Default, Clone)]
pub struct ErrorModal {
    pub title: String,
    pub message: String,
    pub open: bool,
}

impl<T> From<T> for ErrorModal
where
    T: AsRef<Error>,
{
    fn from(error_like: T) -> Self {
        let error_ref = error_like.as_ref();
        Self {
            title: error_ref.error_type(),
            message: error_ref.to_string(),
            open: true,
        }
    }
}
