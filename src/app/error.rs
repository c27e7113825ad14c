use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("GUI error: {0}")]
    Fltk(#[from] fltk::prelude::FltkError),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fltk::prelude::FltkError;

    #[test]
    fn test_fltk_error_conversion() {
        let fltk_err = FltkError::Unknown("could not create window".to_string());
        let app_err: AppError = fltk_err.into();
        assert!(matches!(app_err, AppError::Fltk(_)));
        assert!(app_err.to_string().contains("could not create window"));
    }

    #[test]
    fn test_error_display_prefix() {
        let err = AppError::Fltk(FltkError::Unknown("bad icon".to_string()));
        assert!(err.to_string().starts_with("GUI error:"));
    }
}
