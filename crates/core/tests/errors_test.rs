use rentsync_core::errors::{RentError, RentResult};
use std::error::Error;

#[test]
fn test_rent_error_display() {
    let not_found = RentError::NotFound("Asset calendar not found".to_string());
    let validation = RentError::Validation("Invalid input".to_string());
    let database = RentError::Database(eyre::eyre!("Database connection failed"));
    let internal = RentError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Asset calendar not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let rent_error = RentError::Internal(Box::new(io_error));

    assert!(rent_error.source().is_some());
}

#[test]
fn test_rent_result() {
    let result: RentResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: RentResult<i32> = Err(RentError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let rent_error = RentError::Internal(boxed_error);

    assert!(rent_error.to_string().contains("IO error"));
}
