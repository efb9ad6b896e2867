//! Assertion macros for results returned by the parameter store.

/// Assert that a result is Err with the given stable error code, and return the error
#[macro_export]
macro_rules! assert_err_code {
    ($expr:expr, $code:expr) => {
        match $expr {
            Ok(val) => panic!("Expected Err({}), got Ok: {:?}", $code, val),
            Err(err) => {
                assert_eq!($crate::ErrorCode::code(&err), $code, "unexpected error: {:?}", err);
                err
            }
        }
    };
}

/// Assert that a result is OK and unwrap it
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("Expected Ok, got Err: {:?}", err),
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("Expected Ok, got Err: {:?} ({})", err, format!($($arg)+)),
        }
    };
}

/// Assert that a result is Err and unwrap the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(val) => panic!("Expected Err, got Ok: {:?}", val),
            Err(err) => err,
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(val) => panic!("Expected Err, got Ok: {:?} ({})", val, format!($($arg)+)),
            Err(err) => err,
        }
    };
}
