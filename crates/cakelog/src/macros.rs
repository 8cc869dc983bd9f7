/// Build the auxiliary argument list of a log call
///
/// Each expression is converted with `Value::from`, so strings, numbers,
/// booleans, options and `serde_json` values can be mixed freely.
///
/// # Example
///
/// ```
/// # use cakelog::{args, Value};
/// let args = args!["attempt", 3, true];
/// assert_eq!(args, vec![Value::from("attempt"), Value::from(3), Value::from(true)]);
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}
