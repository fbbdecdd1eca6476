/// Constructs a [`Vec`]<[`Value`](crate::Value)> from a list of native data types.
#[macro_export]
macro_rules! values {
    ($($v:expr),* $(,)?) => {{
        vec![$($crate::Value::from($v),)*]
    }};
}

/// Constructs a [`Value::List`](crate::Value::List) from a list of native data types.
///
/// # Examples
///
/// ```rust
/// use vellum::Value;
///
/// let list = vellum::list!["a", 1, true];
///
/// assert_eq!(
///     Value::List(vec![Value::from("a"), Value::from(1), Value::from(true)]),
///     list,
/// );
/// ```
#[macro_export]
macro_rules! list {
    ($($v:expr),* $(,)?) => {{
        $crate::Value::List(
            $crate::values!($($v,)*)
        )
    }};
}

/// Constructs a [`Document`](crate::Document) from a list of field name/value pairs.
///
/// # Examples
///
/// ```rust
/// use vellum::Value;
///
/// let doc = vellum::doc!("name" => "aurelia", "age" => 3);
///
/// assert_eq!(Some(&Value::from("aurelia")), doc.get("name"));
/// assert_eq!(Some(&Value::from(3)), doc.get("age"));
/// ```
#[macro_export]
macro_rules! doc {
    ($($k:expr => $v:expr),* $(,)?) => {{
        $crate::Document::from_iter([$((String::from($k), $crate::Value::from($v)),)*])
    }};
}
