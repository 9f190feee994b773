//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.
//! Field names match the constants in `formorder_core_types::schema`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use formorder_core::log_op_start;
/// log_op_start!("rearrange");
/// log_op_start!("rearrange", base_len = 12usize);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use formorder_core::log_op_end;
/// log_op_end!("rearrange", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into an `ExError` so the event carries the
/// stable kind and code, plus the offending key or field type when the
/// error names one.
///
/// # Example
///
/// ```
/// # use formorder_core::log_op_error;
/// # use formorder_core::errors::FormOrderError;
/// let err = FormOrderError::UnknownFieldType { field_type: "phone".to_string() };
/// log_op_error!("registry_lookup", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            key = ex_err.key(),
            field_type = ex_err.field_type(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            key = ex_err.key(),
            field_type = ex_err.field_type(),
            $($field)*
        );
    }};
}
