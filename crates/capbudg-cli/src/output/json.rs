use capbudg_core::error::CapBudgError;
use serde_json::json;

pub fn print<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CapBudgError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

pub fn print_error(err: &CapBudgError) {
    let body = json!({
        "error": err.kind(),
        "status": err.status_code(),
        "detail": err.to_string(),
    });
    println!("{body:#}");
}
