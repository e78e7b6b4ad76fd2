pub mod generate;
pub mod init;
pub mod shopping;

/// Writes `value` to stdout as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}
