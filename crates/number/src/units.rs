use {
    alloy::primitives::{
        U256,
        utils::{ParseUnits, parse_units},
    },
    anyhow::{Context, Result, anyhow, bail},
};

/// Parses an amount literal like `"1 gwei"` or `"0.01 gwei"` into wei.
///
/// The literal is a decimal number optionally followed by a unit name
/// (`wei`, `kwei`, `mwei`, `gwei`, `szabo`, `finney`, `ether` or `eth`).
/// Without a unit the number is taken as wei. Negative amounts are rejected.
pub fn parse_amount(literal: &str) -> Result<U256> {
    let mut parts = literal.split_whitespace();
    let amount = parts
        .next()
        .with_context(|| format!("empty amount {literal:?}"))?;
    let unit = match parts.next().map(str::to_ascii_lowercase) {
        None => "wei".to_string(),
        Some(unit) if unit == "eth" => "ether".to_string(),
        Some(unit) => unit,
    };
    if let Some(trailing) = parts.next() {
        bail!("unexpected {trailing:?} after amount {literal:?}");
    }

    match parse_units(amount, unit.as_str())
        .map_err(|err| anyhow!("invalid amount {literal:?}: {err}"))?
    {
        ParseUnits::U256(value) => Ok(value),
        ParseUnits::I256(_) => bail!("negative amount {literal:?}"),
    }
}

/// Like [`parse_amount`] but for values that have to fit a `u128`, such as
/// per-gas fee rates.
pub fn parse_amount_u128(literal: &str) -> Result<u128> {
    let value = parse_amount(literal)?;
    u128::try_from(value).map_err(|_| anyhow!("amount {literal:?} does not fit into u128"))
}
