use cosmwasm_std::{StdError, StdResult, Uint128};

/// Renders a decimal-scaled token amount as a human readable string,
/// trimming trailing zeros of the fractional part.
pub fn amount_to_str(amount: Uint128, decimals: u8) -> String {
    let divisor = Uint128::from(10u128.pow(decimals as u32));
    let whole = amount / divisor;
    let fractional = amount.checked_rem(divisor).unwrap_or_default();

    if fractional.is_zero() {
        return whole.to_string();
    }

    let fractional = format!("{:0>width$}", fractional.u128(), width = decimals as usize);
    let fractional = fractional.trim_end_matches('0');

    format!("{}.{}", whole, fractional)
}

/// Parses a human readable amount back into its decimal-scaled form.
/// Fractional digits beyond the token precision are cut off.
pub fn str_to_amount(value: &str, decimals: u8) -> StdResult<Uint128> {
    let parsing_err = || StdError::generic_err(format!("Parsing amount error: {value:?}"));
    let range_err = || StdError::generic_err("Amount is out of range!");

    let (whole, fractional) = value.split_once('.').unwrap_or((value, ""));

    let whole = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().map_err(|_| parsing_err())?
    };

    let mut fractional = format!("{:0<width$}", fractional, width = decimals as usize);
    fractional.truncate(decimals as usize);
    let fractional = if fractional.is_empty() {
        0
    } else {
        fractional.parse::<u128>().map_err(|_| parsing_err())?
    };

    let divisor = Uint128::from(10u128.pow(decimals as u32));

    Uint128::from(whole)
        .checked_mul(divisor)
        .and_then(|x| x.checked_add(Uint128::from(fractional)))
        .map_err(|_| range_err())
}
